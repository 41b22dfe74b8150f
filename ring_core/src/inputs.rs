//! # Input Parameters
//!
//! The engine accepts raw text exactly as a form or command line supplies it
//! and does its own parsing. [`RawInputs::parse`] is the single validation
//! point: it either returns a fully numeric [`SizingInput`] or the first
//! [`ValidationError`] it hits.
//!
//! Rules:
//! - every field is whitespace-trimmed before parsing
//! - prop diameter and motor count are required
//! - blank payload, frame mass and clearance default to 0, blank T/W to 2.0
//! - `NaN` and infinities count as "not a number"
//! - motor count must be a positive integer
//! - negative clearance is clamped to 0

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcResult, ValidationError};

/// Payload mass used when the field is blank (kg)
pub const DEFAULT_PAYLOAD_KG: f64 = 0.0;
/// Frame mass used when the field is blank (kg)
pub const DEFAULT_FRAME_KG: f64 = 0.0;
/// Thrust-to-weight ratio used when the field is blank
pub const DEFAULT_THRUST_TO_WEIGHT: f64 = 2.0;
/// Clearance used when the field is blank (mm)
pub const DEFAULT_CLEARANCE_MM: f64 = 0.0;

/// Unvalidated input fields, as entered by the user.
///
/// `Default` gives the starting values of the configurator form
/// (26" props, 4 motors, 10 kg payload, 5.5 kg frame, T/W 2, 30 mm clearance).
///
/// ## JSON Example
///
/// ```json
/// {
///   "prop_diameter_in": "26",
///   "motor_count": "4",
///   "payload_mass_kg": "10.0",
///   "frame_mass_kg": "5.5",
///   "thrust_to_weight": "2.0",
///   "clearance_mm": "30"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInputs {
    /// Propeller diameter in inches; also the motor table key
    pub prop_diameter_in: String,
    /// Number of motors around the ring
    pub motor_count: String,
    /// Payload mass in kg
    pub payload_mass_kg: String,
    /// Frame + battery + motors mass in kg
    pub frame_mass_kg: String,
    /// Desired thrust-to-weight ratio
    pub thrust_to_weight: String,
    /// Prop tip to tube inner wall clearance in mm
    pub clearance_mm: String,
}

impl Default for RawInputs {
    fn default() -> Self {
        RawInputs {
            prop_diameter_in: "26".to_string(),
            motor_count: "4".to_string(),
            payload_mass_kg: "10.0".to_string(),
            frame_mass_kg: "5.5".to_string(),
            thrust_to_weight: "2.0".to_string(),
            clearance_mm: "30".to_string(),
        }
    }
}

/// Validated, numeric inputs to the sizing engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingInput {
    /// Trimmed prop-size text, used verbatim as the motor table key
    pub prop_label: String,
    /// Propeller diameter (in)
    pub prop_diameter_in: f64,
    /// Motor count (> 0)
    pub motor_count: u32,
    /// Payload mass (kg)
    pub payload_mass_kg: f64,
    /// Frame mass (kg)
    pub frame_mass_kg: f64,
    /// Thrust-to-weight ratio
    pub thrust_to_weight: f64,
    /// Clearance after clamping (mm, >= 0)
    pub clearance_mm: f64,
}

impl RawInputs {
    /// Validate and convert to numeric form.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ring_core::inputs::RawInputs;
    ///
    /// let raw = RawInputs {
    ///     payload_mass_kg: "  ".to_string(),
    ///     clearance_mm: "-5".to_string(),
    ///     ..RawInputs::default()
    /// };
    /// let input = raw.parse().unwrap();
    /// assert_eq!(input.payload_mass_kg, 0.0);
    /// assert_eq!(input.clearance_mm, 0.0);
    /// ```
    pub fn parse(&self) -> CalcResult<SizingInput> {
        let prop_diameter_in = parse_required("prop_diameter_in", &self.prop_diameter_in)?;
        let motor_count = parse_motor_count(&self.motor_count)?;
        let payload_mass_kg = parse_optional("payload_mass_kg", &self.payload_mass_kg, DEFAULT_PAYLOAD_KG)?;
        let frame_mass_kg = parse_optional("frame_mass_kg", &self.frame_mass_kg, DEFAULT_FRAME_KG)?;
        let thrust_to_weight =
            parse_optional("thrust_to_weight", &self.thrust_to_weight, DEFAULT_THRUST_TO_WEIGHT)?;
        let mut clearance_mm = parse_optional("clearance_mm", &self.clearance_mm, DEFAULT_CLEARANCE_MM)?;

        if clearance_mm < 0.0 {
            debug!(clearance_mm, "negative clearance clamped to zero");
        }
        // also folds -0.0 into 0.0 so exports never read "-0"
        if clearance_mm <= 0.0 {
            clearance_mm = 0.0;
        }

        Ok(SizingInput {
            prop_label: self.prop_diameter_in.trim().to_string(),
            prop_diameter_in,
            motor_count,
            payload_mass_kg,
            frame_mass_kg,
            thrust_to_weight,
            clearance_mm,
        })
    }
}

fn parse_number(field: &str, raw: &str) -> Result<f64, ValidationError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ValidationError::not_a_number(field, raw))
}

fn parse_required(field: &str, raw: &str) -> Result<f64, ValidationError> {
    parse_number(field, raw)
}

fn parse_optional(field: &str, raw: &str, default: f64) -> Result<f64, ValidationError> {
    if raw.trim().is_empty() {
        Ok(default)
    } else {
        parse_number(field, raw)
    }
}

fn parse_motor_count(raw: &str) -> Result<u32, ValidationError> {
    let n: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::not_a_number("motor_count", raw))?;
    if n <= 0 {
        return Err(ValidationError::NonPositiveMotorCount { value: n });
    }
    u32::try_from(n).map_err(|_| ValidationError::not_a_number("motor_count", raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;

    fn raw(prop: &str, motors: &str) -> RawInputs {
        RawInputs {
            prop_diameter_in: prop.to_string(),
            motor_count: motors.to_string(),
            ..RawInputs::default()
        }
    }

    #[test]
    fn test_default_inputs_parse() {
        let input = RawInputs::default().parse().unwrap();
        assert_eq!(input.prop_label, "26");
        assert_eq!(input.prop_diameter_in, 26.0);
        assert_eq!(input.motor_count, 4);
        assert_eq!(input.payload_mass_kg, 10.0);
        assert_eq!(input.frame_mass_kg, 5.5);
        assert_eq!(input.thrust_to_weight, 2.0);
        assert_eq!(input.clearance_mm, 30.0);
    }

    #[test]
    fn test_whitespace_trimmed() {
        let input = raw("  18 ", "\t6\n").parse().unwrap();
        assert_eq!(input.prop_label, "18");
        assert_eq!(input.prop_diameter_in, 18.0);
        assert_eq!(input.motor_count, 6);
    }

    #[test]
    fn test_blank_optional_fields_use_defaults() {
        let input = RawInputs {
            payload_mass_kg: String::new(),
            frame_mass_kg: " ".to_string(),
            thrust_to_weight: String::new(),
            clearance_mm: String::new(),
            ..RawInputs::default()
        }
        .parse()
        .unwrap();
        assert_eq!(input.payload_mass_kg, 0.0);
        assert_eq!(input.frame_mass_kg, 0.0);
        assert_eq!(input.thrust_to_weight, 2.0);
        assert_eq!(input.clearance_mm, 0.0);
    }

    #[test]
    fn test_blank_prop_is_not_a_number() {
        let err = raw("", "4").parse().unwrap_err();
        assert_eq!(err.error_code(), "NOT_A_NUMBER");
    }

    #[test]
    fn test_garbage_is_not_a_number() {
        let err = RawInputs {
            payload_mass_kg: "ten".to_string(),
            ..RawInputs::default()
        }
        .parse()
        .unwrap_err();
        assert_eq!(
            err,
            CalcError::Validation(ValidationError::not_a_number("payload_mass_kg", "ten"))
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(raw("NaN", "4").parse().is_err());
        assert!(raw("inf", "4").parse().is_err());
    }

    #[test]
    fn test_fractional_motor_count_is_not_a_number() {
        let err = raw("26", "4.0").parse().unwrap_err();
        assert_eq!(err.error_code(), "NOT_A_NUMBER");
    }

    #[test]
    fn test_non_positive_motor_count() {
        for motors in ["0", "-3"] {
            let err = raw("26", motors).parse().unwrap_err();
            assert_eq!(err.error_code(), "NON_POSITIVE_MOTOR_COUNT");
        }
    }

    #[test]
    fn test_negative_clearance_clamped() {
        let negative = RawInputs {
            clearance_mm: "-12.5".to_string(),
            ..RawInputs::default()
        }
        .parse()
        .unwrap();
        let zero = RawInputs {
            clearance_mm: "0".to_string(),
            ..RawInputs::default()
        }
        .parse()
        .unwrap();
        assert_eq!(negative, zero);
    }
}
