//! # Settings
//!
//! Tunable design constants and the optional motor table override.
//! Settings are plain JSON so they can live next to a design:
//!
//! ```json
//! {
//!   "design": {
//!     "motor_offset_factor": 0.3,
//!     "tube_od_fraction": 0.2,
//!     "tube_od_floor_mm": 100.0,
//!     "motor_dot_radius_mm": 20.0
//!   },
//!   "motors": { "entries": { "26": { "max_thrust_n": 260.0 } } }
//! }
//! ```
//!
//! Every field is optional; missing fields fall back to the built-in values.

use serde::{Deserialize, Serialize};

use crate::motors::{MotorDatabase, BUILTIN_MOTORS};

/// Center-to-motor distance beyond the prop radius, as a fraction of prop diameter
pub const MOTOR_OFFSET_FACTOR: f64 = 0.3;

/// Tube outer diameter as a fraction of prop diameter
pub const TUBE_OD_FRACTION: f64 = 0.20;

/// Smallest tube outer diameter (mm)
pub const TUBE_OD_FLOOR_MM: f64 = 100.0;

/// Radius of the motor marker in layout output (mm)
pub const MOTOR_DOT_RADIUS_MM: f64 = 20.0;

/// Empirical design constants used by the sizing engine and layout projector.
///
/// The defaults reproduce the established ring geometry. Changing them
/// changes exported dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignConstants {
    /// Extra motor offset beyond the prop radius, times prop diameter
    pub motor_offset_factor: f64,
    /// Tube OD as a fraction of prop diameter (before the floor applies)
    pub tube_od_fraction: f64,
    /// Minimum tube OD in mm
    pub tube_od_floor_mm: f64,
    /// Motor marker radius for layout primitives (mm)
    pub motor_dot_radius_mm: f64,
}

impl Default for DesignConstants {
    fn default() -> Self {
        DesignConstants {
            motor_offset_factor: MOTOR_OFFSET_FACTOR,
            tube_od_fraction: TUBE_OD_FRACTION,
            tube_od_floor_mm: TUBE_OD_FLOOR_MM,
            motor_dot_radius_mm: MOTOR_DOT_RADIUS_MM,
        }
    }
}

/// Top-level settings file contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Geometry constants
    pub design: DesignConstants,

    /// Replacement motor table; the built-in one is used when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motors: Option<MotorDatabase>,
}

impl Settings {
    /// Motor table in effect for these settings
    pub fn motor_table(&self) -> &MotorDatabase {
        self.motors.as_ref().unwrap_or(&*BUILTIN_MOTORS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motors::MotorTable;

    #[test]
    fn test_defaults_match_constants() {
        let d = DesignConstants::default();
        assert_eq!(d.motor_offset_factor, 0.3);
        assert_eq!(d.tube_od_fraction, 0.20);
        assert_eq!(d.tube_od_floor_mm, 100.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "design": { "motor_offset_factor": 0.5 } }"#).unwrap();
        assert_eq!(settings.design.motor_offset_factor, 0.5);
        assert_eq!(settings.design.tube_od_floor_mm, TUBE_OD_FLOOR_MM);
        assert!(settings.motors.is_none());
    }

    #[test]
    fn test_motor_table_fallback() {
        let settings = Settings::default();
        assert_eq!(settings.motor_table().max_thrust_n("26"), Some(260.0));

        let custom: Settings = serde_json::from_str(
            r#"{ "motors": { "entries": { "26": { "max_thrust_n": 300.0 } } } }"#,
        )
        .unwrap();
        assert_eq!(custom.motor_table().max_thrust_n("26"), Some(300.0));
        assert_eq!(custom.motor_table().max_thrust_n("10"), None);
    }
}
