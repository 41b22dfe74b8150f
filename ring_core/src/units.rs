//! # Unit Types
//!
//! Type-safe wrappers for the handful of units the configurator deals in.
//! These are plain `f64` newtypes that serialize as bare numbers.
//!
//! Inputs arrive in mixed units (prop diameter in inches, masses in kg,
//! clearance in mm); all geometry is computed and exported in millimetres,
//! all forces in newtons.
//!
//! ## Example
//!
//! ```rust
//! use ring_core::units::{Inches, Kilograms, Millimeters};
//!
//! let prop: Millimeters = Inches(10.0).into();
//! assert!((prop.0 - 254.0).abs() < 1e-9);
//!
//! let weight = Kilograms(1.0).weight();
//! assert!((weight.0 - 9.81).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

/// Millimetres per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Standard gravity used for weight (m/s²)
pub const GRAVITY: f64 = 9.81;

// ============================================================================
// Length Units
// ============================================================================

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Inches> for Millimeters {
    fn from(inches: Inches) -> Self {
        Millimeters(inches.0 * MM_PER_INCH)
    }
}

impl From<Millimeters> for Inches {
    fn from(mm: Millimeters) -> Self {
        Inches(mm.0 / MM_PER_INCH)
    }
}

// ============================================================================
// Mass and Force Units
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

impl Kilograms {
    /// Weight of this mass under standard gravity
    pub fn weight(self) -> Newtons {
        Newtons(self.0 * GRAVITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inch_mm_conversion() {
        let mm: Millimeters = Inches(26.0).into();
        assert!((mm.0 - 660.4).abs() < 1e-9);

        let back: Inches = mm.into();
        assert!((back.0 - 26.0).abs() < 1e-12);
    }

    #[test]
    fn test_weight() {
        let w = Kilograms(15.5).weight();
        assert!((w.0 - 152.055).abs() < 1e-9);
    }

    #[test]
    fn test_serialization_is_transparent() {
        let json = serde_json::to_string(&Millimeters(12.5)).unwrap();
        assert_eq!(json, "12.5");
    }
}
