//! # Ring Geometry
//!
//! Derives the duct ring dimensions from the prop diameter, clearance and
//! the [`DesignConstants`]. All outputs are millimetres measured from the
//! ring center.
//!
//! ## Derivation
//!
//! ```text
//! prop_diameter  = prop_in × 25.4
//! prop_radius    = prop_diameter / 2
//! motor_radius   = prop_radius + k_motor × prop_diameter     (k_motor = 0.3)
//! prop_tip       = motor_radius + prop_radius
//! tube_inner     = prop_tip + clearance
//! tube_OD        = max(floor, k_tube × prop_diameter)        (floor = 100, k_tube = 0.2)
//! tube_center    = tube_inner + tube_OD / 2
//! tube_outer     = tube_inner + tube_OD
//! ring_OD        = 2 × tube_outer
//! ```
//!
//! `tube_wall` is carried as `tube_OD / 2`. It is a placeholder kept for
//! compatibility with existing CAD variable sets, not a wall thickness.

use serde::{Deserialize, Serialize};

use crate::inputs::SizingInput;
use crate::settings::DesignConstants;
use crate::units::{Inches, Millimeters};

/// Derived ring geometry (mm).
///
/// ## JSON Example
///
/// ```json
/// {
///   "prop_diameter_mm": 660.4,
///   "prop_radius_mm": 330.2,
///   "motor_radius_mm": 528.32,
///   "prop_tip_radius_mm": 858.52,
///   "clearance_mm": 30.0,
///   "tube_od_mm": 132.08,
///   "tube_wall_mm": 66.04,
///   "tube_inner_radius_mm": 888.52,
///   "tube_center_radius_mm": 954.56,
///   "tube_outer_radius_mm": 1020.6,
///   "ring_od_mm": 2041.2
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryRecord {
    pub prop_diameter_mm: f64,
    pub prop_radius_mm: f64,
    /// Ring center to motor axis
    pub motor_radius_mm: f64,
    /// Ring center to the outermost point swept by a blade
    pub prop_tip_radius_mm: f64,
    /// Prop tip to tube inner wall (already clamped >= 0)
    pub clearance_mm: f64,
    pub tube_od_mm: f64,
    /// Placeholder, always tube_od_mm / 2
    pub tube_wall_mm: f64,
    pub tube_inner_radius_mm: f64,
    pub tube_center_radius_mm: f64,
    pub tube_outer_radius_mm: f64,
    /// Overall frame diameter
    pub ring_od_mm: f64,
}

impl GeometryRecord {
    /// True when the geometry cannot be drawn (a radius is zero, negative or not finite).
    pub fn is_degenerate(&self) -> bool {
        [
            self.tube_outer_radius_mm,
            self.tube_inner_radius_mm,
            self.motor_radius_mm,
        ]
        .iter()
        .any(|r| !(r.is_finite() && *r > 0.0))
    }

    /// True when every derived value is a finite number.
    ///
    /// Huge but finite prop diameters can overflow to infinity here.
    pub fn is_finite(&self) -> bool {
        [
            self.prop_diameter_mm,
            self.prop_radius_mm,
            self.motor_radius_mm,
            self.prop_tip_radius_mm,
            self.clearance_mm,
            self.tube_od_mm,
            self.tube_wall_mm,
            self.tube_inner_radius_mm,
            self.tube_center_radius_mm,
            self.tube_outer_radius_mm,
            self.ring_od_mm,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Compute ring geometry for validated inputs.
pub fn calculate(input: &SizingInput, constants: &DesignConstants) -> GeometryRecord {
    let prop_diameter_mm = Millimeters::from(Inches(input.prop_diameter_in)).0;
    let prop_radius_mm = prop_diameter_mm / 2.0;

    let motor_radius_mm = prop_radius_mm + constants.motor_offset_factor * prop_diameter_mm;
    let prop_tip_radius_mm = motor_radius_mm + prop_radius_mm;
    let tube_inner_radius_mm = prop_tip_radius_mm + input.clearance_mm;

    let tube_od_mm = constants
        .tube_od_floor_mm
        .max(constants.tube_od_fraction * prop_diameter_mm);
    let tube_wall_mm = tube_od_mm / 2.0;

    let tube_center_radius_mm = tube_inner_radius_mm + tube_od_mm / 2.0;
    let tube_outer_radius_mm = tube_inner_radius_mm + tube_od_mm;

    GeometryRecord {
        prop_diameter_mm,
        prop_radius_mm,
        motor_radius_mm,
        prop_tip_radius_mm,
        clearance_mm: input.clearance_mm,
        tube_od_mm,
        tube_wall_mm,
        tube_inner_radius_mm,
        tube_center_radius_mm,
        tube_outer_radius_mm,
        ring_od_mm: 2.0 * tube_outer_radius_mm,
    }
}
