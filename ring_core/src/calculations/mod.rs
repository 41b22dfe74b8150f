//! # Sizing Calculations
//!
//! Each calculation module follows the pattern:
//!
//! - a `*Record` result type (JSON-serializable)
//! - `calculate(&SizingInput, ..) -> *Record` - pure, infallible once inputs are valid
//!
//! [`compute`] is the engine entry point: it validates raw inputs once and
//! runs both calculations. Nothing is computed when validation fails.
//!
//! ## Available Calculations
//!
//! - [`geometry`] - Motor, prop tip and tube radii, ring OD
//! - [`propulsion`] - Thrust requirement and motor margin
//!
//! ## Example
//!
//! ```rust
//! use ring_core::calculations::compute;
//! use ring_core::inputs::RawInputs;
//! use ring_core::motors::BUILTIN_MOTORS;
//! use ring_core::settings::DesignConstants;
//!
//! let result = compute(&RawInputs::default(), &*BUILTIN_MOTORS, &DesignConstants::default()).unwrap();
//! assert!((result.geometry.ring_od_mm - 2041.2).abs() < 1e-9);
//! assert_eq!(result.propulsion.margin.label(), "OK");
//! ```

pub mod geometry;
pub mod propulsion;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::CalcResult;
use crate::inputs::{RawInputs, SizingInput};
use crate::motors::MotorTable;
use crate::settings::DesignConstants;

// Re-export commonly used types
pub use geometry::GeometryRecord;
pub use propulsion::{MarginStatus, NoDataReason, PropulsionRecord};

/// Everything the engine derives from one set of inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingResult {
    /// The validated inputs the records were computed from
    pub input: SizingInput,
    pub geometry: GeometryRecord,
    pub propulsion: PropulsionRecord,
}

/// Validate `raw` and compute geometry and propulsion records.
///
/// # Errors
///
/// * `CalcError::Validation(NotANumber)` - a numeric field does not parse
/// * `CalcError::Validation(NonPositiveMotorCount)` - motor count <= 0
pub fn compute(
    raw: &RawInputs,
    table: &dyn MotorTable,
    constants: &DesignConstants,
) -> CalcResult<SizingResult> {
    let input = raw.parse()?;
    Ok(compute_validated(input, table, constants))
}

/// Run both calculations on already-validated inputs.
pub fn compute_validated(
    input: SizingInput,
    table: &dyn MotorTable,
    constants: &DesignConstants,
) -> SizingResult {
    let geometry = geometry::calculate(&input, constants);
    let propulsion = propulsion::calculate(&input, table);

    if !geometry.is_finite() {
        warn!(
            prop_diameter_in = input.prop_diameter_in,
            ring_od_mm = geometry.ring_od_mm,
            "geometry overflowed, ring cannot be built"
        );
    }

    debug!(
        prop = %input.prop_label,
        motors = input.motor_count,
        ring_od_mm = geometry.ring_od_mm,
        thrust_per_motor_n = propulsion.thrust_per_motor_n,
        status = propulsion.margin.label(),
        "sizing computed"
    );

    SizingResult {
        input,
        geometry,
        propulsion,
    }
}
