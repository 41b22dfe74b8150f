//! # Thrust Requirement and Motor Margin
//!
//! Works out how much thrust each motor must produce for the requested
//! thrust-to-weight ratio and compares it with the motor table.
//!
//! ## Margin tiers
//!
//! With `ratio = capability / thrust_per_motor`:
//!
//! | ratio | status |
//! |---|---|
//! | no table entry | `NoData` |
//! | thrust per motor <= 0 | `NoData` (nothing to compare against) |
//! | >= 1.30 | `Ok` |
//! | >= 1.00 | `Borderline` |
//! | < 1.00 | `Underpowered` |
//!
//! Boundaries fall into the better tier only when reached exactly, so 1.30
//! is `Ok` and 1.00 is `Borderline`.

use serde::{Deserialize, Serialize};

use crate::inputs::SizingInput;
use crate::motors::MotorTable;
use crate::units::{Kilograms, Newtons};

/// Ratio at or above which a motor is comfortably sized
pub const OK_RATIO: f64 = 1.30;

/// Ratio at or above which a motor can just carry its share
pub const BORDERLINE_RATIO: f64 = 1.00;

/// Why no margin could be classified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoDataReason {
    /// The motor table has no entry for the prop size
    MissingTableEntry,
    /// Required thrust per motor is zero or negative (e.g. zero total mass)
    NonPositiveDemand,
}

/// Motor capability versus demand.
///
/// ## JSON Example
///
/// ```json
/// { "status": "Ok", "ratio": 3.42, "margin_pct": 242.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum MarginStatus {
    NoData { reason: NoDataReason },
    Underpowered { ratio: f64, shortfall_pct: f64 },
    Borderline { ratio: f64, margin_pct: f64 },
    Ok { ratio: f64, margin_pct: f64 },
}

impl MarginStatus {
    /// Short upper-case label for reports
    pub fn label(&self) -> &'static str {
        match self {
            MarginStatus::NoData { .. } => "NO DATA",
            MarginStatus::Underpowered { .. } => "UNDERPOWERED",
            MarginStatus::Borderline { .. } => "BORDERLINE",
            MarginStatus::Ok { .. } => "OK",
        }
    }

    /// Capability / demand ratio, when one was computed
    pub fn ratio(&self) -> Option<f64> {
        match *self {
            MarginStatus::NoData { .. } => None,
            MarginStatus::Underpowered { ratio, .. }
            | MarginStatus::Borderline { ratio, .. }
            | MarginStatus::Ok { ratio, .. } => Some(ratio),
        }
    }

    /// Motors can deliver at least the required thrust
    pub fn is_adequate(&self) -> bool {
        matches!(self, MarginStatus::Borderline { .. } | MarginStatus::Ok { .. })
    }
}

/// Classify a motor's rated thrust against the thrust it must produce.
///
/// ```rust
/// use ring_core::calculations::propulsion::{classify_margin, MarginStatus};
///
/// assert!(matches!(classify_margin(Some(130.0), 100.0), MarginStatus::Ok { .. }));
/// assert!(matches!(classify_margin(Some(100.0), 100.0), MarginStatus::Borderline { .. }));
/// assert!(matches!(classify_margin(None, 100.0), MarginStatus::NoData { .. }));
/// ```
pub fn classify_margin(capability_n: Option<f64>, thrust_per_motor_n: f64) -> MarginStatus {
    let Some(capability_n) = capability_n else {
        return MarginStatus::NoData {
            reason: NoDataReason::MissingTableEntry,
        };
    };

    if !(thrust_per_motor_n > 0.0) {
        return MarginStatus::NoData {
            reason: NoDataReason::NonPositiveDemand,
        };
    }

    let ratio = capability_n / thrust_per_motor_n;
    if ratio >= OK_RATIO {
        MarginStatus::Ok {
            ratio,
            margin_pct: (ratio - 1.0) * 100.0,
        }
    } else if ratio >= BORDERLINE_RATIO {
        MarginStatus::Borderline {
            ratio,
            margin_pct: (ratio - 1.0) * 100.0,
        }
    } else {
        MarginStatus::Underpowered {
            ratio,
            shortfall_pct: (1.0 - ratio) * 100.0,
        }
    }
}

/// Thrust requirement and motor check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropulsionRecord {
    /// Payload + frame (kg)
    pub total_mass_kg: f64,
    /// Total weight (N)
    pub total_weight_n: f64,
    /// T/W × weight (N)
    pub total_thrust_required_n: f64,
    /// Share of the required thrust per motor (N)
    pub thrust_per_motor_n: f64,
    /// Table rating for the prop size, if known (N)
    pub motor_capability_n: Option<f64>,
    pub margin: MarginStatus,
}

/// Compute thrust demand for validated inputs and check it against `table`.
pub fn calculate(input: &SizingInput, table: &dyn MotorTable) -> PropulsionRecord {
    let total_mass = Kilograms(input.payload_mass_kg + input.frame_mass_kg);
    let Newtons(total_weight_n) = total_mass.weight();
    let total_thrust_required_n = input.thrust_to_weight * total_weight_n;
    let thrust_per_motor_n = total_thrust_required_n / f64::from(input.motor_count);

    let motor_capability_n = table.max_thrust_n(&input.prop_label);

    PropulsionRecord {
        total_mass_kg: total_mass.0,
        total_weight_n,
        total_thrust_required_n,
        thrust_per_motor_n,
        motor_capability_n,
        margin: classify_margin(motor_capability_n, thrust_per_motor_n),
    }
}
