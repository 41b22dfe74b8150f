//! # Motor Capability Table
//!
//! Reference lookup from a nominal prop-size label (the same string the user
//! enters for the prop diameter, e.g. `"26"`) to the maximum thrust one motor
//! of that class can deliver.
//!
//! The sizing engine only sees the [`MotorTable`] trait, so tests and callers
//! can swap in their own data. A missing label is a normal outcome and leads
//! to a `NoData` margin, not an error.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use ring_core::motors::{MotorTable, BUILTIN_MOTORS};
//!
//! assert_eq!(BUILTIN_MOTORS.max_thrust_n("26"), Some(260.0));
//! assert_eq!(BUILTIN_MOTORS.max_thrust_n("27"), None);
//!
//! let mut synthetic: HashMap<String, f64> = HashMap::new();
//! synthetic.insert("26".to_string(), 100.0);
//! assert_eq!(synthetic.max_thrust_n("26"), Some(100.0));
//! ```

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Motor counts offered by the front ends (not enforced by the engine)
pub const MOTOR_COUNT_OPTIONS: [u32; 3] = [4, 6, 8];

/// Read-only prop-size to max-thrust lookup.
pub trait MotorTable {
    /// Maximum thrust per motor in newtons for a prop-size label
    fn max_thrust_n(&self, prop_label: &str) -> Option<f64>;
}

impl MotorTable for HashMap<String, f64> {
    fn max_thrust_n(&self, prop_label: &str) -> Option<f64> {
        self.get(prop_label).copied()
    }
}

impl MotorTable for BTreeMap<String, f64> {
    fn max_thrust_n(&self, prop_label: &str) -> Option<f64> {
        self.get(prop_label).copied()
    }
}

/// One row of the motor database
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotorEntry {
    /// Rated maximum thrust per motor (N)
    pub max_thrust_n: f64,
}

/// Serializable motor table keyed by prop-size label.
///
/// ## JSON Example
///
/// ```json
/// {
///   "entries": {
///     "10": { "max_thrust_n": 40.0 },
///     "26": { "max_thrust_n": 260.0 }
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MotorDatabase {
    pub entries: BTreeMap<String, MotorEntry>,
}

impl MotorDatabase {
    /// Build a database from `(label, max_thrust_n)` pairs
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        MotorDatabase {
            entries: pairs
                .into_iter()
                .map(|(label, max_thrust_n)| (label.to_string(), MotorEntry { max_thrust_n }))
                .collect(),
        }
    }

    /// Prop-size labels in numeric order (non-numeric labels last)
    pub fn prop_sizes(&self) -> Vec<&str> {
        let mut sizes: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        sizes.sort_by(|a, b| {
            match (a.parse::<f64>().ok(), b.parse::<f64>().ok()) {
                (Some(x), Some(y)) => x.total_cmp(&y).then_with(|| a.cmp(b)),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => a.cmp(b),
            }
        });
        sizes
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MotorTable for MotorDatabase {
    fn max_thrust_n(&self, prop_label: &str) -> Option<f64> {
        self.entries.get(prop_label).map(|e| e.max_thrust_n)
    }
}

/// Built-in table. Rough placeholder figures pending bench data.
pub static BUILTIN_MOTORS: Lazy<MotorDatabase> = Lazy::new(|| {
    MotorDatabase::from_pairs([
        ("10", 40.0),
        ("12", 60.0),
        ("14", 80.0),
        ("16", 110.0),
        ("18", 140.0),
        ("20", 170.0),
        ("22", 200.0),
        ("24", 230.0),
        ("26", 260.0),
        ("30", 320.0),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        assert_eq!(BUILTIN_MOTORS.len(), 10);
        assert_eq!(BUILTIN_MOTORS.max_thrust_n("10"), Some(40.0));
        assert_eq!(BUILTIN_MOTORS.max_thrust_n("30"), Some(320.0));
        // Labels are matched verbatim
        assert_eq!(BUILTIN_MOTORS.max_thrust_n("26.0"), None);
        assert_eq!(BUILTIN_MOTORS.max_thrust_n(""), None);
    }

    #[test]
    fn test_prop_sizes_numeric_order() {
        // BTreeMap order would put "10" < "12" < ... but "8" after "30"
        let db = MotorDatabase::from_pairs([("30", 1.0), ("8", 1.0), ("12", 1.0), ("custom", 1.0)]);
        assert_eq!(db.prop_sizes(), vec!["8", "12", "30", "custom"]);
    }

    #[test]
    fn test_json_roundtrip() {
        let json = serde_json::to_string(&*BUILTIN_MOTORS).unwrap();
        let back: MotorDatabase = serde_json::from_str(&json).unwrap();
        assert_eq!(back, *BUILTIN_MOTORS);
    }
}
