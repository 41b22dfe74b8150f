//! # Design Session
//!
//! Host-owned state for an interactive front end: the settings in effect,
//! the last successful result and its export block. A failed computation
//! clears both, so a stale export can never be saved after bad input.
//!
//! ## Example
//!
//! ```rust
//! use ring_core::inputs::RawInputs;
//! use ring_core::session::DesignSession;
//!
//! let mut session = DesignSession::default();
//! assert!(session.export_block().is_none());
//!
//! session.compute(&RawInputs::default()).unwrap();
//! assert!(session.export_block().is_some());
//!
//! let bad = RawInputs { motor_count: "0".to_string(), ..RawInputs::default() };
//! assert!(session.compute(&bad).is_err());
//! assert!(session.export_block().is_none());
//! ```

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculations::{self, SizingResult};
use crate::errors::{CalcError, CalcResult};
use crate::file_io;
use crate::inputs::RawInputs;
use crate::layout::{self, LayoutPrimitive};
use crate::report::{self, ExportBlock, Report};
use crate::settings::Settings;

/// Latest successful computation with its formatted output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub result: SizingResult,
    pub report: Report,
    pub computed_at: DateTime<Utc>,
}

/// Owns what a front end keeps between computations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DesignSession {
    pub settings: Settings,
    last: Option<SessionSnapshot>,
}

impl DesignSession {
    pub fn new(settings: Settings) -> Self {
        DesignSession { settings, last: None }
    }

    /// Compute from raw inputs and retain the result.
    ///
    /// On error the previously retained result is dropped.
    pub fn compute(&mut self, raw: &RawInputs) -> CalcResult<&SessionSnapshot> {
        let outcome = calculations::compute(raw, self.settings.motor_table(), &self.settings.design);
        match outcome {
            Ok(result) => {
                let report = report::format_result(&result);
                Ok(self.last.insert(SessionSnapshot {
                    result,
                    report,
                    computed_at: Utc::now(),
                }))
            }
            Err(e) => {
                self.last = None;
                Err(e)
            }
        }
    }

    pub fn last(&self) -> Option<&SessionSnapshot> {
        self.last.as_ref()
    }

    /// Export block of the last successful computation, if it has any lines
    pub fn export_block(&self) -> Option<&ExportBlock> {
        self.last
            .as_ref()
            .map(|s| &s.report.export)
            .filter(|block| !block.is_empty())
    }

    /// Layout primitives for the last successful computation (empty if none)
    pub fn layout(&self) -> Vec<LayoutPrimitive> {
        match &self.last {
            Some(snapshot) => layout::project_with(
                &snapshot.result.geometry,
                snapshot.result.input.motor_count,
                &self.settings.design,
            ),
            None => Vec::new(),
        }
    }

    /// Write the retained export block to `path`.
    ///
    /// # Errors
    ///
    /// * `CalcError::NothingToExport` - no successful computation yet
    /// * `CalcError::FileError` - the write failed
    pub fn save_export(&self, path: &Path) -> CalcResult<()> {
        let block = self.export_block().ok_or(CalcError::NothingToExport)?;
        file_io::save_export(block, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motors::MotorDatabase;
    use std::env::temp_dir;
    use std::fs;

    #[test]
    fn test_save_before_compute() {
        let session = DesignSession::default();
        let path = temp_dir().join("ringconfig_test_nothing.txt");
        let err = session.save_export(&path).unwrap_err();
        assert_eq!(err, CalcError::NothingToExport);
        assert!(session.layout().is_empty());
    }

    #[test]
    fn test_failed_compute_clears_state() {
        let mut session = DesignSession::default();
        session.compute(&RawInputs::default()).unwrap();
        assert!(session.last().is_some());

        let bad = RawInputs {
            prop_diameter_in: "twenty".to_string(),
            ..RawInputs::default()
        };
        let err = session.compute(&bad).unwrap_err();
        assert_eq!(err.error_code(), "NOT_A_NUMBER");
        assert!(session.last().is_none());
        assert!(session.export_block().is_none());
    }

    #[test]
    fn test_save_after_compute_writes_block() {
        let mut session = DesignSession::default();
        session.compute(&RawInputs::default()).unwrap();

        let path = temp_dir().join("ringconfig_test_session_export.txt");
        session.save_export(&path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, session.export_block().unwrap().to_string());
        assert!(written.starts_with("#prop_diameter = 660 mm"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_session_uses_custom_motor_table() {
        let settings = Settings {
            motors: Some(MotorDatabase::from_pairs([("26", 80.0)])),
            ..Settings::default()
        };
        let mut session = DesignSession::new(settings);
        let snapshot = session.compute(&RawInputs::default()).unwrap();
        // 80 / 76.03 ≈ 1.05
        assert_eq!(snapshot.result.propulsion.margin.label(), "BORDERLINE");
    }

    #[test]
    fn test_empty_export_block_is_not_offered() {
        let mut session = DesignSession::default();
        session.compute(&RawInputs::default()).unwrap();
        if let Some(snapshot) = session.last.as_mut() {
            snapshot.report.export = ExportBlock::default();
        }

        assert!(session.export_block().is_none());
        let path = temp_dir().join("ringconfig_test_empty_export.txt");
        assert_eq!(session.save_export(&path).unwrap_err(), CalcError::NothingToExport);
    }

    #[test]
    fn test_layout_follows_last_result() {
        let mut session = DesignSession::default();
        session
            .compute(&RawInputs {
                motor_count: "8".to_string(),
                ..RawInputs::default()
            })
            .unwrap();
        assert_eq!(session.layout().len(), 2 + 3 * 8);
    }
}
