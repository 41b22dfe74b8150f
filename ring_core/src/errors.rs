//! # Error Types
//!
//! Structured error types for ring_core. Input problems are reported through
//! [`ValidationError`] so a front end can show a single, consolidated message;
//! everything else (file writes, JSON) goes through [`CalcError`].
//!
//! ## Example
//!
//! ```rust
//! use ring_core::errors::{CalcError, CalcResult, ValidationError};
//!
//! fn parse_count(raw: &str) -> CalcResult<u32> {
//!     let n: i64 = raw
//!         .trim()
//!         .parse()
//!         .map_err(|_| ValidationError::not_a_number("motor_count", raw))?;
//!     if n <= 0 {
//!         return Err(ValidationError::NonPositiveMotorCount { value: n }.into());
//!     }
//!     Ok(n as u32)
//! }
//!
//! assert!(parse_count("4").is_ok());
//! assert_eq!(parse_count("0").unwrap_err().error_code(), "NON_POSITIVE_MOTOR_COUNT");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for ring_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Input validation failures raised at the boundary of the sizing engine.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ValidationError {
    /// A numeric field could not be parsed (or parsed to NaN/infinity)
    #[error("Please check your inputs (numbers only): {field} = '{value}'")]
    NotANumber { field: String, value: String },

    /// Motor count parsed but is zero or negative
    #[error("Number of motors must be greater than zero (got {value})")]
    NonPositiveMotorCount { value: i64 },
}

impl ValidationError {
    /// Create a NotANumber error
    pub fn not_a_number(field: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::NotANumber {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Structured error type for every ring_core operation.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Raw inputs failed validation; nothing was computed
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Export requested before any successful computation
    #[error("Nothing to export: run a successful computation first")]
    NothingToExport,
}

impl CalcError {
    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error came from input validation
    pub fn is_validation(&self) -> bool {
        matches!(self, CalcError::Validation(_))
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::Validation(ValidationError::NotANumber { .. }) => "NOT_A_NUMBER",
            CalcError::Validation(ValidationError::NonPositiveMotorCount { .. }) => {
                "NON_POSITIVE_MOTOR_COUNT"
            }
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::NothingToExport => "NOTHING_TO_EXPORT",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error: CalcError = ValidationError::not_a_number("payload_mass_kg", "ten").into();
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        let nan: CalcError = ValidationError::not_a_number("x", "abc").into();
        assert_eq!(nan.error_code(), "NOT_A_NUMBER");
        assert!(nan.is_validation());
        assert_eq!(CalcError::NothingToExport.error_code(), "NOTHING_TO_EXPORT");
        assert!(!CalcError::file_error("write", "/tmp/x", "denied").is_validation());
    }

    #[test]
    fn test_messages_are_user_facing() {
        let err: CalcError = ValidationError::NonPositiveMotorCount { value: 0 }.into();
        assert_eq!(err.to_string(), "Number of motors must be greater than zero (got 0)");
    }
}
