//! # Error Types
//!
//! Structured error types for calc_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_voltage(volts: f64) -> CalcResult<()> {
//!     if volts <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "primary_voltage".to_string(),
//!             value: volts.to_string(),
//!             reason: "Voltage must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, non-numeric, non-finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A reference-table lookup has no matching entry
    #[error("Out of standard range: {lookup} for {value} exceeds the largest entry ({max})")]
    OutOfStandardRange {
        lookup: String,
        value: String,
        max: String,
    },

    /// Named transformer preset does not exist
    #[error("Preset not found: {name}")]
    PresetNotFound { name: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an OutOfStandardRange error
    pub fn out_of_standard_range(lookup: impl Into<String>, value: impl Into<String>, max: impl Into<String>) -> Self {
        CalcError::OutOfStandardRange {
            lookup: lookup.into(),
            value: value.into(),
            max: max.into(),
        }
    }

    /// Create a PresetNotFound error
    pub fn preset_not_found(name: impl Into<String>) -> Self {
        CalcError::PresetNotFound { name: name.into() }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Name of the offending field, for errors that carry one
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::InvalidInput { field, .. } | CalcError::MissingField { field } => Some(field),
            _ => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::OutOfStandardRange { .. } => "OUT_OF_STANDARD_RANGE",
            CalcError::PresetNotFound { .. } => "PRESET_NOT_FOUND",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("kva_rating", "-5", "Rating must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("test").error_code(), "MISSING_FIELD");
        assert_eq!(CalcError::preset_not_found("x").error_code(), "PRESET_NOT_FOUND");
        assert_eq!(
            CalcError::out_of_standard_range("device rating", "9000 A", "6300 A").error_code(),
            "OUT_OF_STANDARD_RANGE"
        );
    }

    #[test]
    fn test_field_accessor() {
        let err = CalcError::invalid_input("power_factor", "1.2", "out of range");
        assert_eq!(err.field(), Some("power_factor"));
        assert_eq!(CalcError::preset_not_found("x").field(), None);
    }

    #[test]
    fn test_display_message() {
        let err = CalcError::out_of_standard_range("protective device rating", "8000.0 A", "6300 A");
        assert_eq!(
            err.to_string(),
            "Out of standard range: protective device rating for 8000.0 A exceeds the largest entry (6300 A)"
        );
    }
}
