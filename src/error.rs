//! Unified error types for the size and fee estimator
//!
//! Every fallible operation returns an [`EstimatorError`] so callers
//! (library users, the CLI, and the FFI layer) see one consistent shape.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Main error type for all estimator operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatorError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<String>,
}

impl EstimatorError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    // Convenience constructors
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidParameter, msg)
    }

    pub fn value_too_large(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueTooLarge, msg)
    }

    pub fn invalid_var_int(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidVarInt, msg)
    }

    pub fn not_a_number(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotANumber, msg)
    }

    pub fn negative_multiplier(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::NegativeMultiplier, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, msg)
    }

    /// Arithmetic overflow while composing a size or fee
    pub fn overflow(what: &str) -> Self {
        Self::value_too_large(format!("{} exceeds the representable range", what))
    }
}

impl fmt::Display for EstimatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for EstimatorError {}

/// Error codes for categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    // Input errors
    InvalidParameter,
    NotANumber,
    NegativeMultiplier,

    // Encoding range errors
    ValueTooLarge,
    InvalidVarInt,

    // Parse errors
    JsonError,

    // Internal
    Internal,
}

/// Result type alias for estimator operations
pub type EstimatorResult<T> = Result<T, EstimatorError>;

impl From<serde_json::Error> for EstimatorError {
    fn from(e: serde_json::Error) -> Self {
        EstimatorError::new(ErrorCode::JsonError, e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = EstimatorError::invalid_parameter("expecting non-negative input count")
            .with_details("got: -1");

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("invalid_parameter"));
        assert!(json.contains("expecting non-negative input count"));
    }

    #[test]
    fn test_error_display() {
        let err = EstimatorError::negative_multiplier("Multiplier cannot be negative");
        assert_eq!(err.to_string(), "[NegativeMultiplier] Multiplier cannot be negative");

        let err = err.with_details("-0.5");
        assert_eq!(
            err.to_string(),
            "[NegativeMultiplier] Multiplier cannot be negative (-0.5)"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: EstimatorError = parse.unwrap_err().into();
        assert_eq!(err.code, ErrorCode::JsonError);
    }
}
