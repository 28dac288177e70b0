//! # App Error Type
//!
//! Unified error type for terminal commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in WeSplit                                │
//! │                                                                         │
//! │  "people 150"                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Command::from_str ── unknown command? ── AppError(InvalidCommand) ──┐  │
//! │       │                                                              │  │
//! │       ▼                                                              │  │
//! │  BillSession::select_people                                          │  │
//! │       │                                                              │  │
//! │       ▼                                                              │  │
//! │  CoreError::OutOfRangeSelection ───────── AppError(OutOfRange) ──────┤  │
//! │                                                                      ▼  │
//! │                                       "error [OUT_OF_RANGE]: ..."       │
//! │                                       session continues, state kept     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The JSON form (`{"code": "OUT_OF_RANGE", "message": "..."}`) is what the
//! `json` output mode prints for a failed command.

use serde::Serialize;
use wesplit_core::{CoreError, ValidationError};

/// Error returned from a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Selection outside the allowed range
    OutOfRange,

    /// Input validation failed
    ValidationError,

    /// Unknown command or malformed arguments
    InvalidCommand,

    /// Calculation could not produce a result
    Internal,
}

impl ErrorCode {
    /// The serialized name, also used in terminal output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::InvalidCommand => "INVALID_COMMAND",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl AppError {
    /// Creates a new app error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an invalid command error.
    pub fn invalid_command(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::InvalidCommand, message)
    }
}

/// Converts core errors to app errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match &err {
            CoreError::OutOfRangeSelection { .. } => {
                AppError::new(ErrorCode::OutOfRange, err.to_string())
            }
            CoreError::Validation(e) => AppError::validation(e.to_string()),
            CoreError::InvalidPeopleCount(_) | CoreError::InvalidAmount(_) => {
                tracing::error!(error = %err, "calculation failed");
                AppError::new(ErrorCode::Internal, err.to_string())
            }
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::validation(err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_maps_to_code() {
        let err: AppError = CoreError::OutOfRangeSelection {
            requested: 150,
            min: 2,
            max: 99,
        }
        .into();
        assert_eq!(err.code, ErrorCode::OutOfRange);
        assert_eq!(
            err.to_string(),
            "[OUT_OF_RANGE] Number of people must be between 2 and 99, got 150"
        );
    }

    #[test]
    fn test_validation_maps_to_code() {
        let err: AppError = CoreError::Validation(ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: "only one decimal point is allowed".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(
            err.message,
            "amount has invalid format: only one decimal point is allowed"
        );
    }

    #[test]
    fn test_serialized_shape() {
        let err = AppError::invalid_command("unknown command: foo");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "code": "INVALID_COMMAND", "message": "unknown command: foo" })
        );
    }
}
