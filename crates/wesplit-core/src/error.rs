//! # Error Types
//!
//! Domain-specific error types for wesplit-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  wesplit-core errors (this file)                                        │
//! │  ├── CoreError        - Calculation and selection failures              │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  terminal app errors (separate crate)                                   │
//! │  ├── AppError         - What the user sees (code + message)             │
//! │  └── ConfigError      - Bad environment configuration                   │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → terminal                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these are fatal. A rejected selection or entry leaves the prior
//! state in place and the session carries on.
//!
//! Two conditions are deliberately *not* errors: amount text that does not
//! parse is treated as zero, and a locale without currency data uses the
//! fallback formatter.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// The calculator was asked to split between zero or fewer people.
    ///
    /// ## When This Occurs
    /// Never through [`PeopleSelector`](crate::PeopleSelector), whose range
    /// starts at 2. Only a caller passing a raw count directly can hit it.
    #[error("Cannot split a bill between {0} people")]
    InvalidPeopleCount(i64),

    /// A people-count selection outside the selectable range.
    ///
    /// ## User Workflow
    /// ```text
    /// People picker (current: 2)
    ///      │
    ///      ▼
    /// select(150)
    ///      │
    ///      ▼
    /// OutOfRangeSelection { requested: 150, min: 2, max: 99 }
    ///      │
    ///      ▼
    /// Selection stays at 2
    /// ```
    #[error("Number of people must be between {min} and {max}, got {requested}")]
    OutOfRangeSelection { requested: i64, min: u32, max: u32 },

    /// A monetary amount that is negative, NaN or infinite.
    #[error("Invalid amount: {0}")]
    InvalidAmount(f64),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any business logic runs, when user input does not meet
/// the entry rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Invalid format (e.g., letters in an amount, three fraction digits).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
