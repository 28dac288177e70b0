//! # Money Module
//!
//! Provides the `Money` type for check amounts and split results.
//!
//! ## Why Floating Point Here?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SPLIT RESULTS KEEP FULL PRECISION                                      │
//! │                                                                         │
//! │    $47.89 + 15% tip = $55.0735                                          │
//! │    $55.0735 / 3     = $18.357833...                                     │
//! │                                                                         │
//! │  The calculator never rounds. Rounding to cents happens once, in the    │
//! │  CurrencyFormatter, when the number is shown to a person.               │
//! │                                                                         │
//! │  Nothing is ever summed back or settled, so the representation is an    │
//! │  IEEE double and results match a plain f64 computation bit for bit.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use wesplit_core::money::Money;
//!
//! let check = Money::try_new(47.89).unwrap();
//! assert_eq!(check.value(), 47.89);
//!
//! // Negative amounts do not exist in a bill split
//! assert!(Money::try_new(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::types::Percentage;

// =============================================================================
// Money Type
// =============================================================================

/// A non-negative, finite, currency-agnostic amount.
///
/// ## Invariant
/// `value() >= 0.0` and `value().is_finite()`. Every constructor checks it,
/// including deserialization.
///
/// ## User Workflow Context
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                    Where Money is Used                                  │
/// │                                                                         │
/// │  Amount field ──► parse_amount ──► BillState.amount                     │
/// │                                         │                               │
/// │                                         ▼                               │
/// │                       tip value ──► grand total ──► per-person total    │
/// │                                                          │              │
/// │                                                          ▼              │
/// │                                    CurrencyFormatter: "$18.36"          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[serde(try_from = "f64", into = "f64")]
#[ts(export)]
pub struct Money(f64);

impl Money {
    /// Creates a Money value, rejecting negative and non-finite input.
    ///
    /// ## Example
    /// ```rust
    /// use wesplit_core::money::Money;
    ///
    /// assert_eq!(Money::try_new(75.5).unwrap().value(), 75.5);
    /// assert!(Money::try_new(f64::NAN).is_err());
    /// ```
    pub fn try_new(value: f64) -> CoreResult<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(CoreError::InvalidAmount(value));
        }

        // Normalise -0.0 so Display never prints "-$0.00"
        Ok(Money(value + 0.0))
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0.0)
    }

    /// Returns the raw amount.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Calculates `percentage` percent of this amount.
    ///
    /// Computed as `amount * percentage / 100` with no rounding.
    ///
    /// ## Example
    /// ```rust
    /// use wesplit_core::money::Money;
    /// use wesplit_core::Percentage;
    ///
    /// let check = Money::try_new(100.0).unwrap();
    /// assert_eq!(check.percentage(Percentage::new(20)).unwrap().value(), 20.0);
    /// ```
    pub fn percentage(&self, percentage: Percentage) -> CoreResult<Money> {
        Money::try_new(self.0 * f64::from(percentage.value()) / 100.0)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the amount with a dollar sign and two decimals.
///
/// ## Note
/// This is for logs and debugging. Use a
/// [`CurrencyFormatter`](crate::CurrencyFormatter) for anything a person reads.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl TryFrom<f64> for Money {
    type Error = CoreError;

    fn try_from(value: f64) -> CoreResult<Self> {
        Money::try_new(value)
    }
}

impl From<Money> for f64 {
    fn from(money: Money) -> f64 {
        money.0
    }
}

/// Addition of two Money values.
///
/// Two finite non-negative values can only sum to `+inf`, which would break
/// the invariant, so the sum saturates at `f64::MAX`.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money((self.0 + other.0).min(f64::MAX))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
