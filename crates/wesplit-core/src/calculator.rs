//! # Bill Calculator
//!
//! Turns (amount, tip %, people) into what each person owes.
//!
//! ## Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   tip_value   = amount * tip / 100                                      │
//! │   grand_total = amount + tip_value                                      │
//! │   per_person  = grand_total / people                                    │
//! │                                                                         │
//! │   $47.89 @ 15% / 3:                                                     │
//! │     tip_value   = 7.1835                                                │
//! │     grand_total = 55.0735                                               │
//! │     per_person  = 18.357833...   (shown as $18.36)                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No rounding happens here; results keep full f64 precision.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Percentage;

/// All derived values of a split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BillBreakdown {
    /// Tip on top of the check amount.
    pub tip_value: Money,

    /// Check amount plus tip.
    pub grand_total: Money,

    /// Grand total divided evenly between everyone.
    pub per_person: Money,
}

/// Computes the amount each person owes, tip included.
///
/// Fails with [`CoreError::InvalidPeopleCount`] when `people <= 0`. Any
/// positive count is accepted here, including counts the people picker
/// would never offer.
///
/// ## Example
/// ```rust
/// use wesplit_core::calculator::compute_per_person_total;
/// use wesplit_core::{Money, Percentage};
///
/// let amount = Money::try_new(75.5).unwrap();
/// let per_person = compute_per_person_total(amount, Percentage::new(25), 1).unwrap();
/// assert_eq!(per_person.value(), 94.375);
///
/// assert!(compute_per_person_total(amount, Percentage::new(25), 0).is_err());
/// ```
pub fn compute_per_person_total(
    amount: Money,
    tip: Percentage,
    people: i64,
) -> CoreResult<Money> {
    compute_breakdown(amount, tip, people).map(|breakdown| breakdown.per_person)
}

/// Computes tip value, grand total and per-person total in one pass.
pub fn compute_breakdown(amount: Money, tip: Percentage, people: i64) -> CoreResult<BillBreakdown> {
    if people <= 0 {
        return Err(CoreError::InvalidPeopleCount(people));
    }

    let tip_value = amount.percentage(tip)?;
    let grand_total = Money::try_new(amount.value() + tip_value.value())?;
    let per_person = Money::try_new(grand_total.value() / people as f64)?;

    Ok(BillBreakdown {
        tip_value,
        grand_total,
        per_person,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
