//! # Domain Types
//!
//! Value types shared by the calculator, the pickers and the front end.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   Percentage    │   │  PeopleCount    │   │   BillState     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  u32            │   │  u32 in [2, 99] │   │  amount: Money  │       │
//! │  │  20 = 20%       │   │  default 2      │   │  people         │       │
//! │  │  default 20     │   │                 │   │  tip            │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌──────────────────────────┐                                          │
//! │  │   SelectionOption<T>     │  One row of a picker listing             │
//! │  │   value + is_selected    │                                          │
//! │  └──────────────────────────┘                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Value Semantics
//! Every type here is `Copy` and has no identity beyond its value. A change
//! to the bill produces a new [`BillState`], it is never patched in place.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::calculator::{self, BillBreakdown};
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::{DEFAULT_NUMBER_OF_PEOPLE, DEFAULT_TIP_PERCENTAGE, MAX_PEOPLE, MIN_PEOPLE, TIP_PERCENTAGES};

// =============================================================================
// Percentage
// =============================================================================

/// A whole-number percentage (20 = 20%).
///
/// The calculator accepts any value. Front ends go through
/// [`Percentage::select_offered`], which only allows [`TIP_PERCENTAGES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Percentage(u32);

impl Percentage {
    /// Creates a percentage without checking it against the offered set.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Percentage(value)
    }

    /// Creates a percentage chosen from the tip picker.
    ///
    /// ## Example
    /// ```rust
    /// use wesplit_core::Percentage;
    ///
    /// assert!(Percentage::select_offered(15).is_ok());
    /// assert!(Percentage::select_offered(18).is_err());
    /// ```
    pub fn select_offered(value: u32) -> Result<Self, ValidationError> {
        if TIP_PERCENTAGES.contains(&value) {
            Ok(Percentage(value))
        } else {
            Err(ValidationError::NotAllowed {
                field: "tip percentage".to_string(),
                allowed: TIP_PERCENTAGES.iter().map(|p| p.to_string()).collect(),
            })
        }
    }

    /// Returns the percentage as a whole number.
    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Checks if this is one of [`TIP_PERCENTAGES`].
    pub fn is_offered(&self) -> bool {
        TIP_PERCENTAGES.contains(&self.0)
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Percentage(DEFAULT_TIP_PERCENTAGE)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// =============================================================================
// People Count
// =============================================================================

/// Number of people sharing the bill, always within
/// [`MIN_PEOPLE`]..=[`MAX_PEOPLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "i64", into = "u32")]
#[ts(export)]
pub struct PeopleCount(u32);

impl PeopleCount {
    /// Creates a people count, rejecting values outside the selectable range.
    ///
    /// ## Example
    /// ```rust
    /// use wesplit_core::PeopleCount;
    ///
    /// assert_eq!(PeopleCount::new(4).unwrap().get(), 4);
    /// assert!(PeopleCount::new(1).is_err());
    /// assert!(PeopleCount::new(100).is_err());
    /// ```
    pub fn new(candidate: i64) -> CoreResult<Self> {
        if candidate < i64::from(MIN_PEOPLE) || candidate > i64::from(MAX_PEOPLE) {
            return Err(CoreError::OutOfRangeSelection {
                requested: candidate,
                min: MIN_PEOPLE,
                max: MAX_PEOPLE,
            });
        }

        Ok(PeopleCount(candidate as u32))
    }

    /// Returns the count.
    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl Default for PeopleCount {
    fn default() -> Self {
        PeopleCount(DEFAULT_NUMBER_OF_PEOPLE)
    }
}

impl TryFrom<i64> for PeopleCount {
    type Error = CoreError;

    fn try_from(value: i64) -> CoreResult<Self> {
        PeopleCount::new(value)
    }
}

impl From<PeopleCount> for u32 {
    fn from(count: PeopleCount) -> u32 {
        count.0
    }
}

impl From<PeopleCount> for i64 {
    fn from(count: PeopleCount) -> i64 {
        i64::from(count.0)
    }
}

impl fmt::Display for PeopleCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} people", self.0)
    }
}

// =============================================================================
// Bill State
// =============================================================================

/// The three inputs of a split: check amount, people and tip.
///
/// ## Lifecycle
/// ```text
/// Session start ──► BillState::default()   ($0, 2 people, 20%)
///      │
///      ├── amount edit   ──► state.with_amount(..)
///      ├── tip pick      ──► state.with_tip(..)
///      └── people pick   ──► state.with_people(..)
///                                 │
///                                 ▼
///                    state.per_person_total()   (recomputed every time)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BillState {
    /// Check amount before tip.
    pub amount: Money,

    /// Number of people sharing the bill.
    pub people: PeopleCount,

    /// Tip applied on top of the amount.
    pub tip: Percentage,
}

impl BillState {
    /// Creates a bill state from its three inputs.
    pub fn new(amount: Money, people: PeopleCount, tip: Percentage) -> Self {
        BillState { amount, people, tip }
    }

    /// Returns a copy with a different check amount.
    #[must_use]
    pub fn with_amount(self, amount: Money) -> Self {
        BillState { amount, ..self }
    }

    /// Returns a copy with a different people count.
    #[must_use]
    pub fn with_people(self, people: PeopleCount) -> Self {
        BillState { people, ..self }
    }

    /// Returns a copy with a different tip.
    #[must_use]
    pub fn with_tip(self, tip: Percentage) -> Self {
        BillState { tip, ..self }
    }

    /// Amount each person owes, tip included.
    ///
    /// A `PeopleCount` is never zero, so this only fails if the arithmetic
    /// leaves the finite range.
    pub fn per_person_total(&self) -> CoreResult<Money> {
        calculator::compute_per_person_total(self.amount, self.tip, self.people.into())
    }

    /// Tip value, grand total and per-person total for this state.
    pub fn breakdown(&self) -> CoreResult<BillBreakdown> {
        calculator::compute_breakdown(self.amount, self.tip, self.people.into())
    }
}

// =============================================================================
// Selection Option
// =============================================================================

/// One entry of a picker listing: a value and whether it is the current
/// selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SelectionOption<T> {
    pub value: T,
    pub is_selected: bool,
}

// =============================================================================
// Unit Tests
// =============================================================================
