//! # wesplit-core: Pure Bill-Splitting Logic
//!
//! This crate is the **heart** of WeSplit. It turns a check amount, a tip
//! percentage and a number of people into the amount each person owes.
//! Everything here is a pure function or a small value type.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        WeSplit Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               Front end (terminal, desktop, web)                │   │
//! │  │    Amount field ──► Tip picker ──► People picker ──► Total      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ owns BillState, one update at a time   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ wesplit-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐ ┌────────────┐ ┌────────────┐ ┌────────────┐  │   │
//! │  │   │ validation │ │ calculator │ │ selection  │ │   format   │  │   │
//! │  │   │ filter     │ │ per-person │ │ people/tip │ │ Currency-  │  │   │
//! │  │   │ parse      │ │ breakdown  │ │ listings   │ │ Formatter  │  │   │
//! │  │   └────────────┘ └────────────┘ └────────────┘ └────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOCALE LOOKUP • NO SHARED STATE • PURE FUNCTIONS  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Value types (Percentage, PeopleCount, BillState, SelectionOption)
//! - [`money`] - Non-negative monetary amount
//! - [`calculator`] - Tip, grand total and per-person arithmetic
//! - [`selection`] - People-count selector and tip picker listings
//! - [`validation`] - Amount entry filtering and parsing
//! - [`format`] - Currency formatting seam
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use wesplit_core::calculator::compute_per_person_total;
//! use wesplit_core::validation::parse_amount;
//! use wesplit_core::Percentage;
//!
//! let amount = parse_amount("100.0");
//! let per_person = compute_per_person_total(amount, Percentage::new(20), 4).unwrap();
//!
//! assert_eq!(per_person.value(), 30.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod error;
pub mod format;
pub mod money;
pub mod selection;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::BillBreakdown;
pub use error::{CoreError, CoreResult, ValidationError};
pub use format::{CurrencyFormatter, CurrencyStyle, FallbackCurrencyFormatter};
pub use money::Money;
pub use selection::PeopleSelector;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Tip percentages offered by the tip picker, in display order.
///
/// Must contain 0 and [`DEFAULT_TIP_PERCENTAGE`].
pub const TIP_PERCENTAGES: [u32; 5] = [0, 10, 15, 20, 25];

/// Tip preselected when a session starts.
pub const DEFAULT_TIP_PERCENTAGE: u32 = 20;

/// Smallest selectable number of people.
pub const MIN_PEOPLE: u32 = 2;

/// Largest selectable number of people.
pub const MAX_PEOPLE: u32 = 99;

/// People count preselected when a session starts.
pub const DEFAULT_NUMBER_OF_PEOPLE: u32 = 2;

/// Fraction digits accepted in the amount field.
pub const MAX_FRACTION_DIGITS: usize = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tip_percentages() {
        assert_eq!(TIP_PERCENTAGES, [0, 10, 15, 20, 25]);
        assert!(TIP_PERCENTAGES.contains(&0));
        assert!(TIP_PERCENTAGES.contains(&DEFAULT_TIP_PERCENTAGE));
    }

    #[test]
    fn test_people_range_defaults() {
        assert_eq!(MIN_PEOPLE, 2);
        assert_eq!(MAX_PEOPLE, 99);
        assert!((MIN_PEOPLE..=MAX_PEOPLE).contains(&DEFAULT_NUMBER_OF_PEOPLE));
    }
}
