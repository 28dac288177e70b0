//! # Selection
//!
//! The people picker and the tip picker.
//!
//! ## People Picker State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │           select(n), n in [2, 99]                                       │
//! │          ┌───────────────────────┐                                      │
//! │          │                       ▼                                      │
//! │   ┌──────┴───────────────────────────┐                                  │
//! │   │  Selected(count)   initial = 2   │◄──┐                              │
//! │   └──────────────────────────────────┘   │ select(n), n outside range   │
//! │                                   └──────┘ → OutOfRangeSelection,       │
//! │                                             count unchanged             │
//! │                                                                         │
//! │   No terminal state: the selection lives as long as the session.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::types::{PeopleCount, Percentage, SelectionOption};
use crate::{MAX_PEOPLE, MIN_PEOPLE, TIP_PERCENTAGES};

// =============================================================================
// People Selector
// =============================================================================

/// Tracks the current people count and guards every change to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PeopleSelector {
    current: PeopleCount,
}

impl PeopleSelector {
    /// Creates a selector holding the default count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a selector starting from an already validated count.
    pub fn with_current(current: PeopleCount) -> Self {
        PeopleSelector { current }
    }

    /// Inclusive bounds of the selectable range.
    pub const fn range() -> (u32, u32) {
        (MIN_PEOPLE, MAX_PEOPLE)
    }

    /// Returns the current selection.
    #[inline]
    pub fn current(&self) -> PeopleCount {
        self.current
    }

    /// Moves the selection to `candidate`.
    ///
    /// On error the current selection is left untouched.
    ///
    /// ## Example
    /// ```rust
    /// use wesplit_core::PeopleSelector;
    ///
    /// let mut selector = PeopleSelector::new();
    /// assert_eq!(selector.select(5).unwrap().get(), 5);
    ///
    /// assert!(selector.select(150).is_err());
    /// assert_eq!(selector.current().get(), 5);
    /// ```
    pub fn select(&mut self, candidate: i64) -> CoreResult<PeopleCount> {
        let count = PeopleCount::new(candidate)?;
        self.current = count;
        Ok(count)
    }

    /// Every selectable count in ascending order, marking the current one.
    pub fn options(&self) -> Vec<SelectionOption<u32>> {
        (MIN_PEOPLE..=MAX_PEOPLE)
            .map(|value| SelectionOption {
                value,
                is_selected: value == self.current.get(),
            })
            .collect()
    }
}

// =============================================================================
// Tip Picker
// =============================================================================

/// The offered tip percentages in display order, marking `current`.
///
/// If `current` is not an offered value nothing is marked.
pub fn tip_options(current: Percentage) -> Vec<SelectionOption<u32>> {
    TIP_PERCENTAGES
        .iter()
        .map(|&value| SelectionOption {
            value,
            is_selected: value == current.value(),
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_initial_selection_is_default() {
        let selector = PeopleSelector::new();
        assert_eq!(selector.current().get(), 2);
        assert_eq!(PeopleSelector::range(), (2, 99));
    }

    #[test]
    fn test_select_within_range() {
        let mut selector = PeopleSelector::new();
        assert_eq!(selector.select(99).unwrap().get(), 99);
        assert_eq!(selector.select(2).unwrap().get(), 2);
        assert_eq!(selector.select(42).unwrap().get(), 42);
        assert_eq!(selector.current().get(), 42);
    }

    #[test]
    fn test_out_of_range_keeps_current() {
        let mut selector = PeopleSelector::new();

        let err = selector.select(150).unwrap_err();
        assert_eq!(
            err,
            CoreError::OutOfRangeSelection {
                requested: 150,
                min: 2,
                max: 99
            }
        );
        assert_eq!(selector.current().get(), 2);

        assert!(selector.select(1).is_err());
        assert!(selector.select(0).is_err());
        assert!(selector.select(-7).is_err());
        assert_eq!(selector.current().get(), 2);
    }

    #[test]
    fn test_reselecting_same_value() {
        let mut selector = PeopleSelector::new();
        selector.select(7).unwrap();
        selector.select(7).unwrap();
        assert_eq!(selector.current().get(), 7);
    }

    #[test]
    fn test_options_listing() {
        let mut selector = PeopleSelector::new();
        selector.select(10).unwrap();

        let options = selector.options();
        assert_eq!(options.len(), 98);
        assert_eq!(options.first().map(|o| o.value), Some(2));
        assert_eq!(options.last().map(|o| o.value), Some(99));
        assert!(options.windows(2).all(|pair| pair[0].value < pair[1].value));

        let selected: Vec<u32> = options
            .iter()
            .filter(|o| o.is_selected)
            .map(|o| o.value)
            .collect();
        assert_eq!(selected, vec![10]);
    }

    #[test]
    fn test_tip_options() {
        let options = tip_options(Percentage::new(15));
        let values: Vec<u32> = options.iter().map(|o| o.value).collect();
        assert_eq!(values, TIP_PERCENTAGES.to_vec());
        assert_eq!(options.iter().filter(|o| o.is_selected).count(), 1);
        assert!(options[2].is_selected);

        let none_marked = tip_options(Percentage::new(18));
        assert!(none_marked.iter().all(|o| !o.is_selected));
    }
}
