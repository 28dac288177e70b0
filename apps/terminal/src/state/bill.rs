//! # Bill Session
//!
//! Owns the bill being split and applies one user action at a time.
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Bill Session Operations                              │
//! │                                                                         │
//! │  User Action             Session Method          State Change           │
//! │  ───────────             ──────────────          ────────────           │
//! │                                                                         │
//! │  Edit amount field ─────► edit_amount() ────────► amount_text, amount   │
//! │                                                                         │
//! │  Type keystrokes ───────► type_keys() ──────────► amount_text, amount   │
//! │                                                                         │
//! │  Pick tip ──────────────► select_tip() ─────────► bill.tip              │
//! │                                                                         │
//! │  Pick people ───────────► select_people() ──────► selector, bill.people │
//! │                                                                         │
//! │  Every change ends in commit(): the breakdown is recomputed from the    │
//! │  latest amount, tip and people. A change that fails leaves the whole    │
//! │  session exactly as it was.                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{debug, warn};
use wesplit_core::selection::tip_options;
use wesplit_core::validation::{amount_text, filter_input, parse_amount, validate_amount_input};
use wesplit_core::{
    BillBreakdown, BillState, CurrencyFormatter, Money, PeopleCount, PeopleSelector, Percentage,
    SelectionOption,
};

use crate::error::AppError;
use crate::state::ConfigState;

/// Formatted snapshot of the session, as shown by `show` and `json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillSummary {
    pub amount_text: String,
    pub amount: String,
    pub tip_percentage: u32,
    pub people: u32,
    pub tip_value: String,
    pub grand_total: String,
    pub per_person: String,
    /// Unrounded per-person total.
    pub per_person_value: f64,
}

/// The session that owns the bill being split.
pub struct BillSession {
    amount_text: String,
    bill: BillState,
    people: PeopleSelector,
    totals: BillBreakdown,
    formatter: Box<dyn CurrencyFormatter>,
}

impl BillSession {
    /// Starts a session with the configured defaults and formatter.
    pub fn new(config: &ConfigState) -> Self {
        Self::with_formatter(config, config.currency_formatter())
    }

    /// Starts a session with an explicit formatter.
    pub fn with_formatter(config: &ConfigState, formatter: Box<dyn CurrencyFormatter>) -> Self {
        let bill = BillState::new(Money::zero(), config.default_people, config.default_tip);

        BillSession {
            amount_text: String::new(),
            bill,
            people: PeopleSelector::with_current(config.default_people),
            // Zero amount over a valid count cannot fail
            totals: bill.breakdown().unwrap_or(BillBreakdown {
                tip_value: Money::zero(),
                grand_total: Money::zero(),
                per_person: Money::zero(),
            }),
            formatter,
        }
    }

    /// Current text of the amount field.
    pub fn amount_text(&self) -> &str {
        &self.amount_text
    }

    /// Current bill inputs.
    pub fn bill(&self) -> BillState {
        self.bill
    }

    /// Latest derived totals.
    pub fn totals(&self) -> BillBreakdown {
        self.totals
    }

    /// Symbol shown in front of the amount field.
    pub fn currency_symbol(&self) -> String {
        self.formatter.currency_symbol()
    }

    // =========================================================================
    // Amount
    // =========================================================================

    /// Replaces the amount field with `candidate`.
    ///
    /// A rejected candidate leaves the field and the bill unchanged.
    pub fn edit_amount(&mut self, candidate: &str) -> Result<Money, AppError> {
        let next = filter_input(&self.amount_text, candidate);

        if next != candidate {
            let err = match validate_amount_input(candidate) {
                Err(e) => AppError::from(e),
                Ok(()) => AppError::validation(format!("amount {candidate:?} was not accepted")),
            };
            warn!(candidate, error = %err, "amount entry rejected");
            return Err(err);
        }

        self.set_amount_text(next)
    }

    /// Feeds `keys` into the amount field one keystroke at a time.
    ///
    /// Rejected keystrokes are dropped, the rest still apply. Returns how
    /// many were dropped.
    pub fn type_keys(&mut self, keys: &str) -> Result<usize, AppError> {
        let mut text = self.amount_text.clone();
        let mut rejected = 0;

        for key in keys.chars() {
            let candidate = format!("{text}{key}");
            let next = filter_input(&text, &candidate);
            if next == text {
                rejected += 1;
            }
            text = next;
        }

        if rejected > 0 {
            warn!(keys, rejected, "keystrokes rejected");
        }

        self.set_amount_text(text)?;
        Ok(rejected)
    }

    /// Deletes the last character of the amount field.
    pub fn backspace(&mut self) -> Result<Money, AppError> {
        let mut candidate = self.amount_text.clone();
        candidate.pop();
        let next = filter_input(&self.amount_text, &candidate);
        self.set_amount_text(next)
    }

    /// Empties the amount field.
    pub fn clear_amount(&mut self) -> Result<Money, AppError> {
        self.set_amount_text(String::new())
    }

    fn set_amount_text(&mut self, text: String) -> Result<Money, AppError> {
        let amount = parse_amount(&text);
        self.commit(self.bill.with_amount(amount))?;
        self.amount_text = text;
        debug!(amount_text = %self.amount_text, %amount, "amount updated");
        Ok(amount)
    }

    /// Re-seeds the amount field from a stored amount.
    pub fn load_amount(&mut self, amount: Money) -> Result<(), AppError> {
        self.set_amount_text(amount_text(amount)).map(|_| ())
    }

    // =========================================================================
    // Tip
    // =========================================================================

    /// Picks one of the offered tip percentages.
    pub fn select_tip(&mut self, value: u32) -> Result<Percentage, AppError> {
        let tip = Percentage::select_offered(value).map_err(|e| {
            warn!(value, "tip selection rejected");
            AppError::from(e)
        })?;

        self.commit(self.bill.with_tip(tip))?;
        debug!(%tip, "tip updated");
        Ok(tip)
    }

    /// Tip picker listing with the current tip marked.
    pub fn tip_options(&self) -> Vec<SelectionOption<u32>> {
        tip_options(self.bill.tip)
    }

    // =========================================================================
    // People
    // =========================================================================

    /// Picks the number of people.
    ///
    /// Out-of-range values are rejected and the current count is kept.
    pub fn select_people(&mut self, candidate: i64) -> Result<PeopleCount, AppError> {
        let mut selector = self.people;
        let count = selector.select(candidate).map_err(|e| {
            warn!(candidate, current = self.people.current().get(), "people selection rejected");
            AppError::from(e)
        })?;

        self.commit(self.bill.with_people(count))?;
        self.people = selector;
        debug!(%count, "people updated");
        Ok(count)
    }

    /// People picker listing with the current count marked.
    pub fn people_options(&self) -> Vec<SelectionOption<u32>> {
        self.people.options()
    }

    // =========================================================================
    // Derived State
    // =========================================================================

    fn commit(&mut self, next: BillState) -> Result<(), AppError> {
        let totals = next.breakdown()?;
        self.bill = next;
        self.totals = totals;
        Ok(())
    }

    /// Formatted view of the current bill.
    pub fn summary(&self) -> BillSummary {
        let format = |money: Money| self.formatter.format_currency(money);

        BillSummary {
            amount_text: self.amount_text.clone(),
            amount: format(self.bill.amount),
            tip_percentage: self.bill.tip.value(),
            people: self.bill.people.get(),
            tip_value: format(self.totals.tip_value),
            grand_total: format(self.totals.grand_total),
            per_person: format(self.totals.per_person),
            per_person_value: self.totals.per_person.value(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
