//! # Validation Module
//!
//! Amount entry rules for the check amount field.
//!
//! ## Entry Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Amount Field Keystroke                             │
//! │                                                                         │
//! │  field shows "12.3", user types "4"                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  filter_input("12.3", "12.34") ← accepted, field shows "12.34"          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  parse_amount("12.34") → Money(12.34) → BillState.amount                │
//! │                                                                         │
//! │  user types "5"                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  filter_input("12.34", "12.345") ← rejected, field keeps "12.34"        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Accepted Shapes
//! - `""` (clears the field)
//! - one or more ASCII digits, optionally followed by `.` and at most two
//!   digits: `7`, `007`, `1.`, `1.5`, `10.99`
//!
//! `"1."` is accepted so that typing `1.5` never gets stuck halfway.
//! Leading zeros are accepted.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_FRACTION_DIGITS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// ASCII digits only: `\d` would also match non-Latin digits, which do not parse.
static AMOUNT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^[0-9]+(\.[0-9]{{0,{MAX_FRACTION_DIGITS}}})?$"))
        .expect("amount pattern is a valid regex")
});

// =============================================================================
// Amount Entry
// =============================================================================

/// Validates a complete or partially typed amount.
///
/// Empty text is valid. Errors carry a reason suitable for a hint under
/// the field.
///
/// ## Example
/// ```rust
/// use wesplit_core::validation::validate_amount_input;
///
/// assert!(validate_amount_input("10.99").is_ok());
/// assert!(validate_amount_input("1.").is_ok());
/// assert!(validate_amount_input("1.234").is_err());
/// ```
pub fn validate_amount_input(text: &str) -> ValidationResult<()> {
    if text.is_empty() || AMOUNT_PATTERN.is_match(text) {
        return Ok(());
    }

    let reason = if !text.chars().all(|c| c.is_ascii_digit() || c == '.') {
        "only digits and a decimal point are allowed".to_string()
    } else if text.matches('.').count() > 1 {
        "only one decimal point is allowed".to_string()
    } else if text.starts_with('.') {
        "digits are required before the decimal point".to_string()
    } else {
        format!("at most {MAX_FRACTION_DIGITS} digits after the decimal point")
    };

    Err(ValidationError::InvalidFormat {
        field: "amount".to_string(),
        reason,
    })
}

/// Decides what the amount field shows after an edit.
///
/// Returns `candidate` when it is acceptable and `previous` otherwise, so a
/// rejected keystroke leaves the field exactly as it was.
///
/// ## Example
/// ```rust
/// use wesplit_core::validation::filter_input;
///
/// assert_eq!(filter_input("1", "1."), "1.");
/// assert_eq!(filter_input("1.5", "1.5x"), "1.5");
/// assert_eq!(filter_input("1.5", ""), "");
/// ```
pub fn filter_input(previous: &str, candidate: &str) -> String {
    match validate_amount_input(candidate) {
        Ok(()) => candidate.to_string(),
        Err(_) => previous.to_string(),
    }
}

/// Parses amount text, treating anything unusable as zero.
///
/// Never fails: empty, malformed, negative and non-finite input all yield
/// `Money::zero()`.
///
/// ## Example
/// ```rust
/// use wesplit_core::validation::parse_amount;
///
/// assert_eq!(parse_amount("47.89").value(), 47.89);
/// assert!(parse_amount("").is_zero());
/// assert!(parse_amount("abc").is_zero());
/// ```
pub fn parse_amount(text: &str) -> Money {
    text.parse::<f64>()
        .ok()
        .and_then(|value| Money::try_new(value).ok())
        .unwrap_or_default()
}

/// Renders a stored amount back into field text.
///
/// Zero renders as an empty field; anything else keeps at least one
/// fraction digit (`100.0`, `47.89`).
pub fn amount_text(amount: Money) -> String {
    if amount.is_zero() {
        return String::new();
    }

    let text = amount.value().to_string();
    if text.contains('.') {
        text
    } else {
        format!("{text}.0")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_accepts_valid_amounts() {
        for input in ["0", "1", "10", "100", "1.5", "10.99", "0.5", "123.45", "007"] {
            assert!(validate_amount_input(input).is_ok(), "{input} should be valid");
            assert_eq!(filter_input("", input), input);
        }
    }

    #[test]
    fn test_accepts_intermediate_decimal_point() {
        for input in ["1.", "10.", "100."] {
            assert_eq!(filter_input("1", input), input);
        }
    }

    #[test]
    fn test_rejects_invalid_amounts() {
        for input in [".", ".5", "1.234", "abc", "1.2.3", "-5", "12.345", "+1", " 1", "1e5"] {
            assert!(validate_amount_input(input).is_err(), "{input} should be invalid");
            assert_eq!(filter_input("9.9", input), "9.9");
        }
    }

    #[test]
    fn test_rejects_non_ascii_digits() {
        // Arabic-Indic digits
        assert!(validate_amount_input("\u{0661}\u{0662}").is_err());
    }

    #[test]
    fn test_empty_always_clears() {
        assert_eq!(filter_input("12.5", ""), "");
        assert!(validate_amount_input("").is_ok());
    }

    #[test]
    fn test_rejection_reasons() {
        let reason = |text: &str| match validate_amount_input(text) {
            Err(ValidationError::InvalidFormat { reason, .. }) => reason,
            other => panic!("expected InvalidFormat for {text}, got {other:?}"),
        };

        assert_eq!(reason("12a"), "only digits and a decimal point are allowed");
        assert_eq!(reason("-5"), "only digits and a decimal point are allowed");
        assert_eq!(reason("1.2.3"), "only one decimal point is allowed");
        assert_eq!(reason(".5"), "digits are required before the decimal point");
        assert_eq!(reason("."), "digits are required before the decimal point");
        assert_eq!(reason("1.234"), "at most 2 digits after the decimal point");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("100").value(), 100.0);
        assert_eq!(parse_amount("10.99").value(), 10.99);
        assert_eq!(parse_amount("1.").value(), 1.0);
        assert_eq!(parse_amount("007").value(), 7.0);

        assert!(parse_amount("").is_zero());
        assert!(parse_amount(".").is_zero());
        assert!(parse_amount("abc").is_zero());
        assert!(parse_amount("-5").is_zero());
        assert!(parse_amount("inf").is_zero());
        assert!(parse_amount("NaN").is_zero());
    }

    #[test]
    fn test_parse_amount_huge_digit_string() {
        // Parses to +inf, which is not a valid amount
        assert!(parse_amount(&"9".repeat(400)).is_zero());
    }

    #[test]
    fn test_amount_text() {
        assert_eq!(amount_text(Money::zero()), "");
        assert_eq!(amount_text(parse_amount("100")), "100.0");
        assert_eq!(amount_text(parse_amount("47.89")), "47.89");
        assert_eq!(amount_text(parse_amount("0.5")), "0.5");
    }

    proptest! {
        #[test]
        fn prop_filter_is_idempotent(previous in "[0-9.a-z-]{0,6}", candidate in "[0-9.a-z-]{0,8}") {
            let once = filter_input(&previous, &candidate);
            let twice = filter_input(&once, &candidate);
            prop_assert_eq!(&once, &filter_input(&previous, &candidate));
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_accepted_amounts_parse(candidate in "[0-9]{1,9}(\\.[0-9]{1,2})?") {
            prop_assert_eq!(filter_input("", &candidate), candidate.clone());

            let amount = parse_amount(&candidate);
            prop_assert!(amount.value() >= 0.0);
            prop_assert_eq!(amount.value(), candidate.parse::<f64>().unwrap());
        }

        #[test]
        fn prop_amount_text_round_trips(candidate in "[1-9][0-9]{0,6}(\\.[0-9]{1,2})?") {
            let amount = parse_amount(&candidate);
            prop_assert!(validate_amount_input(&amount_text(amount)).is_ok());
            prop_assert_eq!(parse_amount(&amount_text(amount)), amount);
        }
    }
}
