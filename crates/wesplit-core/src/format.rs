//! # Currency Formatting
//!
//! The seam between the calculator and whatever shows the result.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   per_person: Money(18.357833)                                          │
//! │        │                                                                │
//! │        ▼                                                                │
//! │   dyn CurrencyFormatter   (picked once at startup)                      │
//! │        │                                                                │
//! │        ├── CurrencyStyle for "de_DE" ──► "18,36 €"                      │
//! │        ├── CurrencyStyle for "en_US" ──► "$18.36"                       │
//! │        └── FallbackCurrencyFormatter ──► "$18.36"                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Formatting is the only place a split result is rounded. The calculator
//! never depends on a formatted string.
//!
//! Resolving the user's locale is I/O and lives in the application; this
//! module only maps an already known locale tag to a style.

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Formatter Trait
// =============================================================================

/// Renders amounts for people to read.
pub trait CurrencyFormatter: Send + Sync {
    /// Symbol shown next to the amount field, e.g. `$`.
    fn currency_symbol(&self) -> String;

    /// Full display string for an amount, e.g. `$18.36`.
    fn format_currency(&self, amount: Money) -> String;
}

// =============================================================================
// Fallback Formatter
// =============================================================================

/// Used when no locale-specific style is available: `$` and two decimals.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackCurrencyFormatter;

impl CurrencyFormatter for FallbackCurrencyFormatter {
    fn currency_symbol(&self) -> String {
        "$".to_string()
    }

    fn format_currency(&self, amount: Money) -> String {
        format!("${:.2}", amount.value())
    }
}

// =============================================================================
// Locale Styles
// =============================================================================

/// Where the currency symbol goes relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    /// `$18.36`
    Prefix,
    /// `18,36 €`
    Suffix,
}

/// A data-driven currency format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyStyle {
    pub symbol: String,
    pub position: SymbolPosition,
    /// Put a space between the symbol and the number.
    pub spaced: bool,
    pub decimal_separator: char,
    pub grouping_separator: Option<char>,
    pub fraction_digits: u8,
}

impl CurrencyStyle {
    fn new(
        symbol: &str,
        position: SymbolPosition,
        spaced: bool,
        decimal_separator: char,
        grouping_separator: Option<char>,
        fraction_digits: u8,
    ) -> Self {
        CurrencyStyle {
            symbol: symbol.to_string(),
            position,
            spaced,
            decimal_separator,
            grouping_separator,
            fraction_digits,
        }
    }

    /// Looks up the style for a POSIX or BCP 47 locale tag.
    ///
    /// Encoding and modifier suffixes are ignored (`de_DE.UTF-8@euro`
    /// resolves like `de_DE`). Returns `None` for locales without currency
    /// data, including `C` and `POSIX`.
    ///
    /// ## Example
    /// ```rust
    /// use wesplit_core::{CurrencyFormatter, CurrencyStyle, Money};
    ///
    /// let style = CurrencyStyle::for_locale("de-DE").unwrap();
    /// let amount = Money::try_new(1234.5).unwrap();
    /// assert_eq!(style.format_currency(amount), "1.234,50 €");
    ///
    /// assert!(CurrencyStyle::for_locale("C").is_none());
    /// ```
    pub fn for_locale(tag: &str) -> Option<Self> {
        use SymbolPosition::{Prefix, Suffix};

        let base = tag.split(['.', '@']).next().unwrap_or_default().replace('-', "_");

        let style = match base.as_str() {
            "en_US" | "es_US" => Self::new("$", Prefix, false, '.', Some(','), 2),
            "en_CA" => Self::new("$", Prefix, false, '.', Some(','), 2),
            "fr_CA" => Self::new("$", Suffix, true, ',', Some('\u{a0}'), 2),
            "en_AU" | "en_NZ" => Self::new("$", Prefix, false, '.', Some(','), 2),
            "en_GB" => Self::new("£", Prefix, false, '.', Some(','), 2),
            "en_IE" => Self::new("€", Prefix, false, '.', Some(','), 2),
            "de_DE" | "de_AT" | "es_ES" | "it_IT" | "pt_PT" => {
                Self::new("€", Suffix, true, ',', Some('.'), 2)
            }
            "fr_FR" | "fr_BE" => Self::new("€", Suffix, true, ',', Some('\u{202f}'), 2),
            "nl_NL" => Self::new("€", Prefix, true, ',', Some('.'), 2),
            "de_CH" => Self::new("CHF", Prefix, true, '.', Some('\''), 2),
            "ja_JP" => Self::new("¥", Prefix, false, '.', Some(','), 0),
            "pl_PL" => Self::new("zł", Suffix, true, ',', Some('\u{a0}'), 2),
            "sv_SE" => Self::new("kr", Suffix, true, ',', Some('\u{a0}'), 2),
            "pt_BR" => Self::new("R$", Prefix, true, ',', Some('.'), 2),
            "en_IN" | "hi_IN" => Self::new("₹", Prefix, false, '.', Some(','), 2),
            _ => return None,
        };

        Some(style)
    }

    /// Replaces the currency symbol, keeping the rest of the style.
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    fn format_number(&self, value: f64) -> String {
        let rounded = format!("{:.*}", usize::from(self.fraction_digits), value);
        let (whole, fraction) = match rounded.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (rounded.as_str(), None),
        };

        let mut out = String::with_capacity(rounded.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                if let Some(separator) = self.grouping_separator {
                    out.push(separator);
                }
            }
            out.push(digit);
        }

        if let Some(fraction) = fraction {
            out.push(self.decimal_separator);
            out.push_str(fraction);
        }

        out
    }
}

impl CurrencyFormatter for CurrencyStyle {
    fn currency_symbol(&self) -> String {
        self.symbol.clone()
    }

    fn format_currency(&self, amount: Money) -> String {
        let number = self.format_number(amount.value());
        let gap = if self.spaced { " " } else { "" };

        match self.position {
            SymbolPosition::Prefix => format!("{}{gap}{number}", self.symbol),
            SymbolPosition::Suffix => format!("{number}{gap}{}", self.symbol),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn money(value: f64) -> Money {
        Money::try_new(value).unwrap()
    }

    #[test]
    fn test_fallback_formatter() {
        let formatter = FallbackCurrencyFormatter;
        assert_eq!(formatter.currency_symbol(), "$");
        assert_eq!(formatter.format_currency(money(18.357_833)), "$18.36");
        assert_eq!(formatter.format_currency(money(94.375)), "$94.38");
        assert_eq!(formatter.format_currency(Money::zero()), "$0.00");
        assert_eq!(formatter.format_currency(money(1234567.0)), "$1234567.00");
    }

    #[test]
    fn test_us_style() {
        let style = CurrencyStyle::for_locale("en_US.UTF-8").unwrap();
        assert_eq!(style.currency_symbol(), "$");
        assert_eq!(style.format_currency(money(18.357_833)), "$18.36");
        assert_eq!(style.format_currency(money(1234567.891)), "$1,234,567.89");
        assert_eq!(style.format_currency(money(999.0)), "$999.00");
        assert_eq!(style.format_currency(money(1000.0)), "$1,000.00");
    }

    #[test]
    fn test_suffix_style() {
        let style = CurrencyStyle::for_locale("de_DE@euro").unwrap();
        assert_eq!(style.format_currency(money(30.0)), "30,00 €");
        assert_eq!(style.format_currency(money(123456.7)), "123.456,70 €");
    }

    #[test]
    fn test_zero_fraction_digits() {
        let style = CurrencyStyle::for_locale("ja-JP").unwrap();
        assert_eq!(style.format_currency(money(1234.6)), "¥1,235");
        assert_eq!(style.format_currency(Money::zero()), "¥0");
    }

    #[test]
    fn test_unknown_locales() {
        assert!(CurrencyStyle::for_locale("C").is_none());
        assert!(CurrencyStyle::for_locale("POSIX").is_none());
        assert!(CurrencyStyle::for_locale("").is_none());
        assert!(CurrencyStyle::for_locale("xx_YY").is_none());
    }

    #[test]
    fn test_symbol_override() {
        let style = CurrencyStyle::for_locale("en_US").unwrap().with_symbol("US$");
        assert_eq!(style.format_currency(money(5.0)), "US$5.00");
    }

    #[test]
    fn test_formatter_as_trait_object() {
        let formatters: Vec<Box<dyn CurrencyFormatter>> = vec![
            Box::new(FallbackCurrencyFormatter),
            Box::new(CurrencyStyle::for_locale("en_GB").unwrap()),
        ];
        let rendered: Vec<String> = formatters
            .iter()
            .map(|f| f.format_currency(money(30.0)))
            .collect();
        assert_eq!(rendered, vec!["$30.00", "£30.00"]);
    }
}
