//! # Configuration State
//!
//! Stores configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. `WESPLIT_*` environment variables
//! 2. POSIX locale variables (`LC_ALL`, `LC_MONETARY`, `LANG`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use serde::Serialize;
use wesplit_core::{
    CurrencyFormatter, CurrencyStyle, FallbackCurrencyFormatter, PeopleCount, Percentage,
};

/// Locale variables consulted in order, first non-empty wins.
const LOCALE_VARS: [&str; 4] = ["WESPLIT_LOCALE", "LC_ALL", "LC_MONETARY", "LANG"];

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Locale tag used to pick a currency style, e.g. `de_DE.UTF-8`.
    pub locale: Option<String>,

    /// Replaces the locale's currency symbol.
    pub currency_symbol: Option<String>,

    /// Tip preselected at session start.
    pub default_tip: Percentage,

    /// People count preselected at session start.
    pub default_people: PeopleCount,
}

impl Default for ConfigState {
    /// No locale, no symbol override, 20% tip, 2 people.
    fn default() -> Self {
        ConfigState {
            locale: None,
            currency_symbol: None,
            default_tip: Percentage::default(),
            default_people: PeopleCount::default(),
        }
    }
}

impl ConfigState {
    /// Loads configuration from the process environment.
    ///
    /// ## Environment Variables
    /// - `WESPLIT_LOCALE`: Locale for currency formatting (falls back to
    ///   `LC_ALL`, `LC_MONETARY`, `LANG`)
    /// - `WESPLIT_CURRENCY_SYMBOL`: Override the currency symbol
    /// - `WESPLIT_DEFAULT_TIP`: Preselected tip, one of the offered percentages
    /// - `WESPLIT_DEFAULT_PEOPLE`: Preselected people count, 2 to 99
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        config.locale = LOCALE_VARS.iter().find_map(|key| non_empty(*key));
        config.currency_symbol = non_empty("WESPLIT_CURRENCY_SYMBOL");

        if let Some(raw) = non_empty("WESPLIT_DEFAULT_TIP") {
            let value = raw
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::invalid("WESPLIT_DEFAULT_TIP", &raw, "not a whole number"))?;
            config.default_tip = Percentage::select_offered(value)
                .map_err(|e| ConfigError::invalid("WESPLIT_DEFAULT_TIP", &raw, e.to_string()))?;
        }

        if let Some(raw) = non_empty("WESPLIT_DEFAULT_PEOPLE") {
            let value = raw
                .trim()
                .parse::<i64>()
                .map_err(|_| ConfigError::invalid("WESPLIT_DEFAULT_PEOPLE", &raw, "not a whole number"))?;
            config.default_people = PeopleCount::new(value)
                .map_err(|e| ConfigError::invalid("WESPLIT_DEFAULT_PEOPLE", &raw, e.to_string()))?;
        }

        Ok(config)
    }

    /// Picks the currency formatter for this configuration.
    ///
    /// A locale with currency data gets its [`CurrencyStyle`]. Anything else
    /// uses [`FallbackCurrencyFormatter`], or a `$`-style layout carrying the
    /// symbol override when one is set.
    pub fn currency_formatter(&self) -> Box<dyn CurrencyFormatter> {
        let style = self.locale.as_deref().and_then(CurrencyStyle::for_locale);

        match (style, &self.currency_symbol) {
            (Some(style), Some(symbol)) => Box::new(style.with_symbol(symbol.clone())),
            (Some(style), None) => Box::new(style),
            (None, Some(symbol)) => match CurrencyStyle::for_locale("en_US") {
                Some(style) => Box::new(style.with_symbol(symbol.clone())),
                None => Box::new(FallbackCurrencyFormatter),
            },
            (None, None) => {
                tracing::debug!(locale = ?self.locale, "no currency data for locale, using fallback");
                Box::new(FallbackCurrencyFormatter)
            }
        }
    }
}

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key} ({value:?}): {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(key: &str, value: &str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use wesplit_core::Money;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConfigState::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ConfigState::default());
        assert_eq!(config.default_tip.value(), 20);
        assert_eq!(config.default_people.get(), 2);
    }

    #[test]
    fn test_locale_priority() {
        let config = ConfigState::from_lookup(lookup(&[
            ("LANG", "en_US.UTF-8"),
            ("LC_MONETARY", "de_DE.UTF-8"),
            ("LC_ALL", ""),
        ]))
        .unwrap();
        assert_eq!(config.locale.as_deref(), Some("de_DE.UTF-8"));

        let config = ConfigState::from_lookup(lookup(&[
            ("LANG", "en_US.UTF-8"),
            ("WESPLIT_LOCALE", "ja_JP"),
        ]))
        .unwrap();
        assert_eq!(config.locale.as_deref(), Some("ja_JP"));
    }

    #[test]
    fn test_default_overrides() {
        let config = ConfigState::from_lookup(lookup(&[
            ("WESPLIT_DEFAULT_TIP", "15"),
            ("WESPLIT_DEFAULT_PEOPLE", " 4 "),
        ]))
        .unwrap();
        assert_eq!(config.default_tip.value(), 15);
        assert_eq!(config.default_people.get(), 4);
    }

    #[test]
    fn test_invalid_values() {
        let err = ConfigState::from_lookup(lookup(&[("WESPLIT_DEFAULT_TIP", "18")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "WESPLIT_DEFAULT_TIP"));

        let err = ConfigState::from_lookup(lookup(&[("WESPLIT_DEFAULT_PEOPLE", "150")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "WESPLIT_DEFAULT_PEOPLE"));

        assert!(ConfigState::from_lookup(lookup(&[("WESPLIT_DEFAULT_PEOPLE", "two")])).is_err());
    }

    #[test]
    fn test_formatter_selection() {
        let amount = Money::try_new(1234.5).unwrap();

        let fallback = ConfigState::default().currency_formatter();
        assert_eq!(fallback.format_currency(amount), "$1234.50");

        let posix = ConfigState {
            locale: Some("C".to_string()),
            ..ConfigState::default()
        };
        assert_eq!(posix.currency_formatter().currency_symbol(), "$");

        let german = ConfigState {
            locale: Some("de_DE.UTF-8".to_string()),
            ..ConfigState::default()
        };
        assert_eq!(german.currency_formatter().format_currency(amount), "1.234,50 €");

        let override_only = ConfigState {
            currency_symbol: Some("CA$".to_string()),
            ..ConfigState::default()
        };
        assert_eq!(override_only.currency_formatter().format_currency(amount), "CA$1,234.50");
    }
}
