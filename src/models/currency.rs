//! Display currency for the allocation plan
//!
//! A small closed set of supported currencies. Switching the currency only
//! changes how amounts are rendered; percents and amounts are untouched.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported display currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Russian ruble (default)
    #[default]
    Rub,
    /// United States dollar
    Usd,
    /// Euro
    Eur,
}

impl Currency {
    /// All supported currencies in selection order
    pub fn all() -> &'static [Self] {
        &[Self::Rub, Self::Usd, Self::Eur]
    }

    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Rub => "RUB",
            Self::Usd => "USD",
            Self::Eur => "EUR",
        }
    }

    /// Currency symbol, rendered after the amount
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Rub => "₽",
            Self::Usd => "$",
            Self::Eur => "€",
        }
    }

    /// The next currency in selection order, wrapping around
    pub fn next(&self) -> Self {
        match self {
            Self::Rub => Self::Usd,
            Self::Usd => Self::Eur,
            Self::Eur => Self::Rub,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = CurrencyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::all()
            .iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .copied()
            .ok_or_else(|| CurrencyParseError::Unsupported(code.to_string()))
    }
}

/// Error type for currency code parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrencyParseError {
    Unsupported(String),
}

impl fmt::Display for CurrencyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyParseError::Unsupported(code) => {
                write!(f, "Unsupported currency code: {}", code)
            }
        }
    }
}

impl std::error::Error for CurrencyParseError {}
