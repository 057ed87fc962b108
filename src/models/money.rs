//! Money type for representing currency amounts
//!
//! Internally stores amounts in whole currency units (i64); this domain
//! formats every amount with zero fractional digits, so sub-unit precision
//! never appears. Provides safe arithmetic and currency-aware formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};

use super::currency::Currency;

/// A monetary amount in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from whole units
    pub const fn from_units(units: i64) -> Self {
        Self(units)
    }

    /// Round a real-valued amount to the nearest whole unit.
    ///
    /// Rounding is half away from zero (the behavior of `f64::round`),
    /// which is deterministic across platforms.
    pub fn from_f64_rounded(value: f64) -> Self {
        Self(value.round() as i64)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in whole units
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Format with the currency's symbol after the amount, e.g. "35 000 ₽"
    pub fn format(&self, currency: Currency) -> String {
        format!("{} {}", self, currency.symbol())
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    /// Groups digits in thousands separated by spaces, e.g. "100 000"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(' ');
            }
            grouped.push(c);
        }
        if self.is_negative() {
            write!(f, "-{}", grouped)
        } else {
            write!(f, "{}", grouped)
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units() {
        let m = Money::from_units(35000);
        assert_eq!(m.units(), 35000);
        assert!(!m.is_zero());
        assert!(!m.is_negative());
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(Money::from_f64_rounded(2.5).units(), 3);
        assert_eq!(Money::from_f64_rounded(2.4).units(), 2);
        assert_eq!(Money::from_f64_rounded(-2.5).units(), -3);
        assert_eq!(Money::from_f64_rounded(0.0).units(), 0);
    }

    #[test]
    fn test_display_grouping() {
        assert_eq!(Money::from_units(0).to_string(), "0");
        assert_eq!(Money::from_units(999).to_string(), "999");
        assert_eq!(Money::from_units(1000).to_string(), "1 000");
        assert_eq!(Money::from_units(35000).to_string(), "35 000");
        assert_eq!(Money::from_units(100000).to_string(), "100 000");
        assert_eq!(Money::from_units(1234567).to_string(), "1 234 567");
        assert_eq!(Money::from_units(-5000).to_string(), "-5 000");
    }

    #[test]
    fn test_format_with_currency() {
        let m = Money::from_units(35000);
        assert_eq!(m.format(Currency::Rub), "35 000 ₽");
        assert_eq!(m.format(Currency::Usd), "35 000 $");
        assert_eq!(m.format(Currency::Eur), "35 000 €");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_units(1000);
        let b = Money::from_units(500);

        assert_eq!((a + b).units(), 1500);
        assert_eq!((a - b).units(), 500);
        assert_eq!((-a).units(), -1000);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_units(35000),
            Money::from_units(15000),
            Money::from_units(5000),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.units(), 55000);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_units(35000);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "35000");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
