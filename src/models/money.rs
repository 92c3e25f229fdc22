//! Money type for representing currency amounts
//!
//! Amounts are whole currency units stored as `i64` (yen in the default
//! configuration). There is no fractional part, so the only rounding that
//! ever happens is the floor in [`Money::floor_div`].
//!
//! Recorded amounts are capped at [`Money::MAX_AMOUNT`] by model validation.
//! Arithmetic saturates at the `i64` bounds instead of overflowing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Default symbol used by `Display`
pub const DEFAULT_CURRENCY_SYMBOL: &str = "¥";

/// A monetary amount in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Largest amount a single expense or yearly budget may carry
    pub const MAX_AMOUNT: Money = Money(1_000_000_000_000);

    /// Create a Money amount from whole units
    ///
    /// # Examples
    /// ```
    /// use kakeibo::models::Money;
    /// let rent = Money::new(100_000);
    /// assert_eq!(rent.units(), 100_000);
    /// ```
    pub const fn new(units: i64) -> Self {
        Self(units)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in whole units
    pub const fn units(&self) -> i64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Whether the amount is above [`Money::MAX_AMOUNT`]
    pub const fn exceeds_max(&self) -> bool {
        self.0 > Self::MAX_AMOUNT.0
    }

    /// Divide by a period count, rounding toward negative infinity
    ///
    /// A divisor of zero is treated as one so the division is total.
    ///
    /// # Examples
    /// ```
    /// use kakeibo::models::Money;
    /// assert_eq!(Money::new(1_100_000).floor_div(12), Money::new(91_666));
    /// assert_eq!(Money::new(-7).floor_div(2), Money::new(-4));
    /// ```
    pub fn floor_div(&self, divisor: u32) -> Self {
        Self(self.0.div_euclid(i64::from(divisor.max(1))))
    }

    /// Format with a currency symbol and thousands separators
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let grouped = group_thousands(self.0.unsigned_abs());
        if self.is_negative() {
            format!("-{}{}", symbol, grouped)
        } else {
            format!("{}{}", symbol, grouped)
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for Money {
    fn from(units: i64) -> Self {
        Self(units)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol(DEFAULT_CURRENCY_SYMBOL))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::new(1_100_000).to_string(), "¥1,100,000");
        assert_eq!(Money::new(0).to_string(), "¥0");
        assert_eq!(Money::new(-500).to_string(), "-¥500");
        assert_eq!(Money::new(999).to_string(), "¥999");
        assert_eq!(Money::new(1000).to_string(), "¥1,000");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::new(91_666).format_with_symbol("$"), "$91,666");
        assert_eq!(Money::new(-3_055).format_with_symbol(""), "-3,055");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::new(1000);
        let b = Money::new(500);

        assert_eq!((a + b).units(), 1500);
        assert_eq!((a - b).units(), 500);
        assert_eq!((b - a).units(), -500);
        assert_eq!((-a).units(), -1000);
    }

    #[test]
    fn test_floor_div_rounds_toward_negative_infinity() {
        assert_eq!(Money::new(91_666).floor_div(30), Money::new(3_055));
        assert_eq!(Money::new(-1).floor_div(30), Money::new(-1));
        assert_eq!(Money::new(-60).floor_div(30), Money::new(-2));
        assert_eq!(Money::new(-61).floor_div(30), Money::new(-3));
    }

    #[test]
    fn test_floor_div_by_zero_is_identity() {
        assert_eq!(Money::new(42).floor_div(0), Money::new(42));
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Money::new(i64::MAX);
        assert_eq!(max + Money::new(1), max);
        assert_eq!(Money::new(i64::MIN) - Money::new(1), Money::new(i64::MIN));
        assert_eq!(-Money::new(i64::MIN), max);

        let total: Money = [max, Money::new(1)].iter().sum();
        assert_eq!(total, max);
    }

    #[test]
    fn test_exceeds_max() {
        assert!(!Money::MAX_AMOUNT.exceeds_max());
        assert!(Money::new(1_000_000_000_001).exceeds_max());
        assert!(!Money::new(-5).exceeds_max());
    }

    #[test]
    fn test_sum() {
        let amounts = [Money::new(100), Money::new(200), Money::new(300)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.units(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Money::new(100_000);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "100000");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
