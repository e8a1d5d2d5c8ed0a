//! Rupiah type for representing currency amounts
//!
//! Indonesian rupiah has no minor unit in everyday use, so amounts are stored
//! as whole rupiah in an i64. Provides safe arithmetic operations and the
//! id-ID display formats used across the app ("Rp 9.822.211.927").

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount in whole Indonesian rupiah
///
/// Using an i64 avoids floating-point precision issues and comfortably covers
/// the multi-billion-rupiah balances in the seed data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rupiah(i64);

impl Rupiah {
    /// Create an amount from whole rupiah
    ///
    /// # Examples
    /// ```
    /// use saku::models::Rupiah;
    /// let amount = Rupiah::from_units(750_000);
    /// ```
    pub const fn from_units(units: i64) -> Self {
        Self(units)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in whole rupiah
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Format the magnitude with dot thousands separators and no currency
    /// symbol ("9.822.211.927")
    ///
    /// Used where the currency prefix is rendered separately. The sign is
    /// dropped; callers that care about it format it themselves.
    pub fn grouped(&self) -> String {
        let digits = self.0.abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);

        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push('.');
            }
            out.push(c);
        }
        out
    }

    /// Parse an amount from a string
    ///
    /// Accepts plain digits ("750000"), dot-grouped digits ("750.000"), an
    /// optional "Rp" prefix, and an optional leading minus sign.
    pub fn parse(s: &str) -> Result<Self, RupiahParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped.trim_start())
        } else {
            (false, s)
        };

        // Remove currency prefix if present
        let s = s
            .strip_prefix("Rp")
            .map(str::trim_start)
            .unwrap_or(s);

        if s.is_empty() {
            return Err(RupiahParseError::InvalidFormat(s.to_string()));
        }

        // Dots are accepted only as thousands separators
        let mut digits = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '0'..='9' => digits.push(c),
                '.' => {}
                _ => return Err(RupiahParseError::InvalidFormat(s.to_string())),
            }
        }

        let units: i64 = digits
            .parse()
            .map_err(|_| RupiahParseError::InvalidFormat(s.to_string()))?;

        Ok(Self(if negative { -units } else { units }))
    }
}

impl Default for Rupiah {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Rupiah {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-Rp {}", self.grouped())
        } else {
            write!(f, "Rp {}", self.grouped())
        }
    }
}

impl Add for Rupiah {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Rupiah {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Rupiah {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Rupiah {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Rupiah {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Rupiah {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Rupiah::zero(), |acc, m| acc + m)
    }
}

/// Error type for rupiah parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RupiahParseError {
    InvalidFormat(String),
}

impl fmt::Display for RupiahParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RupiahParseError::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
        }
    }
}

impl std::error::Error for RupiahParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_grouping() {
        assert_eq!(format!("{}", Rupiah::from_units(9_822_211_927)), "Rp 9.822.211.927");
        assert_eq!(format!("{}", Rupiah::from_units(750_000)), "Rp 750.000");
        assert_eq!(format!("{}", Rupiah::from_units(1_000)), "Rp 1.000");
        assert_eq!(format!("{}", Rupiah::from_units(999)), "Rp 999");
        assert_eq!(format!("{}", Rupiah::zero()), "Rp 0");
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(format!("{}", Rupiah::from_units(-12_500_000)), "-Rp 12.500.000");
    }

    #[test]
    fn test_grouped_has_no_prefix() {
        assert_eq!(Rupiah::from_units(9_822_211_927).grouped(), "9.822.211.927");
        assert_eq!(Rupiah::from_units(-450_000).grouped(), "450.000");
        assert_eq!(Rupiah::zero().grouped(), "0");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Rupiah::parse("750000").unwrap().units(), 750_000);
        assert_eq!(Rupiah::parse("750.000").unwrap().units(), 750_000);
        assert_eq!(Rupiah::parse("Rp 750.000").unwrap().units(), 750_000);
        assert_eq!(Rupiah::parse("-12500000").unwrap().units(), -12_500_000);
        assert_eq!(Rupiah::parse("  500000  ").unwrap().units(), 500_000);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Rupiah::parse("").is_err());
        assert!(Rupiah::parse("abc").is_err());
        assert!(Rupiah::parse("12,5").is_err());
        assert!(Rupiah::parse("Rp").is_err());
    }

    #[test]
    fn test_arithmetic() {
        let a = Rupiah::from_units(1_000);
        let b = Rupiah::from_units(500);

        assert_eq!((a + b).units(), 1_500);
        assert_eq!((a - b).units(), 500);
        assert_eq!((-a).units(), -1_000);
        assert_eq!(Rupiah::from_units(-250).abs().units(), 250);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Rupiah::from_units(100),
            Rupiah::from_units(200),
            Rupiah::from_units(300),
        ];
        let total: Rupiah = amounts.into_iter().sum();
        assert_eq!(total.units(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Rupiah::from_units(3_500_000);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "3500000");

        let deserialized: Rupiah = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
