//! Transaction model
//!
//! A single ledger entry in the account activity feed. The prototype seeds a
//! fixed reverse-chronological list; nothing is ever appended at runtime.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Rupiah;

/// Direction of funds for a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Inbound funds
    Credit,
    /// Outbound funds
    Debit,
}

impl Direction {
    /// Parse a direction from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "credit" | "in" | "incoming" => Some(Self::Credit),
            "debit" | "out" | "outgoing" => Some(Self::Debit),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Credit => write!(f, "In"),
            Self::Debit => write!(f, "Out"),
        }
    }
}

/// Spending category tag
///
/// A closed enum instead of the original free-form string tags, so every
/// presentation mapping below is exhaustive and a new category cannot fall
/// through to a default without a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionCategory {
    Transfer,
    Income,
    Shopping,
    Bills,
    Topup,
    Food,
    Other,
}

impl TransactionCategory {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Transfer => "Transfer",
            Self::Income => "Income",
            Self::Shopping => "Shopping",
            Self::Bills => "Bills",
            Self::Topup => "Top Up",
            Self::Food => "Food",
            Self::Other => "Other",
        }
    }

    /// Single-character glyph for list rendering
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Transfer => "⇄",
            Self::Income => "↓",
            Self::Shopping => "🛍",
            Self::Bills => "⚡",
            Self::Topup => "📱",
            Self::Food => "🍔",
            Self::Other => "•",
        }
    }

    /// Parse a category from its tag string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "transfer" => Some(Self::Transfer),
            "income" => Some(Self::Income),
            "shopping" => Some(Self::Shopping),
            "bills" => Some(Self::Bills),
            "topup" => Some(Self::Topup),
            "food" => Some(Self::Food),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single activity-feed entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Direction of funds
    pub direction: Direction,

    /// Amount, always non-negative; direction carries the sign
    pub amount: Rupiah,

    /// Free-text description (counterparty or merchant)
    pub description: String,

    /// Posting date
    pub date: NaiveDate,

    /// Spending category
    pub category: TransactionCategory,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        direction: Direction,
        amount: Rupiah,
        description: impl Into<String>,
        date: NaiveDate,
        category: TransactionCategory,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            direction,
            amount,
            description: description.into(),
            date,
            category,
        }
    }

    /// The amount with direction applied: positive inbound, negative outbound
    pub fn signed_amount(&self) -> Rupiah {
        match self.direction {
            Direction::Credit => self.amount,
            Direction::Debit => -self.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(direction: Direction, amount: i64) -> Transaction {
        Transaction::new(
            direction,
            Rupiah::from_units(amount),
            "GrabFood",
            NaiveDate::from_ymd_opt(2026, 1, 20).unwrap(),
            TransactionCategory::Food,
        )
    }

    #[test]
    fn test_signed_amount() {
        assert_eq!(
            sample(Direction::Credit, 85_000_000).signed_amount(),
            Rupiah::from_units(85_000_000)
        );
        assert_eq!(
            sample(Direction::Debit, 750_000).signed_amount(),
            Rupiah::from_units(-750_000)
        );
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!(Direction::parse("credit"), Some(Direction::Credit));
        assert_eq!(Direction::parse("out"), Some(Direction::Debit));
        assert_eq!(Direction::parse("sideways"), None);
    }

    #[test]
    fn test_category_parse_round_trip() {
        for tag in ["transfer", "income", "shopping", "bills", "topup", "food", "other"] {
            let category = TransactionCategory::parse(tag).unwrap();
            assert!(!category.label().is_empty());
            assert!(!category.icon().is_empty());
        }
        assert_eq!(TransactionCategory::parse("salary"), None);
    }

    #[test]
    fn test_serde_tags_are_lowercase() {
        let json = serde_json::to_string(&TransactionCategory::Topup).unwrap();
        assert_eq!(json, "\"topup\"");
        let json = serde_json::to_string(&Direction::Debit).unwrap();
        assert_eq!(json, "\"debit\"");
    }
}
