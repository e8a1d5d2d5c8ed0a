//! Transaction list filtering
//!
//! The history screen's three filter tabs. Filtering never reorders: the
//! seed list is reverse-chronological and stays that way.

use std::fmt;

use crate::models::{Direction, Transaction};

/// Which slice of the activity feed to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionFilter {
    /// Every transaction
    #[default]
    All,
    /// Inbound funds only
    Incoming,
    /// Outbound funds only
    Outgoing,
}

impl TransactionFilter {
    /// All filters, in tab order
    pub fn all() -> [TransactionFilter; 3] {
        [Self::All, Self::Incoming, Self::Outgoing]
    }

    /// Apply the filter, preserving order
    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions
            .iter()
            .filter(|t| self.matches(t))
            .collect()
    }

    /// Whether a single transaction passes the filter
    pub fn matches(&self, transaction: &Transaction) -> bool {
        match self {
            Self::All => true,
            Self::Incoming => transaction.direction == Direction::Credit,
            Self::Outgoing => transaction.direction == Direction::Debit,
        }
    }

    /// Parse a filter from a CLI argument
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "all" => Some(Self::All),
            "in" | "incoming" | "credit" => Some(Self::Incoming),
            "out" | "outgoing" | "debit" => Some(Self::Outgoing),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Incoming => write!(f, "In"),
            Self::Outgoing => write!(f, "Out"),
        }
    }
}
