//! Bill model
//!
//! Recurring utility bills with a due date and an auto-debit flag. Urgency is
//! a pure function of the due date and an explicit "today", so the same bill
//! list renders identically in tests and at any wall-clock time.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BillId;
use super::money::Rupiah;

/// A bill due within this many days is flagged urgent
pub const URGENT_WINDOW_DAYS: i64 = 3;

/// Utility category of a bill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillCategory {
    Electricity,
    Water,
    Phone,
    Internet,
}

impl BillCategory {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Electricity => "Electricity",
            Self::Water => "Water",
            Self::Phone => "Phone",
            Self::Internet => "Internet",
        }
    }

    /// Single-character glyph for list rendering
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Electricity => "⚡",
            Self::Water => "💧",
            Self::Phone => "📞",
            Self::Internet => "🌐",
        }
    }
}

impl fmt::Display for BillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A utility bill awaiting payment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    /// Unique identifier
    pub id: BillId,

    /// Bill name (e.g., "PLN Pascabayar")
    pub name: String,

    /// Issuing provider
    pub provider: String,

    /// Customer/subscription number at the provider
    pub customer_number: String,

    /// Amount owed, non-negative
    pub amount: Rupiah,

    /// Payment due date
    pub due_date: NaiveDate,

    /// Whether the bill is paid automatically at the due date; suppresses the
    /// manual pay action
    pub auto_debit: bool,

    /// Utility category
    pub category: BillCategory,
}

impl Bill {
    /// Create a new bill
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        provider: impl Into<String>,
        customer_number: impl Into<String>,
        amount: Rupiah,
        due_date: NaiveDate,
        auto_debit: bool,
        category: BillCategory,
    ) -> Self {
        Self {
            id: BillId::new(),
            name: name.into(),
            provider: provider.into(),
            customer_number: customer_number.into(),
            amount,
            due_date,
            auto_debit,
            category,
        }
    }

    /// Whole days until the due date; negative when overdue
    ///
    /// Date-only arithmetic: a bill due tomorrow is 1 day away regardless of
    /// the time of day, and a bill due today is 0.
    pub fn days_until_due(&self, today: NaiveDate) -> i64 {
        (self.due_date - today).num_days()
    }

    /// Whether the bill falls inside the urgency window (due in
    /// [`URGENT_WINDOW_DAYS`] days or fewer, including overdue)
    pub fn is_urgent(&self, today: NaiveDate) -> bool {
        self.days_until_due(today) <= URGENT_WINDOW_DAYS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bill_due(due_date: NaiveDate) -> Bill {
        Bill::new(
            "PLN Pascabayar",
            "PLN",
            "12345678901",
            Rupiah::from_units(3_500_000),
            due_date,
            false,
            BillCategory::Electricity,
        )
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_until_due() {
        let today = date(2026, 1, 25);

        assert_eq!(bill_due(date(2026, 1, 25)).days_until_due(today), 0);
        assert_eq!(bill_due(date(2026, 1, 26)).days_until_due(today), 1);
        assert_eq!(bill_due(date(2026, 1, 28)).days_until_due(today), 3);
        assert_eq!(bill_due(date(2026, 1, 23)).days_until_due(today), -2);
        // Month boundary
        assert_eq!(bill_due(date(2026, 2, 1)).days_until_due(today), 7);
    }

    #[test]
    fn test_urgency_boundary_at_three_days() {
        let today = date(2026, 1, 25);

        assert!(bill_due(date(2026, 1, 28)).is_urgent(today)); // exactly 3 days
        assert!(bill_due(date(2026, 1, 25)).is_urgent(today)); // due today
        assert!(bill_due(date(2026, 1, 20)).is_urgent(today)); // overdue
        assert!(!bill_due(date(2026, 1, 29)).is_urgent(today)); // 4 days out
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(BillCategory::Electricity.label(), "Electricity");
        assert_eq!(BillCategory::Water.to_string(), "Water");
        assert!(!BillCategory::Internet.icon().is_empty());
    }
}
