//! Cash flow summary
//!
//! The income/expense header on the history screen. Every transaction lands
//! in exactly one bucket: direction decides, amounts are magnitudes.

use crate::models::{Direction, Rupiah, Transaction};

/// Income and expense totals over a transaction list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CashFlowSummary {
    /// Sum of inbound amounts
    pub total_income: Rupiah,
    /// Sum of outbound amounts (as a positive magnitude)
    pub total_expense: Rupiah,
}

impl CashFlowSummary {
    /// Compute the summary in one pass
    pub fn compute(transactions: &[Transaction]) -> Self {
        let mut total_income = Rupiah::zero();
        let mut total_expense = Rupiah::zero();

        for transaction in transactions {
            match transaction.direction {
                Direction::Credit => total_income += transaction.amount,
                Direction::Debit => total_expense += transaction.amount,
            }
        }

        Self {
            total_income,
            total_expense,
        }
    }

    /// Net flow: income minus expense; negative when spending exceeded income
    pub fn net(&self) -> Rupiah {
        self.total_income - self.total_expense
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed;

    #[test]
    fn test_seed_totals() {
        let summary = CashFlowSummary::compute(&seed::transactions());

        // 85.000.000 + 150.000.000
        assert_eq!(summary.total_income, Rupiah::from_units(235_000_000));
        // 520.000.000 + 15.000.000 + 2.500.000 + 3.500.000 + 750.000 + 500.000
        assert_eq!(summary.total_expense, Rupiah::from_units(542_250_000));
        assert_eq!(summary.net(), Rupiah::from_units(-307_250_000));
    }

    #[test]
    fn test_buckets_partition_the_list() {
        let transactions = seed::transactions();
        let summary = CashFlowSummary::compute(&transactions);

        let grand_total: Rupiah = transactions.iter().map(|t| t.amount).sum();
        assert_eq!(summary.total_income + summary.total_expense, grand_total);
    }

    #[test]
    fn test_empty_list() {
        let summary = CashFlowSummary::compute(&[]);
        assert!(summary.total_income.is_zero());
        assert!(summary.total_expense.is_zero());
        assert!(summary.net().is_zero());
    }
}
