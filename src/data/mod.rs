//! Seed dataset for the prototype
//!
//! There is no backend; every collection the app renders is seeded once at
//! startup. The dataset itself is read-only; screens that toggle flags work
//! on the mutable copy owned by [`crate::store::AppStore`].

pub mod seed;

use serde::{Deserialize, Serialize};

use crate::models::{Account, Bank, Bill, Contact, Notification, Rupiah, Transaction, UserProfile};

/// One month on the home balance chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalancePoint {
    /// Month label (e.g., "Aug")
    pub month: String,

    /// End-of-month balance
    pub amount: Rupiah,
}

impl BalancePoint {
    /// Create a new balance point
    pub fn new(month: impl Into<String>, amount: Rupiah) -> Self {
        Self {
            month: month.into(),
            amount,
        }
    }
}

/// Everything the prototype knows at startup
#[derive(Debug, Clone)]
pub struct Dataset {
    /// The signed-in user
    pub user: UserProfile,

    /// Customer accounts
    pub accounts: Vec<Account>,

    /// Activity feed, reverse-chronological
    pub transactions: Vec<Transaction>,

    /// Outstanding utility bills
    pub bills: Vec<Bill>,

    /// Inbox notifications, reverse-chronological
    pub notifications: Vec<Notification>,

    /// Saved transfer recipients
    pub saved_contacts: Vec<Contact>,

    /// Recently used transfer recipients
    pub recent_contacts: Vec<Contact>,

    /// Destination bank directory
    pub banks: Vec<Bank>,

    /// Six-month balance history for the home chart
    pub balance_history: Vec<BalancePoint>,
}

impl Dataset {
    /// Build the full seed dataset
    pub fn seed() -> Self {
        Self {
            user: seed::user(),
            accounts: seed::accounts(),
            transactions: seed::transactions(),
            bills: seed::bills(),
            notifications: seed::notifications(),
            saved_contacts: seed::saved_contacts(),
            recent_contacts: seed::recent_contacts(),
            banks: seed::banks(),
            balance_history: seed::balance_history(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountType, Direction};

    #[test]
    fn test_seed_shape() {
        let data = Dataset::seed();
        assert_eq!(data.accounts.len(), 5);
        assert_eq!(data.transactions.len(), 8);
        assert_eq!(data.bills.len(), 4);
        assert_eq!(data.notifications.len(), 4);
        assert_eq!(data.saved_contacts.len(), 5);
        assert_eq!(data.recent_contacts.len(), 4);
        assert_eq!(data.banks.len(), 10);
        assert_eq!(data.balance_history.len(), 6);
    }

    #[test]
    fn test_seed_accounts_satisfy_sign_invariant() {
        for account in Dataset::seed().accounts {
            account.validate().unwrap();
        }
    }

    #[test]
    fn test_seed_has_exactly_one_credit_account() {
        let data = Dataset::seed();
        let credit = data
            .accounts
            .iter()
            .filter(|a| a.account_type == AccountType::Credit)
            .count();
        assert_eq!(credit, 1);
    }

    #[test]
    fn test_seed_transactions_reverse_chronological() {
        let data = Dataset::seed();
        for pair in data.transactions.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[test]
    fn test_seed_transaction_amounts_non_negative() {
        for txn in Dataset::seed().transactions {
            assert!(!txn.amount.is_negative());
            // Direction carries the sign, not the amount
            match txn.direction {
                Direction::Credit => assert!(!txn.signed_amount().is_negative()),
                Direction::Debit => assert!(!txn.signed_amount().is_positive()),
            }
        }
    }

    #[test]
    fn test_seed_headline_matches_history() {
        let data = Dataset::seed();
        let last = data.balance_history.last().unwrap();
        assert_eq!(last.amount, data.user.total_balance);
    }
}
