//! Portfolio report
//!
//! Groups the customer's accounts by type and computes the balance-screen
//! totals. Credit debt is excluded from the headline total and surfaced
//! separately as amount owed.

use crate::models::{Account, AccountType, Rupiah};

/// Accounts of one type plus their combined balance
#[derive(Debug, Clone)]
pub struct PortfolioGroup {
    /// Account type
    pub account_type: AccountType,
    /// Accounts of this type, in seed order
    pub accounts: Vec<Account>,
    /// Total balance for this type (signed; negative for credit)
    pub total_balance: Rupiah,
}

impl PortfolioGroup {
    /// Create a new empty group
    pub fn new(account_type: AccountType) -> Self {
        Self {
            account_type,
            accounts: Vec::new(),
            total_balance: Rupiah::zero(),
        }
    }

    /// Add an account to this group
    pub fn add_account(&mut self, account: Account) {
        self.total_balance += account.balance;
        self.accounts.push(account);
    }
}

/// Portfolio summary across all accounts
#[derive(Debug, Clone)]
pub struct PortfolioReport {
    /// Account groups in [`AccountType::all`] order; empty groups omitted
    pub groups: Vec<PortfolioGroup>,
    /// Sum of balances over all non-credit accounts; never negative given
    /// the seed sign invariant
    pub total_non_credit: Rupiah,
    /// Credit debt as a positive magnitude
    pub total_credit_owed: Rupiah,
}

impl PortfolioReport {
    /// Generate the report from an account list
    pub fn generate(accounts: &[Account]) -> Self {
        let mut total_non_credit = Rupiah::zero();
        let mut total_credit_owed = Rupiah::zero();

        let mut groups: Vec<PortfolioGroup> = Vec::new();

        for account_type in AccountType::all() {
            let mut group = PortfolioGroup::new(account_type);

            for account in accounts.iter().filter(|a| a.account_type == account_type) {
                if account_type.is_liability() {
                    total_credit_owed += account.balance.abs();
                } else {
                    total_non_credit += account.balance;
                }
                group.add_account(account.clone());
            }

            if !group.accounts.is_empty() {
                groups.push(group);
            }
        }

        Self {
            groups,
            total_non_credit,
            total_credit_owed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed;

    #[test]
    fn test_seed_totals() {
        let report = PortfolioReport::generate(&seed::accounts());

        // 5.422.211.927 + 4.400.000.000 + 250.000.000 + 500.000.000
        assert_eq!(report.total_non_credit, Rupiah::from_units(10_572_211_927));
        assert_eq!(report.total_credit_owed, Rupiah::from_units(12_500_000));
    }

    #[test]
    fn test_total_ignores_credit_accounts() {
        let accounts = seed::accounts();
        let without_credit: Vec<Account> = accounts
            .iter()
            .filter(|a| a.account_type != AccountType::Credit)
            .cloned()
            .collect();

        let full = PortfolioReport::generate(&accounts);
        let stripped = PortfolioReport::generate(&without_credit);
        assert_eq!(full.total_non_credit, stripped.total_non_credit);
        assert!(stripped.total_credit_owed.is_zero());
    }

    #[test]
    fn test_non_credit_total_never_negative() {
        let report = PortfolioReport::generate(&seed::accounts());
        assert!(!report.total_non_credit.is_negative());
    }

    #[test]
    fn test_groups_follow_type_order() {
        let report = PortfolioReport::generate(&seed::accounts());
        let types: Vec<AccountType> = report.groups.iter().map(|g| g.account_type).collect();
        assert_eq!(
            types,
            vec![
                AccountType::Savings,
                AccountType::Credit,
                AccountType::Investment,
                AccountType::Insurance,
            ]
        );
        // Both savings accounts land in the first group
        assert_eq!(report.groups[0].accounts.len(), 2);
        assert_eq!(
            report.groups[0].total_balance,
            Rupiah::from_units(9_822_211_927)
        );
    }

    #[test]
    fn test_empty_account_list() {
        let report = PortfolioReport::generate(&[]);
        assert!(report.groups.is_empty());
        assert!(report.total_non_credit.is_zero());
        assert!(report.total_credit_owed.is_zero());
    }
}
