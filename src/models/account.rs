//! Account model
//!
//! Represents the customer's products: savings accounts, the credit card,
//! investment and insurance positions.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::Rupiah;

/// Type of account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Savings account
    Savings,
    /// Credit card
    Credit,
    /// Investment product (mutual funds)
    Investment,
    /// Insurance product
    Insurance,
}

impl AccountType {
    /// Returns true if balances on this account type represent debt owed
    /// (stored as a negative magnitude)
    pub fn is_liability(&self) -> bool {
        matches!(self, Self::Credit)
    }

    /// Parse account type from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "savings" => Some(Self::Savings),
            "credit" | "credit_card" | "creditcard" => Some(Self::Credit),
            "investment" => Some(Self::Investment),
            "insurance" => Some(Self::Insurance),
            _ => None,
        }
    }

    /// All account types, in display order
    pub fn all() -> [AccountType; 4] {
        [
            Self::Savings,
            Self::Credit,
            Self::Investment,
            Self::Insurance,
        ]
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Savings => write!(f, "Savings"),
            Self::Credit => write!(f, "Credit Card"),
            Self::Investment => write!(f, "Investment"),
            Self::Insurance => write!(f, "Insurance"),
        }
    }
}

/// A customer account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,

    /// Account type
    pub account_type: AccountType,

    /// Product name (e.g., "Taplus Muda")
    pub name: String,

    /// Account number as printed on the product; card numbers may already
    /// contain masking characters in the seed data
    pub account_number: String,

    /// Current balance; credit accounts store the amount owed as a negative
    /// magnitude, all other types are non-negative
    pub balance: Rupiah,

    /// ISO 4217 currency code
    pub currency: String,
}

impl Account {
    /// Create a new account
    pub fn new(
        account_type: AccountType,
        name: impl Into<String>,
        account_number: impl Into<String>,
        balance: Rupiah,
    ) -> Self {
        Self {
            id: AccountId::new(),
            account_type,
            name: name.into(),
            account_number: account_number.into(),
            balance,
            currency: "IDR".to_string(),
        }
    }

    /// Validate the balance sign invariant
    ///
    /// Credit accounts must not carry a positive balance (debt is stored
    /// negative); every other type must be non-negative.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Account name cannot be empty".to_string());
        }

        if self.account_type.is_liability() {
            if self.balance.is_positive() {
                return Err(format!(
                    "Credit account '{}' must store debt as a negative balance",
                    self.name
                ));
            }
        } else if self.balance.is_negative() {
            return Err(format!(
                "{} account '{}' cannot have a negative balance",
                self.account_type, self.name
            ));
        }

        Ok(())
    }

    /// The balance magnitude for display; credit debt shows as a positive
    /// amount owed
    pub fn display_balance(&self) -> Rupiah {
        self.balance.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_savings_rejects_negative() {
        let mut account = Account::new(
            AccountType::Savings,
            "Taplus Muda",
            "0812345678",
            Rupiah::from_units(5_422_211_927),
        );
        assert!(account.validate().is_ok());

        account.balance = Rupiah::from_units(-1);
        assert!(account.validate().is_err());
    }

    #[test]
    fn test_validate_credit_rejects_positive() {
        let mut account = Account::new(
            AccountType::Credit,
            "Kartu Kredit Platinum",
            "4111 **** **** 1234",
            Rupiah::from_units(-12_500_000),
        );
        assert!(account.validate().is_ok());

        account.balance = Rupiah::from_units(12_500_000);
        assert!(account.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let account = Account::new(AccountType::Savings, "   ", "0812345678", Rupiah::zero());
        assert!(account.validate().is_err());
    }

    #[test]
    fn test_display_balance_abs() {
        let account = Account::new(
            AccountType::Credit,
            "Kartu Kredit Platinum",
            "4111 **** **** 1234",
            Rupiah::from_units(-12_500_000),
        );
        assert_eq!(account.display_balance(), Rupiah::from_units(12_500_000));
    }

    #[test]
    fn test_account_type_parse() {
        assert_eq!(AccountType::parse("savings"), Some(AccountType::Savings));
        assert_eq!(AccountType::parse("CREDIT"), Some(AccountType::Credit));
        assert_eq!(AccountType::parse("checking"), None);
    }

    #[test]
    fn test_is_liability() {
        assert!(AccountType::Credit.is_liability());
        assert!(!AccountType::Savings.is_liability());
        assert!(!AccountType::Investment.is_liability());
        assert!(!AccountType::Insurance.is_liability());
    }
}
