//! Transfer contact and bank directory models

use serde::{Deserialize, Serialize};

use super::ids::ContactId;

/// A saved or recent transfer recipient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    /// Unique identifier
    pub id: ContactId,

    /// Recipient name
    pub name: String,

    /// Bank display name
    pub bank: String,

    /// Bank clearing code (e.g., "BCA")
    pub bank_code: String,

    /// Recipient account number
    pub account_number: String,
}

impl Contact {
    /// Create a new contact
    pub fn new(
        name: impl Into<String>,
        bank: impl Into<String>,
        bank_code: impl Into<String>,
        account_number: impl Into<String>,
    ) -> Self {
        Self {
            id: ContactId::new(),
            name: name.into(),
            bank: bank.into(),
            bank_code: bank_code.into(),
            account_number: account_number.into(),
        }
    }
}

/// An entry in the destination bank directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bank {
    /// Full bank name (e.g., "Bank Central Asia")
    pub name: String,

    /// Clearing code (e.g., "BCA")
    pub code: String,
}

impl Bank {
    /// Create a new bank directory entry
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }
}
