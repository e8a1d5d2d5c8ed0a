//! User profile model

use serde::{Deserialize, Serialize};

use super::money::Rupiah;

/// The signed-in user's profile
///
/// `total_balance` is the headline figure on the home card; the per-account
/// portfolio total is computed separately from the account list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name shown in the home greeting
    pub name: String,

    /// Headline balance shown on the home card
    pub total_balance: Rupiah,
}

impl UserProfile {
    /// Create a new profile
    pub fn new(name: impl Into<String>, total_balance: Rupiah) -> Self {
        Self {
            name: name.into(),
            total_balance,
        }
    }
}
