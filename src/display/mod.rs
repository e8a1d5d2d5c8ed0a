//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display,
//! including plain-text tables and sensitive-field masking.

pub mod accounts;
pub mod bills;
pub mod contacts;
pub mod mask;
pub mod notifications;
pub mod transactions;

pub use accounts::format_portfolio;
pub use bills::format_bill_schedule;
pub use contacts::{format_bank_directory, format_contact_list};
pub use mask::{mask_account_number, HIDDEN_BALANCE};
pub use notifications::format_notification_list;
pub use transactions::{format_cash_flow, format_transaction_list};
