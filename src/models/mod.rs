//! Core data models for saku-cli
//!
//! This module contains all the data structures that represent the banking
//! prototype domain: accounts, transactions, bills, notifications, contacts.

pub mod account;
pub mod bill;
pub mod contact;
pub mod ids;
pub mod money;
pub mod notification;
pub mod profile;
pub mod transaction;

pub use account::{Account, AccountType};
pub use bill::{Bill, BillCategory, URGENT_WINDOW_DAYS};
pub use contact::{Bank, Contact};
pub use ids::{AccountId, BillId, ContactId, NotificationId, TransactionId};
pub use money::Rupiah;
pub use notification::{Notification, NotificationKind};
pub use profile::UserProfile;
pub use transaction::{Direction, Transaction, TransactionCategory};
