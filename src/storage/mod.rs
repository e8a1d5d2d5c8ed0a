//! Preference storage layer
//!
//! The only durable state in the prototype: a small JSON key-value file for
//! display preferences. All banking data stays in memory.

pub mod file_io;
pub mod prefs;

pub use prefs::{
    PrefsStore, ACCOUNT_NAME_KEY, CARD_BALANCE_KEY, DEFAULT_ACCOUNT_NAME, DEFAULT_CARD_BALANCE,
    USER_NAME_KEY,
};
