//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the store layer.

pub mod balance;
pub mod bills;
pub mod history;
pub mod notifications;
pub mod profile;
pub mod transfer;

pub use balance::handle_balance_command;
pub use bills::{handle_bills_command, BillsCommands};
pub use history::handle_history_command;
pub use notifications::{handle_notifications_command, NotificationsCommands};
pub use profile::{handle_profile_command, ProfileCommands};
pub use transfer::{handle_transfer_command, TransferCommands};

use chrono::NaiveDate;

use crate::error::{SakuError, SakuResult};

/// Parse a `--today` override, falling back to the system date
pub fn resolve_today(arg: Option<&str>) -> SakuResult<NaiveDate> {
    match arg {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            SakuError::Validation(format!("Invalid date '{}': expected YYYY-MM-DD", s))
        }),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_today_parses_override() {
        let date = resolve_today(Some("2026-01-26")).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 1, 26).unwrap());
    }

    #[test]
    fn test_resolve_today_rejects_garbage() {
        assert!(resolve_today(Some("26/01/2026")).is_err());
    }
}
