//! Notification model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::NotificationId;

/// Kind of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Transaction receipt
    Transaction,
    /// Promotional message
    Promo,
    /// Informational notice (e.g., bill reminders)
    Info,
}

impl NotificationKind {
    /// Single-character glyph for list rendering
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Transaction => "💸",
            Self::Promo => "🎁",
            Self::Info => "ℹ",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transaction => write!(f, "Transaction"),
            Self::Promo => write!(f, "Promo"),
            Self::Info => write!(f, "Info"),
        }
    }
}

/// An inbox notification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Unique identifier
    pub id: NotificationId,

    /// Short title
    pub title: String,

    /// Message body
    pub message: String,

    /// Delivery date
    pub date: NaiveDate,

    /// Whether the user has opened this notification; toggled in memory only
    pub read: bool,

    /// Notification kind
    pub kind: NotificationKind,
}

impl Notification {
    /// Create a new notification
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        date: NaiveDate,
        read: bool,
        kind: NotificationKind,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            title: title.into(),
            message: message.into(),
            date,
            read,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serde_tags() {
        let json = serde_json::to_string(&NotificationKind::Promo).unwrap();
        assert_eq!(json, "\"promo\"");
    }

    #[test]
    fn test_new_notification() {
        let n = Notification::new(
            "Transfer Berhasil",
            "Transfer Rp 15.000.000 ke PT Maju Jaya berhasil",
            NaiveDate::from_ymd_opt(2026, 1, 25).unwrap(),
            false,
            NotificationKind::Transaction,
        );
        assert!(!n.read);
        assert_eq!(n.kind, NotificationKind::Transaction);
    }
}
