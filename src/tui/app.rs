//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events:
//! the active tab, per-tab list selections, the hide-balances toggle, and
//! the confirm dialog standing in for platform alerts.

use chrono::NaiveDate;

use crate::models::{BillId, ContactId};
use crate::store::{AppStore, TransactionFilter};

/// Which tab is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    Home,
    History,
    Transfer,
    Bills,
    Notifications,
}

impl ActiveTab {
    /// Tabs in bar order
    pub fn all() -> [ActiveTab; 5] {
        [
            Self::Home,
            Self::History,
            Self::Transfer,
            Self::Bills,
            Self::Notifications,
        ]
    }

    /// Tab bar label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::History => "History",
            Self::Transfer => "Transfer",
            Self::Bills => "Bills",
            Self::Notifications => "Inbox",
        }
    }

    /// The next tab to the right, wrapping
    pub fn next(&self) -> Self {
        let tabs = Self::all();
        let index = tabs.iter().position(|t| t == self).unwrap_or(0);
        tabs[(index + 1) % tabs.len()]
    }

    /// The next tab to the left, wrapping
    pub fn previous(&self) -> Self {
        let tabs = Self::all();
        let index = tabs.iter().position(|t| t == self).unwrap_or(0);
        tabs[(index + tabs.len() - 1) % tabs.len()]
    }
}

/// A pending action awaiting dialog confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Simulate paying a bill now
    PayBill(BillId),
    /// Flip a bill's auto-debit flag
    ToggleAutoDebit(BillId),
    /// Simulate a transfer to a contact
    Transfer(ContactId),
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    /// Key hints overlay
    Help,
    /// Yes/no confirmation for a pending action
    Confirm {
        message: String,
        action: ConfirmAction,
    },
}

/// Main application state
pub struct App<'a> {
    /// The application store
    pub store: &'a mut AppStore,

    /// Reference date for due-day computation, fixed at launch
    pub today: NaiveDate,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active tab
    pub active_tab: ActiveTab,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Hide balance figures on the home tab
    pub hide_balances: bool,

    /// Active history filter tab
    pub history_filter: TransactionFilter,

    /// Selected row on the bills tab
    pub bills_index: usize,

    /// Selected row on the transfer tab (saved then recent contacts)
    pub transfer_index: usize,

    /// Selected row on the notifications tab
    pub notifications_index: usize,

    /// Transient status message shown in the status bar
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create the initial app state
    pub fn new(store: &'a mut AppStore, today: NaiveDate) -> Self {
        Self {
            store,
            today,
            should_quit: false,
            active_tab: ActiveTab::default(),
            active_dialog: ActiveDialog::default(),
            hide_balances: false,
            history_filter: TransactionFilter::default(),
            bills_index: 0,
            transfer_index: 0,
            notifications_index: 0,
            status_message: None,
        }
    }

    /// Whether a dialog is currently shown
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Close any open dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Set a transient status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Number of selectable rows on the current tab
    pub fn current_list_len(&self) -> usize {
        match self.active_tab {
            ActiveTab::Bills => self.store.bills().len(),
            ActiveTab::Transfer => {
                self.store.saved_contacts().len() + self.store.recent_contacts().len()
            }
            ActiveTab::Notifications => self.store.notifications().len(),
            _ => 0,
        }
    }

    /// Mutable reference to the current tab's selection index
    pub fn current_index_mut(&mut self) -> Option<&mut usize> {
        match self.active_tab {
            ActiveTab::Bills => Some(&mut self.bills_index),
            ActiveTab::Transfer => Some(&mut self.transfer_index),
            ActiveTab::Notifications => Some(&mut self.notifications_index),
            _ => None,
        }
    }

    /// Move the current tab's selection down
    pub fn select_next(&mut self) {
        let len = self.current_list_len();
        if let Some(index) = self.current_index_mut() {
            if len > 0 {
                *index = (*index + 1).min(len - 1);
            }
        }
    }

    /// Move the current tab's selection up
    pub fn select_previous(&mut self) {
        if let Some(index) = self.current_index_mut() {
            *index = index.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_cycling_wraps() {
        assert_eq!(ActiveTab::Home.next(), ActiveTab::History);
        assert_eq!(ActiveTab::Notifications.next(), ActiveTab::Home);
        assert_eq!(ActiveTab::Home.previous(), ActiveTab::Notifications);
    }
}
