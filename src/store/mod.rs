//! Application state store
//!
//! One explicitly-owned mutable object instead of the original's module-level
//! arrays mutated from whichever screen touched them last. The store holds a
//! working copy of the seed dataset plus the preference file; screens and CLI
//! handlers read through it and route every mutation through a named
//! operation.
//!
//! Auto-debit flags and notification read flags are session-scoped: they
//! revert to the seed values on the next launch. Only the preference keys
//! persist.

use crate::data::Dataset;
use crate::error::{SakuError, SakuResult};
use crate::models::{Bank, Bill, BillId, Contact, Notification, NotificationId, Rupiah, Transaction};
use crate::storage::PrefsStore;

mod filter;

pub use filter::TransactionFilter;

/// Mutable application state: seed data working copy + preferences
pub struct AppStore {
    data: Dataset,
    prefs: PrefsStore,
}

impl AppStore {
    /// Create a store over a dataset and loaded preferences
    pub fn new(data: Dataset, prefs: PrefsStore) -> Self {
        Self { data, prefs }
    }

    /// The full dataset (read-only)
    pub fn data(&self) -> &Dataset {
        &self.data
    }

    /// The preference store (read-only)
    pub fn prefs(&self) -> &PrefsStore {
        &self.prefs
    }

    // --- Profile -----------------------------------------------------------

    /// The home-screen display name: saved preference, else the seed profile
    pub fn display_name(&self) -> &str {
        self.prefs.display_name().unwrap_or(&self.data.user.name)
    }

    /// Save a new display name (trimmed; blank input rejected)
    pub fn set_display_name(&mut self, name: &str) -> SakuResult<()> {
        self.prefs.set_display_name(name)
    }

    /// Headline balance for the home card
    pub fn headline_balance(&self) -> Rupiah {
        self.data.user.total_balance
    }

    /// Simulated overseas card balance
    pub fn card_balance(&self) -> Rupiah {
        self.prefs.card_balance()
    }

    /// Save a new simulated card balance from user input
    pub fn set_card_balance(&mut self, input: &str) -> SakuResult<Rupiah> {
        self.prefs.set_card_balance(input)
    }

    /// Overseas card account name
    pub fn account_name(&self) -> &str {
        self.prefs.account_name()
    }

    /// Save a new overseas card account name
    pub fn set_account_name(&mut self, name: &str) -> SakuResult<()> {
        self.prefs.set_account_name(name)
    }

    // --- Transactions ------------------------------------------------------

    /// Activity feed in seed order (newest first)
    pub fn transactions(&self) -> &[Transaction] {
        &self.data.transactions
    }

    /// Activity feed filtered by direction, order preserved
    pub fn transactions_filtered(&self, filter: TransactionFilter) -> Vec<&Transaction> {
        filter.apply(&self.data.transactions)
    }

    // --- Bills -------------------------------------------------------------

    /// Outstanding bills
    pub fn bills(&self) -> &[Bill] {
        &self.data.bills
    }

    /// Flip the auto-debit flag on a bill, returning the new state
    pub fn toggle_auto_debit(&mut self, id: BillId) -> SakuResult<bool> {
        let bill = self
            .data
            .bills
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| SakuError::bill_not_found(id.to_string()))?;

        bill.auto_debit = !bill.auto_debit;
        Ok(bill.auto_debit)
    }

    /// Find a bill by (case-insensitive) name
    pub fn find_bill_by_name(&self, name: &str) -> Option<&Bill> {
        let needle = name.trim().to_lowercase();
        self.data
            .bills
            .iter()
            .find(|b| b.name.to_lowercase() == needle)
    }

    // --- Notifications -----------------------------------------------------

    /// Inbox notifications, newest first
    pub fn notifications(&self) -> &[Notification] {
        &self.data.notifications
    }

    /// Number of unread notifications (the tab badge)
    pub fn unread_count(&self) -> usize {
        self.data.notifications.iter().filter(|n| !n.read).count()
    }

    /// Mark one notification as read
    pub fn mark_notification_read(&mut self, id: NotificationId) -> SakuResult<()> {
        let notification = self
            .data
            .notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| SakuError::notification_not_found(id.to_string()))?;

        notification.read = true;
        Ok(())
    }

    /// Mark every notification as read
    pub fn mark_all_notifications_read(&mut self) {
        for notification in &mut self.data.notifications {
            notification.read = true;
        }
    }

    // --- Contacts ----------------------------------------------------------

    /// Saved transfer recipients
    pub fn saved_contacts(&self) -> &[Contact] {
        &self.data.saved_contacts
    }

    /// Recently used transfer recipients
    pub fn recent_contacts(&self) -> &[Contact] {
        &self.data.recent_contacts
    }

    /// Find a contact by (case-insensitive) name, saved list first
    pub fn find_contact_by_name(&self, name: &str) -> Option<&Contact> {
        let needle = name.trim().to_lowercase();
        self.data
            .saved_contacts
            .iter()
            .chain(self.data.recent_contacts.iter())
            .find(|c| c.name.to_lowercase() == needle)
    }

    /// Contacts whose name contains the query, case-insensitive
    pub fn search_contacts(&self, query: &str) -> Vec<&Contact> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.data.saved_contacts.iter().collect();
        }
        self.data
            .saved_contacts
            .iter()
            .chain(self.data.recent_contacts.iter())
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Find a destination bank by clearing code or full name,
    /// case-insensitive
    pub fn find_bank(&self, query: &str) -> Option<&Bank> {
        let needle = query.trim().to_lowercase();
        self.data
            .banks
            .iter()
            .find(|b| b.code.to_lowercase() == needle || b.name.to_lowercase() == needle)
    }

    // --- Transfers ---------------------------------------------------------

    /// Validate a simulated transfer and return the parsed amount
    ///
    /// Prototype semantics: nothing is debited anywhere; this only performs
    /// the input validation the confirm dialog sits behind.
    pub fn validate_transfer(&self, recipient: &str, amount: &str) -> SakuResult<Rupiah> {
        if recipient.trim().is_empty() {
            return Err(SakuError::Validation("Recipient cannot be empty".into()));
        }

        let amount = Rupiah::parse(amount)
            .map_err(|_| SakuError::Validation(format!("Invalid amount: '{}'", amount.trim())))?;

        if !amount.is_positive() {
            return Err(SakuError::Validation(
                "Transfer amount must be greater than zero".into(),
            ));
        }

        Ok(amount)
    }
}
