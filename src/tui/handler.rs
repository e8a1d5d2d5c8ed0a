//! Event handling logic for the TUI
//!
//! Key dispatch: dialogs swallow input first, then tab-local bindings, then
//! the global bindings (tab switching, quit).

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::display::mask_account_number;
use crate::models::Contact;

use super::app::{ActiveDialog, ActiveTab, App, ConfirmAction};
use super::event::Event;

/// Handle a terminal event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Resize(_, _) => Ok(()),
        Event::Tick => Ok(()),
    }
}

/// Handle a key press
fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    // Tab-local bindings first
    match app.active_tab {
        ActiveTab::Home => {
            if key.code == KeyCode::Char('h') {
                app.hide_balances = !app.hide_balances;
                return Ok(());
            }
        }
        ActiveTab::History => {
            if key.code == KeyCode::Char('f') {
                app.history_filter = cycle_filter(app.history_filter);
                return Ok(());
            }
        }
        ActiveTab::Bills => match key.code {
            KeyCode::Enter => {
                open_pay_confirm(app);
                return Ok(());
            }
            KeyCode::Char('a') => {
                open_auto_debit_confirm(app);
                return Ok(());
            }
            _ => {}
        },
        ActiveTab::Transfer => {
            if key.code == KeyCode::Enter {
                open_transfer_confirm(app);
                return Ok(());
            }
        }
        ActiveTab::Notifications => match key.code {
            KeyCode::Enter => {
                mark_selected_read(app);
                return Ok(());
            }
            KeyCode::Char('r') => {
                app.store.mark_all_notifications_read();
                app.set_status("All notifications marked as read");
                return Ok(());
            }
            _ => {}
        },
    }

    // Global bindings
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('?') => app.active_dialog = ActiveDialog::Help,
        KeyCode::Tab => app.active_tab = app.active_tab.next(),
        KeyCode::BackTab => app.active_tab = app.active_tab.previous(),
        KeyCode::Char(c @ '1'..='5') => {
            let index = (c as usize) - ('1' as usize);
            app.active_tab = ActiveTab::all()[index];
        }
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        _ => {}
    }

    Ok(())
}

/// Handle a key press while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match &app.active_dialog {
        ActiveDialog::Help => {
            // Any key closes the help overlay
            app.close_dialog();
        }
        ActiveDialog::Confirm { action, .. } => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                let action = action.clone();
                app.close_dialog();
                perform_confirmed_action(app, action);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.close_dialog();
            }
            _ => {}
        },
        ActiveDialog::None => {}
    }

    Ok(())
}

/// Advance the history filter through its tab order
fn cycle_filter(
    filter: crate::store::TransactionFilter,
) -> crate::store::TransactionFilter {
    let tabs = crate::store::TransactionFilter::all();
    let index = tabs.iter().position(|f| *f == filter).unwrap_or(0);
    tabs[(index + 1) % tabs.len()]
}

/// The contact under the transfer-tab cursor, saved list first
fn selected_contact<'a>(app: &'a App) -> Option<&'a Contact> {
    let saved = app.store.saved_contacts();
    if app.transfer_index < saved.len() {
        saved.get(app.transfer_index)
    } else {
        app.store
            .recent_contacts()
            .get(app.transfer_index - saved.len())
    }
}

/// Open the pay-now confirmation for the selected bill
fn open_pay_confirm(app: &mut App) {
    let Some(bill) = app.store.bills().get(app.bills_index) else {
        return;
    };

    if bill.auto_debit {
        let name = bill.name.clone();
        app.set_status(format!("{} is on auto-debit; manual payment disabled", name));
        return;
    }

    app.active_dialog = ActiveDialog::Confirm {
        message: format!("Pay {} ({})?", bill.name, bill.amount),
        action: ConfirmAction::PayBill(bill.id),
    };
}

/// Open the auto-debit toggle confirmation for the selected bill
fn open_auto_debit_confirm(app: &mut App) {
    let Some(bill) = app.store.bills().get(app.bills_index) else {
        return;
    };

    let verb = if bill.auto_debit { "Disable" } else { "Enable" };
    app.active_dialog = ActiveDialog::Confirm {
        message: format!("{} auto-debit for {}?", verb, bill.name),
        action: ConfirmAction::ToggleAutoDebit(bill.id),
    };
}

/// Open the transfer confirmation for the selected contact
fn open_transfer_confirm(app: &mut App) {
    let Some(contact) = selected_contact(app) else {
        return;
    };

    app.active_dialog = ActiveDialog::Confirm {
        message: format!(
            "Transfer to {} ({} • {})?",
            contact.name,
            contact.bank,
            mask_account_number(&contact.account_number)
        ),
        action: ConfirmAction::Transfer(contact.id),
    };
}

/// Mark the notification under the cursor as read
fn mark_selected_read(app: &mut App) {
    let Some(id) = app
        .store
        .notifications()
        .get(app.notifications_index)
        .map(|n| n.id)
    else {
        return;
    };

    if app.store.mark_notification_read(id).is_ok() {
        app.set_status("Notification marked as read");
    }
}

/// Apply a confirmed action to the store
fn perform_confirmed_action(app: &mut App, action: ConfirmAction) {
    match action {
        ConfirmAction::PayBill(id) => {
            let Some(bill) = app.store.bills().iter().find(|b| b.id == id) else {
                return;
            };
            // Prototype: nothing is debited
            let message = format!("Payment simulated: {} — {}", bill.name, bill.amount);
            app.set_status(message);
        }

        ConfirmAction::ToggleAutoDebit(id) => match app.store.toggle_auto_debit(id) {
            Ok(enabled) => {
                let state = if enabled { "on" } else { "off" };
                app.set_status(format!("Auto-debit turned {}", state));
            }
            Err(e) => app.set_status(e.to_string()),
        },

        ConfirmAction::Transfer(id) => {
            let name = app
                .store
                .saved_contacts()
                .iter()
                .chain(app.store.recent_contacts().iter())
                .find(|c| c.id == id)
                .map(|c| c.name.clone());

            if let Some(name) = name {
                app.set_status(format!("Transfer simulated to {}", name));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SakuPaths;
    use crate::data::Dataset;
    use crate::storage::PrefsStore;
    use crate::store::{AppStore, TransactionFilter};
    use chrono::NaiveDate;
    use crossterm::event::KeyModifiers;
    use tempfile::TempDir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn fixture() -> (TempDir, AppStore) {
        let temp = TempDir::new().unwrap();
        let paths = SakuPaths::with_base_dir(temp.path().to_path_buf());
        let store = AppStore::new(Dataset::seed(), PrefsStore::load(&paths));
        (temp, store)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 26).unwrap()
    }

    #[test]
    fn test_quit_key() {
        let (_temp, mut store) = fixture();
        let mut app = App::new(&mut store, today());

        handle_key(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_tab_switching() {
        let (_temp, mut store) = fixture();
        let mut app = App::new(&mut store, today());

        handle_key(&mut app, key(KeyCode::Tab)).unwrap();
        assert_eq!(app.active_tab, ActiveTab::History);

        handle_key(&mut app, key(KeyCode::Char('4'))).unwrap();
        assert_eq!(app.active_tab, ActiveTab::Bills);
    }

    #[test]
    fn test_hide_balances_toggle_on_home_only() {
        let (_temp, mut store) = fixture();
        let mut app = App::new(&mut store, today());

        handle_key(&mut app, key(KeyCode::Char('h'))).unwrap();
        assert!(app.hide_balances);

        app.active_tab = ActiveTab::Bills;
        handle_key(&mut app, key(KeyCode::Char('h'))).unwrap();
        assert!(app.hide_balances);
    }

    #[test]
    fn test_history_filter_cycles() {
        let (_temp, mut store) = fixture();
        let mut app = App::new(&mut store, today());
        app.active_tab = ActiveTab::History;

        handle_key(&mut app, key(KeyCode::Char('f'))).unwrap();
        assert_eq!(app.history_filter, TransactionFilter::Incoming);
        handle_key(&mut app, key(KeyCode::Char('f'))).unwrap();
        assert_eq!(app.history_filter, TransactionFilter::Outgoing);
        handle_key(&mut app, key(KeyCode::Char('f'))).unwrap();
        assert_eq!(app.history_filter, TransactionFilter::All);
    }

    #[test]
    fn test_selection_clamps_to_list() {
        let (_temp, mut store) = fixture();
        let mut app = App::new(&mut store, today());
        app.active_tab = ActiveTab::Bills;

        for _ in 0..10 {
            handle_key(&mut app, key(KeyCode::Down)).unwrap();
        }
        assert_eq!(app.bills_index, 3);

        for _ in 0..10 {
            handle_key(&mut app, key(KeyCode::Up)).unwrap();
        }
        assert_eq!(app.bills_index, 0);
    }

    #[test]
    fn test_auto_debit_confirm_flow() {
        let (_temp, mut store) = fixture();
        let mut app = App::new(&mut store, today());
        app.active_tab = ActiveTab::Bills;
        let was = app.store.bills()[0].auto_debit;

        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        assert!(app.has_dialog());

        handle_key(&mut app, key(KeyCode::Char('y'))).unwrap();
        assert!(!app.has_dialog());
        assert_eq!(app.store.bills()[0].auto_debit, !was);
    }

    #[test]
    fn test_confirm_declined_changes_nothing() {
        let (_temp, mut store) = fixture();
        let mut app = App::new(&mut store, today());
        app.active_tab = ActiveTab::Bills;
        let was = app.store.bills()[0].auto_debit;

        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        handle_key(&mut app, key(KeyCode::Char('n'))).unwrap();
        assert!(!app.has_dialog());
        assert_eq!(app.store.bills()[0].auto_debit, was);
    }

    #[test]
    fn test_pay_blocked_by_auto_debit() {
        let (_temp, mut store) = fixture();
        let mut app = App::new(&mut store, today());
        app.active_tab = ActiveTab::Bills;
        // Seed bill 0 (PLN Pascabayar) has auto-debit on
        assert!(app.store.bills()[0].auto_debit);

        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert!(!app.has_dialog());
        assert!(app
            .status_message
            .as_deref()
            .unwrap()
            .contains("auto-debit"));
    }

    #[test]
    fn test_notification_enter_marks_read() {
        let (_temp, mut store) = fixture();
        let mut app = App::new(&mut store, today());
        app.active_tab = ActiveTab::Notifications;
        assert_eq!(app.store.unread_count(), 3);

        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.store.unread_count(), 2);

        handle_key(&mut app, key(KeyCode::Char('r'))).unwrap();
        assert_eq!(app.store.unread_count(), 0);
    }

    #[test]
    fn test_transfer_confirm_mentions_masked_number() {
        let (_temp, mut store) = fixture();
        let mut app = App::new(&mut store, today());
        app.active_tab = ActiveTab::Transfer;

        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        let ActiveDialog::Confirm { message, .. } = &app.active_dialog else {
            panic!("expected confirm dialog");
        };
        assert!(message.contains("Ahmad Fauzi"));
        assert!(message.contains("••••9123"));
        assert!(!message.contains("0456789123"));
    }
}
