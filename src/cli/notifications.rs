//! Notifications CLI commands

use clap::Subcommand;

use crate::display::format_notification_list;
use crate::error::{SakuError, SakuResult};
use crate::store::AppStore;

/// Notifications subcommands
#[derive(Subcommand)]
pub enum NotificationsCommands {
    /// List inbox notifications
    List {
        /// Show unread notifications only
        #[arg(short, long)]
        unread: bool,
    },
    /// Mark one notification as read, by list position
    Read {
        /// 1-based position in the list
        index: usize,
    },
    /// Mark every notification as read
    ReadAll,
}

/// Handle a notifications command
pub fn handle_notifications_command(
    store: &mut AppStore,
    cmd: NotificationsCommands,
) -> SakuResult<()> {
    match cmd {
        NotificationsCommands::List { unread } => {
            print!("{}", format_notification_list(store.notifications(), unread));
            println!("\nUnread: {}", store.unread_count());
        }

        NotificationsCommands::Read { index } => {
            let id = store
                .notifications()
                .get(index.wrapping_sub(1))
                .map(|n| n.id)
                .ok_or_else(|| SakuError::notification_not_found(format!("#{}", index)))?;

            store.mark_notification_read(id)?;
            println!("Marked notification {} as read (session only).", index);
        }

        NotificationsCommands::ReadAll => {
            store.mark_all_notifications_read();
            println!("All notifications marked as read (session only).");
        }
    }

    Ok(())
}
