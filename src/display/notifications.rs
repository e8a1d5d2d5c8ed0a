//! Notification display formatting

use crate::models::Notification;

/// Format the inbox as a list, unread entries marked with a dot
pub fn format_notification_list(notifications: &[Notification], unread_only: bool) -> String {
    let visible: Vec<&Notification> = notifications
        .iter()
        .filter(|n| !unread_only || !n.read)
        .collect();

    if visible.is_empty() {
        return if unread_only {
            "No unread notifications.".to_string()
        } else {
            "No notifications.".to_string()
        };
    }

    let mut output = String::new();
    for (index, notification) in visible.iter().enumerate() {
        let marker = if notification.read { " " } else { "●" };
        output.push_str(&format!(
            "{} [{}] {}  {} ({})\n      {}\n",
            marker,
            index + 1,
            notification.date.format("%Y-%m-%d"),
            notification.title,
            notification.kind,
            notification.message,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed;

    #[test]
    fn test_list_output() {
        let output = format_notification_list(&seed::notifications(), false);
        assert!(output.contains("Transfer Berhasil"));
        assert!(output.contains("Promo Cashback"));
        assert!(output.contains("●"));
    }

    #[test]
    fn test_unread_only_hides_read_entries() {
        let output = format_notification_list(&seed::notifications(), true);
        assert!(!output.contains("Tagihan Jatuh Tempo"));
        assert!(output.contains("Promo Cashback"));
    }

    #[test]
    fn test_empty_messages() {
        assert_eq!(format_notification_list(&[], false), "No notifications.");
        let mut all_read = seed::notifications();
        for n in &mut all_read {
            n.read = true;
        }
        assert_eq!(
            format_notification_list(&all_read, true),
            "No unread notifications."
        );
    }
}
