//! Contact and bank directory display formatting

use crate::models::{Bank, Contact};

use super::mask::mask_account_number;

/// Format a contact list with masked account numbers
pub fn format_contact_list(title: &str, contacts: &[&Contact]) -> String {
    if contacts.is_empty() {
        return format!("{}: none.\n", title);
    }

    let name_width = contacts
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = format!("{}\n", title);
    for contact in contacts {
        output.push_str(&format!(
            "  {:<name_width$}  {:<8}  {}\n",
            contact.name,
            contact.bank,
            mask_account_number(&contact.account_number),
            name_width = name_width,
        ));
    }

    output
}

/// Format the destination bank directory
pub fn format_bank_directory(banks: &[Bank]) -> String {
    let name_width = banks
        .iter()
        .map(|b| b.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    for bank in banks {
        output.push_str(&format!(
            "{:<name_width$}  {}\n",
            bank.name,
            bank.code,
            name_width = name_width,
        ));
    }

    output
}
