//! Transfer CLI commands
//!
//! Simulated transfers only: inputs are validated and a confirmation is
//! printed, but no balance moves anywhere.

use clap::Subcommand;

use crate::display::{format_bank_directory, format_contact_list, mask_account_number};
use crate::error::{SakuError, SakuResult};
use crate::models::Contact;
use crate::store::AppStore;

/// Transfer subcommands
#[derive(Subcommand)]
pub enum TransferCommands {
    /// List saved and recent transfer recipients
    Contacts {
        /// Filter contacts by name
        #[arg(short, long)]
        search: Option<String>,
    },
    /// List destination banks
    Banks,
    /// Simulate a transfer to a saved contact
    Send {
        /// Recipient contact name
        to: String,
        /// Amount in rupiah (e.g., "1500000" or "1.500.000")
        #[arg(short, long)]
        amount: String,
    },
    /// Simulate a transfer to a manually entered account
    Manual {
        /// Destination bank code or name (e.g., "BCA")
        bank: String,
        /// Destination account number (digits only)
        account: String,
        /// Amount in rupiah
        #[arg(short, long)]
        amount: String,
    },
}

/// Handle a transfer command
pub fn handle_transfer_command(store: &AppStore, cmd: TransferCommands) -> SakuResult<()> {
    match cmd {
        TransferCommands::Contacts { search } => match search {
            Some(query) => {
                let hits = store.search_contacts(&query);
                print!("{}", format_contact_list("Matches", &hits));
            }
            None => {
                let saved: Vec<&Contact> = store.saved_contacts().iter().collect();
                let recent: Vec<&Contact> = store.recent_contacts().iter().collect();
                print!("{}", format_contact_list("Saved", &saved));
                println!();
                print!("{}", format_contact_list("Recent", &recent));
            }
        },

        TransferCommands::Banks => {
            print!("{}", format_bank_directory(&store.data().banks));
        }

        TransferCommands::Send { to, amount } => {
            let contact = store
                .find_contact_by_name(&to)
                .ok_or_else(|| SakuError::contact_not_found(&to))?;

            let amount = store.validate_transfer(&contact.name, &amount)?;

            println!("Transfer simulated: {} to {}", amount, contact.name);
            println!(
                "  {} • {}",
                contact.bank,
                mask_account_number(&contact.account_number)
            );
            println!("No funds were moved; this is a prototype.");
        }

        TransferCommands::Manual {
            bank,
            account,
            amount,
        } => {
            let bank = store
                .find_bank(&bank)
                .ok_or_else(|| SakuError::bank_not_found(&bank))?;

            let account = account.trim();
            if account.is_empty() || !account.chars().all(|c| c.is_ascii_digit()) {
                return Err(SakuError::Validation(format!(
                    "Invalid account number: '{}'",
                    account
                )));
            }

            let amount = store.validate_transfer(account, &amount)?;

            println!(
                "Transfer simulated: {} to {} • {}",
                amount,
                bank.code,
                mask_account_number(account)
            );
            println!("No funds were moved; this is a prototype.");
        }
    }

    Ok(())
}
