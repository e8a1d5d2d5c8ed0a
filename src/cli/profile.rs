//! Profile CLI commands
//!
//! The only durable state in the app: the display name and the simulated
//! overseas card (balance + account name).

use clap::Subcommand;

use crate::error::SakuResult;
use crate::store::AppStore;

/// Profile subcommands
#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show the current profile values
    Show,
    /// Set the home-screen display name
    SetName {
        /// New display name (trimmed; must not be blank)
        name: String,
    },
    /// Set the simulated overseas card balance
    SetCardBalance {
        /// Amount in rupiah (non-negative)
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Set the overseas card account name
    SetAccountName {
        /// New account name (trimmed; must not be blank)
        name: String,
    },
}

/// Handle a profile command
pub fn handle_profile_command(store: &mut AppStore, cmd: ProfileCommands) -> SakuResult<()> {
    match cmd {
        ProfileCommands::Show => {
            println!("Display name:   {}", store.display_name());
            println!("Card balance:   {}", store.card_balance());
            println!("Card account:   {}", store.account_name());
        }

        ProfileCommands::SetName { name } => {
            store.set_display_name(&name)?;
            println!("Display name saved: {}", store.display_name());
        }

        ProfileCommands::SetCardBalance { amount } => {
            let saved = store.set_card_balance(&amount)?;
            println!("Card balance saved: {}", saved);
        }

        ProfileCommands::SetAccountName { name } => {
            store.set_account_name(&name)?;
            println!("Card account name saved: {}", store.account_name());
        }
    }

    Ok(())
}
