use anyhow::Result;
use clap::{Parser, Subcommand};

use saku::cli::{
    handle_balance_command, handle_bills_command, handle_history_command,
    handle_notifications_command, handle_profile_command, handle_transfer_command, BillsCommands,
    NotificationsCommands, ProfileCommands, TransferCommands,
};
use saku::config::paths::SakuPaths;
use saku::data::Dataset;
use saku::storage::PrefsStore;
use saku::store::AppStore;

#[derive(Parser)]
#[command(
    name = "saku",
    author = "Kaylee Beyene",
    version,
    about = "Terminal mobile-banking prototype",
    long_about = "saku is a mock mobile banking app rebuilt for the terminal. \
                  Balances, transfers, bills, and notifications all run on \
                  static seed data; nothing touches a real bank."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Show the account portfolio and total balance
    Balance {
        /// Hide balance figures
        #[arg(long)]
        hidden: bool,
    },

    /// Show the transaction history with income/expense totals
    History {
        /// Filter by direction: all, in, out
        #[arg(short, long, default_value = "all")]
        filter: String,
    },

    /// Bill commands
    #[command(subcommand)]
    Bills(BillsCommands),

    /// Notification commands
    #[command(subcommand, alias = "inbox")]
    Notifications(NotificationsCommands),

    /// Transfer commands (simulated)
    #[command(subcommand)]
    Transfer(TransferCommands),

    /// Display preference commands
    #[command(subcommand)]
    Profile(ProfileCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SakuPaths::new()?;
    paths.ensure_directories()?;
    let prefs = PrefsStore::load(&paths);
    let mut store = AppStore::new(Dataset::seed(), prefs);

    match cli.command {
        Some(Commands::Balance { hidden }) => handle_balance_command(&store, hidden)?,
        Some(Commands::History { filter }) => handle_history_command(&store, &filter)?,
        Some(Commands::Bills(cmd)) => handle_bills_command(&mut store, cmd)?,
        Some(Commands::Notifications(cmd)) => handle_notifications_command(&mut store, cmd)?,
        Some(Commands::Transfer(cmd)) => handle_transfer_command(&store, cmd)?,
        Some(Commands::Profile(cmd)) => handle_profile_command(&mut store, cmd)?,
        Some(Commands::Config) => {
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Preference file: {}", paths.prefs_file().display());
        }
        Some(Commands::Tui) | None => {
            let today = chrono::Local::now().date_naive();
            saku::tui::run_tui(&mut store, today)?;
        }
    }

    Ok(())
}
