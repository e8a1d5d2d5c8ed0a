//! Bills CLI commands

use clap::Subcommand;

use crate::display::format_bill_schedule;
use crate::error::{SakuError, SakuResult};
use crate::reports::BillScheduleReport;
use crate::store::AppStore;

use super::resolve_today;

/// Bills subcommands
#[derive(Subcommand)]
pub enum BillsCommands {
    /// List outstanding bills with due dates and urgency
    List {
        /// Reference date for due-day computation (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        today: Option<String>,
    },
    /// Toggle auto-debit for a bill
    Toggle {
        /// Bill name (e.g., "PLN Pascabayar")
        name: String,
    },
    /// Simulate paying a bill now
    Pay {
        /// Bill name
        name: String,
        /// Reference date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        today: Option<String>,
    },
}

/// Handle a bills command
pub fn handle_bills_command(store: &mut AppStore, cmd: BillsCommands) -> SakuResult<()> {
    match cmd {
        BillsCommands::List { today } => {
            let today = resolve_today(today.as_deref())?;
            let report = BillScheduleReport::generate(store.bills(), today);
            print!("{}", format_bill_schedule(&report));
        }

        BillsCommands::Toggle { name } => {
            let bill = store
                .find_bill_by_name(&name)
                .ok_or_else(|| SakuError::bill_not_found(&name))?;
            let id = bill.id;
            let bill_name = bill.name.clone();

            let enabled = store.toggle_auto_debit(id)?;
            println!(
                "Auto-debit for {} is now {}.",
                bill_name,
                if enabled { "on" } else { "off" }
            );
            println!("(Session only; flags reset on the next launch.)");
        }

        BillsCommands::Pay { name, today } => {
            let today = resolve_today(today.as_deref())?;
            let bill = store
                .find_bill_by_name(&name)
                .ok_or_else(|| SakuError::bill_not_found(&name))?;

            if bill.auto_debit {
                println!(
                    "{} is on auto-debit and will be paid automatically on {}.",
                    bill.name,
                    bill.due_date.format("%Y-%m-%d")
                );
                return Ok(());
            }

            // Prototype: confirmation message only, nothing is debited
            let days = bill.days_until_due(today);
            println!("Payment simulated: {} — {}", bill.name, bill.amount);
            if days < 0 {
                println!("This bill was overdue by {} day(s).", -days);
            } else {
                println!("Due in {} day(s).", days);
            }
        }
    }

    Ok(())
}
