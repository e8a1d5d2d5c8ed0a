//! History CLI command

use crate::display::{format_cash_flow, format_transaction_list};
use crate::error::{SakuError, SakuResult};
use crate::reports::CashFlowSummary;
use crate::store::{AppStore, TransactionFilter};

/// Handle `saku history`
pub fn handle_history_command(store: &AppStore, filter: &str) -> SakuResult<()> {
    let filter = TransactionFilter::parse(filter).ok_or_else(|| {
        SakuError::Validation(format!(
            "Invalid filter: '{}'. Valid filters: all, in, out",
            filter
        ))
    })?;

    let summary = CashFlowSummary::compute(store.transactions());
    print!("{}", format_cash_flow(&summary));
    println!();

    let transactions = store.transactions_filtered(filter);
    print!("{}", format_transaction_list(&transactions, filter));
    Ok(())
}
