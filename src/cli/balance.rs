//! Balance CLI command

use crate::display::format_portfolio;
use crate::error::SakuResult;
use crate::reports::PortfolioReport;
use crate::store::AppStore;

/// Handle `saku balance`
pub fn handle_balance_command(store: &AppStore, hidden: bool) -> SakuResult<()> {
    let report = PortfolioReport::generate(&store.data().accounts);
    print!("{}", format_portfolio(&report, hidden));
    Ok(())
}
