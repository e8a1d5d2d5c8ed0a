//! Account display formatting
//!
//! Formats the portfolio for terminal output, honoring the hide-balances
//! toggle from the balance screen.

use crate::reports::PortfolioReport;

use super::mask::{mask_account_number, HIDDEN_BALANCE};

/// Format the portfolio report as grouped tables with a totals footer
pub fn format_portfolio(report: &PortfolioReport, hide_balances: bool) -> String {
    if report.groups.is_empty() {
        return "No accounts found.".to_string();
    }

    let name_width = report
        .groups
        .iter()
        .flat_map(|g| g.accounts.iter())
        .map(|a| a.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();

    for group in &report.groups {
        output.push_str(&format!("{}\n", group.account_type));

        for account in &group.accounts {
            let balance = if hide_balances {
                HIDDEN_BALANCE.to_string()
            } else {
                account.display_balance().to_string()
            };

            output.push_str(&format!(
                "  {:<name_width$}  {:<14}  {:>18}\n",
                account.name,
                mask_account_number(&account.account_number),
                balance,
                name_width = name_width,
            ));
        }
        output.push('\n');
    }

    if hide_balances {
        output.push_str(&format!("Total Balance: {}\n", HIDDEN_BALANCE));
    } else {
        output.push_str(&format!("Total Balance: {}\n", report.total_non_credit));
        if !report.total_credit_owed.is_zero() {
            output.push_str(&format!("Credit Owed:   {}\n", report.total_credit_owed));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed;

    #[test]
    fn test_portfolio_output() {
        let report = PortfolioReport::generate(&seed::accounts());
        let output = format_portfolio(&report, false);

        assert!(output.contains("Taplus Muda"));
        assert!(output.contains("Total Balance: Rp 10.572.211.927"));
        assert!(output.contains("Credit Owed:   Rp 12.500.000"));
        // Credit debt shown as magnitude, not with a minus sign
        assert!(!output.contains("-Rp"));
        // Account numbers are masked
        assert!(output.contains("••••5678"));
        assert!(!output.contains("0812345678"));
    }

    #[test]
    fn test_hidden_balances() {
        let report = PortfolioReport::generate(&seed::accounts());
        let output = format_portfolio(&report, true);

        assert!(output.contains(HIDDEN_BALANCE));
        assert!(!output.contains("Rp 10.572.211.927"));
        assert!(!output.contains("Credit Owed"));
    }

    #[test]
    fn test_empty_portfolio() {
        let report = PortfolioReport::generate(&[]);
        assert_eq!(format_portfolio(&report, false), "No accounts found.");
    }
}
