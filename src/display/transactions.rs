//! Transaction display formatting

use crate::models::{Direction, Transaction};
use crate::reports::CashFlowSummary;
use crate::store::TransactionFilter;

/// Format the activity feed as a table
pub fn format_transaction_list(transactions: &[&Transaction], filter: TransactionFilter) -> String {
    if transactions.is_empty() {
        return format!("No {} transactions.\n", filter.to_string().to_lowercase());
    }

    let description_width = transactions
        .iter()
        .map(|t| t.description.len())
        .max()
        .unwrap_or(11)
        .max(11);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<10}  {:<description_width$}  {:<8}  {:>18}\n",
        "Date",
        "Description",
        "Category",
        "Amount",
        description_width = description_width,
    ));
    output.push_str(&format!(
        "{:-<10}  {:-<description_width$}  {:-<8}  {:->18}\n",
        "",
        "",
        "",
        "",
        description_width = description_width,
    ));

    for transaction in transactions {
        let sign = match transaction.direction {
            Direction::Credit => "+",
            Direction::Debit => "-",
        };

        let amount = format!("{}{}", sign, transaction.amount);
        output.push_str(&format!(
            "{:<10}  {:<description_width$}  {:<8}  {:>18}\n",
            transaction.date.format("%Y-%m-%d"),
            transaction.description,
            transaction.category.label(),
            amount,
            description_width = description_width,
        ));
    }

    output
}

/// Format the income/expense header
pub fn format_cash_flow(summary: &CashFlowSummary) -> String {
    format!(
        "Income:  +{}\nExpense: -{}\nNet:     {}\n",
        summary.total_income,
        summary.total_expense,
        summary.net(),
    )
}
