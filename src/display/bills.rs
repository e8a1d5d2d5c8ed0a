//! Bill display formatting

use crate::reports::BillScheduleReport;

/// Format the bill schedule as a table with a totals footer
pub fn format_bill_schedule(report: &BillScheduleReport) -> String {
    if report.rows.is_empty() {
        return "No outstanding bills.".to_string();
    }

    let name_width = report
        .rows
        .iter()
        .map(|row| row.bill.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<11}  {:>14}  {:<10}  {:<10}  {}\n",
        "Name",
        "Category",
        "Amount",
        "Due",
        "Status",
        "Auto-Debit",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<11}  {:->14}  {:-<10}  {:-<10}  {:-<10}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for row in &report.rows {
        let status = if row.days_until_due < 0 {
            "OVERDUE".to_string()
        } else if row.urgent {
            format!("{}d URGENT", row.days_until_due)
        } else {
            format!("{}d", row.days_until_due)
        };

        output.push_str(&format!(
            "{:<name_width$}  {:<11}  {:>14}  {:<10}  {:<10}  {}\n",
            row.bill.name,
            row.bill.category.label(),
            row.bill.amount.to_string(),
            row.bill.due_date.format("%Y-%m-%d"),
            status,
            if row.bill.auto_debit { "On" } else { "Off" },
            name_width = name_width,
        ));
    }

    output.push_str(&format!(
        "\nTotal due: {}  ({} urgent, {} on auto-debit)\n",
        report.total_due, report.urgent_count, report.auto_debit_count,
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed;
    use chrono::NaiveDate;

    #[test]
    fn test_bill_schedule_output() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 26).unwrap();
        let report = BillScheduleReport::generate(&seed::bills(), today);
        let output = format_bill_schedule(&report);

        assert!(output.contains("PLN Pascabayar"));
        assert!(output.contains("2d URGENT"));
        assert!(output.contains("4d"));
        assert!(output.contains("Total due: Rp 5.550.000"));
        assert!(output.contains("3 urgent, 2 on auto-debit"));
    }

    #[test]
    fn test_overdue_status() {
        let today = NaiveDate::from_ymd_opt(2026, 2, 15).unwrap();
        let report = BillScheduleReport::generate(&seed::bills(), today);
        assert!(format_bill_schedule(&report).contains("OVERDUE"));
    }

    #[test]
    fn test_empty_schedule() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 26).unwrap();
        let report = BillScheduleReport::generate(&[], today);
        assert_eq!(format_bill_schedule(&report), "No outstanding bills.");
    }
}
