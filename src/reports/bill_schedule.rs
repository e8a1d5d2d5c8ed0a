//! Bill schedule report
//!
//! The bills screen's view of upcoming payments: due-date order, urgency
//! flags, and the totals in the header card. Takes "today" as a parameter so
//! the same schedule renders identically in tests and in the app.

use chrono::NaiveDate;

use crate::models::{Bill, Rupiah};

/// One bill with its computed schedule fields
#[derive(Debug, Clone)]
pub struct ScheduledBill {
    /// The underlying bill
    pub bill: Bill,
    /// Whole days until the due date; negative when overdue
    pub days_until_due: i64,
    /// Whether the bill is inside the urgency window
    pub urgent: bool,
}

/// Schedule over all outstanding bills
#[derive(Debug, Clone)]
pub struct BillScheduleReport {
    /// Bills sorted by due date, soonest first
    pub rows: Vec<ScheduledBill>,
    /// Sum of all amounts owed
    pub total_due: Rupiah,
    /// How many bills are flagged urgent
    pub urgent_count: usize,
    /// How many bills are on auto-debit
    pub auto_debit_count: usize,
}

impl BillScheduleReport {
    /// Generate the schedule for a given day
    pub fn generate(bills: &[Bill], today: NaiveDate) -> Self {
        let mut rows: Vec<ScheduledBill> = bills
            .iter()
            .map(|bill| ScheduledBill {
                days_until_due: bill.days_until_due(today),
                urgent: bill.is_urgent(today),
                bill: bill.clone(),
            })
            .collect();

        rows.sort_by_key(|row| row.bill.due_date);

        let total_due = rows.iter().map(|row| row.bill.amount).sum();
        let urgent_count = rows.iter().filter(|row| row.urgent).count();
        let auto_debit_count = rows.iter().filter(|row| row.bill.auto_debit).count();

        Self {
            rows,
            total_due,
            urgent_count,
            auto_debit_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_seed_schedule_on_jan_26() {
        let report = BillScheduleReport::generate(&seed::bills(), date(2026, 1, 26));

        // Sorted soonest first: Telkomsel (27), PLN (28), IndiHome (29), PDAM (30)
        let names: Vec<&str> = report.rows.iter().map(|r| r.bill.name.as_str()).collect();
        assert_eq!(names, vec!["Telkomsel Halo", "PLN Pascabayar", "IndiHome", "PDAM"]);

        assert_eq!(report.rows[0].days_until_due, 1);
        assert!(report.rows[0].urgent);
        assert_eq!(report.rows[3].days_until_due, 4);
        assert!(!report.rows[3].urgent);

        assert_eq!(report.urgent_count, 3);
        assert_eq!(report.auto_debit_count, 2);
        // 3.500.000 + 450.000 + 850.000 + 750.000
        assert_eq!(report.total_due, Rupiah::from_units(5_550_000));
    }

    #[test]
    fn test_everything_urgent_when_overdue() {
        let report = BillScheduleReport::generate(&seed::bills(), date(2026, 2, 15));
        assert_eq!(report.urgent_count, report.rows.len());
        assert!(report.rows.iter().all(|r| r.days_until_due < 0));
    }

    #[test]
    fn test_nothing_urgent_well_in_advance() {
        let report = BillScheduleReport::generate(&seed::bills(), date(2026, 1, 10));
        assert_eq!(report.urgent_count, 0);
    }

    #[test]
    fn test_empty_bills() {
        let report = BillScheduleReport::generate(&[], date(2026, 1, 26));
        assert!(report.rows.is_empty());
        assert!(report.total_due.is_zero());
        assert_eq!(report.urgent_count, 0);
    }
}
