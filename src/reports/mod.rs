//! Derived summaries over the seed collections
//!
//! Pure computations: each report is a fresh pass over an immutable slice,
//! with "today" passed in explicitly where due dates are involved.

pub mod bill_schedule;
pub mod cash_flow;
pub mod portfolio;

pub use bill_schedule::{BillScheduleReport, ScheduledBill};
pub use cash_flow::CashFlowSummary;
pub use portfolio::{PortfolioGroup, PortfolioReport};
