//! History tab
//!
//! Income/expense header plus the filtered activity feed.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Direction as TxnDirection;
use crate::reports::CashFlowSummary;
use crate::store::TransactionFilter;
use crate::tui::app::App;

/// Render the history tab
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Cash flow header
            Constraint::Min(3),    // Transaction list
        ])
        .split(area);

    render_cash_flow(frame, app, chunks[0]);
    render_transactions(frame, app, chunks[1]);
}

fn render_cash_flow(frame: &mut Frame, app: &App, area: Rect) {
    let summary = CashFlowSummary::compute(app.store.transactions());

    let lines = vec![
        Line::from(vec![
            Span::raw("Income  "),
            Span::styled(
                format!("+{}", summary.total_income),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::raw("Expense "),
            Span::styled(
                format!("-{}", summary.total_expense),
                Style::default().fg(Color::Red),
            ),
        ]),
    ];

    let header = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" This Period "),
    );
    frame.render_widget(header, area);
}

fn render_transactions(frame: &mut Frame, app: &App, area: Rect) {
    let transactions = app.store.transactions_filtered(app.history_filter);

    let lines: Vec<Line> = transactions
        .iter()
        .map(|txn| {
            let (sign, color) = match txn.direction {
                TxnDirection::Credit => ("+", Color::Green),
                TxnDirection::Debit => ("-", Color::Red),
            };

            Line::from(vec![
                Span::styled(
                    format!("{} ", txn.date.format("%m-%d")),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(format!("{:<38}", txn.description)),
                Span::styled(
                    format!("{}{}", sign, txn.amount),
                    Style::default().fg(color),
                ),
            ])
        })
        .collect();

    // Filter tabs in the block title, active one marked
    let tabs: Vec<String> = TransactionFilter::all()
        .iter()
        .map(|f| {
            if *f == app.history_filter {
                format!("[{}]", f)
            } else {
                f.to_string()
            }
        })
        .collect();

    let list = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} (f to cycle) ", tabs.join(" ")))
            .title_style(Style::default().add_modifier(Modifier::BOLD)),
    );
    frame.render_widget(list, area);
}
