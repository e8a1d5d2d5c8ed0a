//! Home tab
//!
//! Greeting, headline balance card with the hide toggle, the six-month
//! balance sparkline, and the most recent transactions.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Sparkline},
    Frame,
};

use crate::display::HIDDEN_BALANCE;
use crate::models::Direction as TxnDirection;
use crate::tui::app::App;

/// Render the home tab
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Balance card
            Constraint::Length(4), // Balance history sparkline
            Constraint::Min(3),    // Recent transactions
        ])
        .split(area);

    render_balance_card(frame, app, chunks[0]);
    render_history_chart(frame, app, chunks[1]);
    render_recent_transactions(frame, app, chunks[2]);
}

fn render_balance_card(frame: &mut Frame, app: &App, area: Rect) {
    let balance = if app.hide_balances {
        HIDDEN_BALANCE.to_string()
    } else {
        app.store.headline_balance().to_string()
    };

    let lines = vec![
        Line::from(format!("Hello, {}", app.store.display_name())),
        Line::from(Span::styled(
            balance,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "press h to show/hide",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Total Balance "),
    );
    frame.render_widget(card, area);
}

fn render_history_chart(frame: &mut Frame, app: &App, area: Rect) {
    let history = &app.store.data().balance_history;

    // Scale to millions so the u64 bars stay proportional
    let data: Vec<u64> = history
        .iter()
        .map(|point| (point.amount.units() / 1_000_000).max(0) as u64)
        .collect();

    let months: Vec<String> = history.iter().map(|p| p.month.clone()).collect();

    let sparkline = Sparkline::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Balance {} ", months.join(" "))),
        )
        .style(Style::default().fg(Color::Cyan))
        .data(&data);

    frame.render_widget(sparkline, area);
}

fn render_recent_transactions(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .store
        .transactions()
        .iter()
        .take(5)
        .map(|txn| {
            let (sign, color) = match txn.direction {
                TxnDirection::Credit => ("+", Color::Green),
                TxnDirection::Debit => ("-", Color::Red),
            };

            let amount = if app.hide_balances {
                HIDDEN_BALANCE.to_string()
            } else {
                format!("{}{}", sign, txn.amount)
            };

            Line::from(vec![
                Span::raw(format!("{} ", txn.category.icon())),
                Span::raw(format!("{:<38}", txn.description)),
                Span::styled(amount, Style::default().fg(color)),
            ])
        })
        .collect();

    let list = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Recent Activity "),
    );
    frame.render_widget(list, area);
}
