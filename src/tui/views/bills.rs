//! Bills tab
//!
//! The bill schedule with urgency highlighting and the selection cursor.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::reports::BillScheduleReport;
use crate::tui::app::App;

/// Render the bills tab
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let report = BillScheduleReport::generate(app.store.bills(), app.today);

    // The list shows bills in seed order so the selection index matches the
    // store; the schedule report is only consulted per bill for urgency.
    let items: Vec<ListItem> = app
        .store
        .bills()
        .iter()
        .map(|bill| {
            let days = bill.days_until_due(app.today);
            let urgent = bill.is_urgent(app.today);

            let due = if days < 0 {
                format!("overdue {}d", -days)
            } else {
                format!("due in {}d", days)
            };

            let due_style = if urgent {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let auto = if bill.auto_debit {
                Span::styled("auto-debit", Style::default().fg(Color::Green))
            } else {
                Span::styled("manual", Style::default().fg(Color::DarkGray))
            };

            ListItem::new(Line::from(vec![
                Span::raw(format!("{} ", bill.category.icon())),
                Span::raw(format!("{:<16}", bill.name)),
                Span::raw(format!("{:>16}  ", bill.amount.to_string())),
                Span::styled(format!("{:<12}", due), due_style),
                auto,
            ]))
        })
        .collect();

    let title = format!(
        " Bills — total due {} ({} urgent) ",
        report.total_due, report.urgent_count
    );

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.bills_index));
    frame.render_stateful_widget(list, area, &mut state);
}
