//! Notifications tab
//!
//! Inbox list with unread markers; Enter marks the selected entry read.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::tui::app::App;

/// Render the notifications tab
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .store
        .notifications()
        .iter()
        .map(|notification| {
            let marker = if notification.read { "  " } else { "● " };

            let title_style = if notification.read {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };

            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Cyan)),
                    Span::raw(format!("{} ", notification.kind.icon())),
                    Span::styled(format!("{:<24}", notification.title), title_style),
                    Span::styled(
                        notification.date.format("%Y-%m-%d").to_string(),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("  {}", notification.message),
                    Style::default().fg(Color::Gray),
                )),
            ])
        })
        .collect();

    let title = format!(" Inbox — {} unread (r: mark all read) ", app.store.unread_count());

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.notifications_index));
    frame.render_stateful_widget(list, area, &mut state);
}
