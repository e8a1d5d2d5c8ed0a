//! TUI Views module
//!
//! The tab bar, one view per tab, and the status bar.

pub mod bills;
pub mod history;
pub mod home;
pub mod notifications;
pub mod status_bar;
pub mod transfer;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

use super::app::{ActiveDialog, ActiveTab, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    render_tab_bar(frame, app, layout.tab_bar);

    match app.active_tab {
        ActiveTab::Home => home::render(frame, app, layout.main),
        ActiveTab::History => history::render(frame, app, layout.main),
        ActiveTab::Transfer => transfer::render(frame, app, layout.main),
        ActiveTab::Bills => bills::render(frame, app, layout.main),
        ActiveTab::Notifications => notifications::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    match &app.active_dialog {
        ActiveDialog::Confirm { message, .. } => {
            let message = message.clone();
            dialogs::confirm::render(frame, &message);
        }
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::None => {}
    }
}

/// Render the tab bar, with the unread badge on the inbox tab
fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let unread = app.store.unread_count();

    let titles: Vec<Line> = ActiveTab::all()
        .iter()
        .map(|tab| {
            if *tab == ActiveTab::Notifications && unread > 0 {
                Line::from(format!("{} ({})", tab.label(), unread))
            } else {
                Line::from(tab.label())
            }
        })
        .collect();

    let selected = ActiveTab::all()
        .iter()
        .position(|t| *t == app.active_tab)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .block(Block::default().borders(Borders::ALL).title(" saku "))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}
