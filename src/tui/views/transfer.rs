//! Transfer tab
//!
//! Saved and recent recipients in one selectable list with masked account
//! numbers; Enter opens the simulated-transfer confirmation.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::display::mask_account_number;
use crate::models::Contact;
use crate::tui::app::App;

fn contact_item<'a>(contact: &'a Contact, section: &'static str) -> ListItem<'a> {
    ListItem::new(Line::from(vec![
        Span::raw(format!("{:<20}", contact.name)),
        Span::styled(
            format!("{:<8}", contact.bank),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("{:<12}", mask_account_number(&contact.account_number)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(section, Style::default().fg(Color::DarkGray)),
    ]))
}

/// Render the transfer tab
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .store
        .saved_contacts()
        .iter()
        .map(|c| contact_item(c, "saved"))
        .chain(
            app.store
                .recent_contacts()
                .iter()
                .map(|c| contact_item(c, "recent")),
        )
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Transfer — Enter to send (simulated) "),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.transfer_index));
    frame.render_stateful_widget(list, area, &mut state);
}
