//! Help overlay with key bindings

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::layout::centered_rect_fixed;

fn binding(key: &'static str, action: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<10}", key), Style::default().fg(Color::Cyan)),
        Span::raw(action),
    ])
}

/// Render the help overlay
pub fn render(frame: &mut Frame) {
    let area = centered_rect_fixed(48, 16, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Keys ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines = vec![
        binding("Tab / 1-5", "Switch tab"),
        binding("j/k or ↑↓", "Move selection"),
        binding("h", "Hide/show balances (Home)"),
        binding("f", "Cycle filter (History)"),
        binding("Enter", "Pay bill / transfer / mark read"),
        binding("a", "Toggle auto-debit (Bills)"),
        binding("r", "Mark all read (Inbox)"),
        binding("?", "This overlay"),
        binding("q / Esc", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "  Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
