//! Help overlay widget.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Renders the key binding reference centered on screen.
pub fn render(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .style(Style::default().bg(Color::Black).fg(Color::White));

    let help_text = vec![
        Line::from(Span::styled("Tickets:", Style::default().fg(Color::Yellow))),
        entry("j/k", "Select next/previous ticket"),
        entry("Enter", "Open selected ticket"),
        entry("/", "Search title and description"),
        entry("s", "Cycle status filter"),
        entry("o", "Toggle sort order"),
        entry("n", "New ticket form"),
        entry("r", "Refresh"),
        Line::from(""),
        Line::from(Span::styled("Detail:", Style::default().fg(Color::Yellow))),
        entry("c", "Write a comment"),
        entry("i", "Mark in progress (staff)"),
        entry("R", "Mark resolved (staff)"),
        entry("Esc", "Back to the list"),
        Line::from(""),
        Line::from(Span::styled("Other:", Style::default().fg(Color::Yellow))),
        entry("d", "Dashboard (staff)"),
        entry("Ctrl-l", "Log out"),
        entry("q", "Quit"),
        entry("?", "Show this help"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc to dismiss",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .alignment(Alignment::Left);

    let popup_area = centered_rect(50, 70, area);
    f.render_widget(Clear, popup_area);
    f.render_widget(paragraph, popup_area);
}

fn entry(key: &'static str, what: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<7}"), Style::default().fg(Color::Cyan)),
        Span::raw(what),
    ])
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
