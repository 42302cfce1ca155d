//! Login and register forms.

use crate::state::{AppState, AuthField};
use desk_core::Route;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Renders the centered auth card for the login or register view.
pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let is_login = state.route == Route::Login;
    let title = if is_login { " Login " } else { " Create account " };
    let subtitle = if is_login {
        "Use your account to access tickets."
    } else {
        "Password must be at least 6 characters."
    };

    let card = centered_card(area);
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(card);
    f.render_widget(block, card);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // subtitle
            Constraint::Length(1), // error
            Constraint::Length(3), // username
            Constraint::Length(3), // password
            Constraint::Length(1), // submit hint
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(Span::styled(subtitle, Style::default().fg(Color::DarkGray))),
        rows[0],
    );

    if let Some(error) = &state.auth_form.error {
        f.render_widget(
            Paragraph::new(Span::styled(
                error.as_str(),
                Style::default().fg(Color::Red),
            )),
            rows[1],
        );
    }

    field(
        f,
        rows[2],
        "Username",
        &state.auth_form.username,
        state.auth_form.field == AuthField::Username,
        false,
    );
    field(
        f,
        rows[3],
        "Password",
        &state.auth_form.password,
        state.auth_form.field == AuthField::Password,
        true,
    );

    let submit = if state.auth_form.in_flight {
        Span::styled("Signing in...", Style::default().fg(Color::Yellow))
    } else if is_login {
        Span::styled(
            "Enter: sign in · Ctrl-r: create an account",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled(
            "Enter: create account · Ctrl-r: back to login",
            Style::default().fg(Color::DarkGray),
        )
    };
    f.render_widget(Paragraph::new(submit), rows[4]);
}

fn field(f: &mut Frame, area: Rect, label: &str, value: &str, focused: bool, mask: bool) {
    let style = if focused {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default().title(label).borders(Borders::ALL).style(style);
    let shown = if mask {
        "*".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    let mut spans = vec![Span::raw(shown)];
    if focused {
        spans.push(Span::styled("\u{2588}", Style::default().fg(Color::White)));
    }
    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn centered_card(area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(11),
            Constraint::Fill(1),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(46),
            Constraint::Fill(1),
        ])
        .split(vertical[1])[1]
}
