//! Top navigation bar: app title, current view, identity.

use crate::state::AppState;
use desk_core::Route;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct Header<'a> {
    state: &'a AppState,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let block = Block::default().borders(Borders::BOTTOM);
        let inner = block.inner(area);
        block.render(area, buf);

        let view_name = match self.state.route {
            Route::Login => "Login",
            Route::Register => "Create account",
            Route::Tickets => "My tickets",
            Route::TicketDetail(_) => "Ticket",
            Route::Dashboard => "Admin Dashboard",
        };

        let left = Line::from(vec![
            Span::styled(
                " AI Support Desk ",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("│ ", Style::default().fg(Color::DarkGray)),
            Span::styled(view_name, Style::default().fg(Color::Cyan)),
        ]);

        // Identity on the right, with a staff marker when applicable.
        let mut right_spans = Vec::new();
        if let Some(username) = self.state.session.username() {
            if self.state.session.is_staff() {
                right_spans.push(Span::styled(
                    "staff ",
                    Style::default().fg(Color::Yellow),
                ));
            }
            right_spans.push(Span::styled(
                format!("@{username} "),
                Style::default().fg(Color::Green),
            ));
        }
        let right = Line::from(right_spans);
        let right_width = right.width() as u16;

        let chunks = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(right_width),
        ])
        .split(inner);

        Paragraph::new(left).render(chunks[0], buf);
        Paragraph::new(right).render(chunks[1], buf);
    }
}

/// Convenience function for rendering the header.
pub fn render(state: &AppState) -> Header<'_> {
    Header::new(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use desk_core::Session;
    use desk_proto::Me;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_string(state: &AppState) -> String {
        let backend = TestBackend::new(80, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(render(state), f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn header_shows_username_and_staff_marker() {
        let me = Me {
            id: 1,
            username: "admin".to_string(),
            is_staff: true,
        };
        let (state, _) = AppState::new(Session::authenticated(me));
        let text = render_to_string(&state);
        assert!(text.contains("@admin"), "got: {text}");
        assert!(text.contains("staff"), "got: {text}");
        assert!(text.contains("My tickets"), "got: {text}");
    }

    #[test]
    fn header_omits_identity_when_anonymous() {
        let (state, _) = AppState::new(Session::anonymous());
        let text = render_to_string(&state);
        assert!(!text.contains('@'), "got: {text}");
        assert!(text.contains("Login"), "got: {text}");
    }
}
