//! Contextual key hints at the bottom of the screen.

use crate::state::{AppState, TicketsFocus};
use desk_core::Route;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct Footer<'a> {
    state: &'a AppState,
}

impl<'a> Footer<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static str {
        match self.state.route {
            Route::Login => "Enter submit · Tab switch field · Ctrl-r register · Esc quit",
            Route::Register => "Enter submit · Tab switch field · Ctrl-r login · Esc quit",
            Route::Tickets => match self.state.focus {
                TicketsFocus::List => {
                    "j/k select · Enter open · / search · s status · o sort · n new · r refresh · d dashboard · Ctrl-l logout · ? help · q quit"
                }
                TicketsFocus::Search => "type to search · Enter/Esc done",
                TicketsFocus::Form => "Tab switch field · Enter submit · Esc cancel",
            },
            Route::TicketDetail(_) => {
                if self.state.detail.comment_focused {
                    "type comment · Enter send · Esc cancel"
                } else if self.state.session.is_staff() {
                    "c comment · i in progress · R resolved · r refresh · Esc back · q quit"
                } else {
                    "c comment · r refresh · Esc back · q quit"
                }
            }
            Route::Dashboard => "r refresh · Esc back · q quit",
        }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let block = Block::default().borders(Borders::TOP);
        let inner = block.inner(area);
        block.render(area, buf);

        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.hints(), Style::default().fg(Color::DarkGray)),
        ]);
        Paragraph::new(line).render(inner, buf);
    }
}

/// Convenience function for rendering the footer.
pub fn render(state: &AppState) -> Footer<'_> {
    Footer::new(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use desk_core::Session;
    use desk_proto::Me;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_string(state: &AppState) -> String {
        let backend = TestBackend::new(120, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(render(state), f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn list_footer_names_the_list_keys() {
        let me = Me {
            id: 1,
            username: "sam".to_string(),
            is_staff: false,
        };
        let (state, _) = AppState::new(Session::authenticated(me));
        let text = render_to_string(&state);
        assert!(text.contains("Enter open"), "got: {text}");
        assert!(text.contains("d dashboard"), "got: {text}");
    }

    #[test]
    fn staff_detail_footer_includes_status_actions() {
        let me = Me {
            id: 1,
            username: "admin".to_string(),
            is_staff: true,
        };
        let (mut state, _) = AppState::new(Session::authenticated(me));
        state.navigate(Route::TicketDetail(1));
        let text = render_to_string(&state);
        assert!(text.contains("i in progress"), "got: {text}");
        assert!(text.contains("R resolved"), "got: {text}");
    }

    #[test]
    fn non_staff_detail_footer_omits_status_actions() {
        let me = Me {
            id: 1,
            username: "sam".to_string(),
            is_staff: false,
        };
        let (mut state, _) = AppState::new(Session::authenticated(me));
        state.navigate(Route::TicketDetail(1));
        let text = render_to_string(&state);
        assert!(!text.contains("i in progress"), "got: {text}");
    }
}
