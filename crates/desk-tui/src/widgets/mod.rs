//! View rendering, one module per page plus the shared chrome.

pub mod auth;
pub mod dashboard;
pub mod detail;
pub mod footer;
pub mod header;
pub mod help;
pub mod tickets;

use crate::state::AppState;
use desk_core::Route;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Renders the whole frame: header, the route's view, footer, and the
/// help overlay on top when open.
pub fn render(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(f.area());

    f.render_widget(header::render(state), chunks[0]);

    match state.route {
        Route::Login | Route::Register => auth::render(f, state, chunks[1]),
        Route::Tickets => tickets::render(f, state, chunks[1]),
        Route::TicketDetail(_) => detail::render(f, state, chunks[1]),
        Route::Dashboard => dashboard::render(f, state, chunks[1]),
    }

    f.render_widget(footer::render(state), chunks[2]);

    if state.show_help {
        help::render(f, f.area());
    }
}
