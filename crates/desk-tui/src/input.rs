//! Key-to-action mapping, contextual on the current view and focus.
//!
//! Views with text fields consume printable characters while a field is
//! focused; list-style views use single-key commands. The mapping itself
//! is pure so every binding can be asserted in isolation.

use crate::state::{AppState, TicketsFocus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use desk_core::Route;

/// Actions that can be triggered by key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Exit the application
    Quit,
    /// Show help overlay
    Help,
    /// Dismiss help overlay
    DismissOverlay,
    /// Navigate to a route (subject to the guard)
    Navigate(Route),
    /// Leave a subview and return to the ticket list
    Back,
    /// Re-fetch the current view's data
    Refresh,
    /// Clear tokens and session
    Logout,
    /// Toggle between the login and register views
    SwitchAuthView,
    /// Focus the search box
    FocusSearch,
    /// Focus the create-ticket form
    FocusForm,
    /// Return focus to the ticket list
    FocusList,
    /// Cycle the status filter (ALL -> OPEN -> IN_PROGRESS -> RESOLVED)
    CycleStatus,
    /// Toggle sort order (NEWEST/OLDEST)
    ToggleSort,
    /// Move the list selection down
    SelectNext,
    /// Move the list selection up
    SelectPrev,
    /// Open the selected ticket
    OpenSelected,
    /// Move to the next text field in the focused form
    NextField,
    /// Append a character to the focused text buffer
    Input(char),
    /// Delete the last character of the focused text buffer
    Backspace,
    /// Submit the focused form
    Submit,
    /// Focus the comment input on the detail view
    FocusComment,
    /// Staff action: set status to IN_PROGRESS
    MarkInProgress,
    /// Staff action: set status to RESOLVED
    MarkResolved,
    /// Key not mapped to any action
    None,
}

/// Maps a key event to its action, given the current state.
pub fn map_key(state: &AppState, key: KeyEvent) -> Action {
    // Help overlay swallows everything.
    if state.show_help {
        return Action::DismissOverlay;
    }

    // Control chords work everywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Action::Quit,
            KeyCode::Char('l') => Action::Logout,
            KeyCode::Char('r') if matches!(state.route, Route::Login | Route::Register) => {
                Action::SwitchAuthView
            }
            _ => Action::None,
        };
    }

    match state.route {
        Route::Login | Route::Register => auth_key(key),
        Route::Tickets => tickets_key(state, key),
        Route::TicketDetail(_) => detail_key(state, key),
        Route::Dashboard => dashboard_key(key),
    }
}

fn auth_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Tab => Action::NextField,
        KeyCode::Enter => Action::Submit,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Esc => Action::Quit,
        KeyCode::Char(c) => Action::Input(c),
        _ => Action::None,
    }
}

fn tickets_key(state: &AppState, key: KeyEvent) -> Action {
    match state.focus {
        TicketsFocus::Search => match key.code {
            KeyCode::Esc | KeyCode::Enter => Action::FocusList,
            KeyCode::Backspace => Action::Backspace,
            KeyCode::Char(c) => Action::Input(c),
            _ => Action::None,
        },
        TicketsFocus::Form => match key.code {
            KeyCode::Esc => Action::FocusList,
            KeyCode::Tab => Action::NextField,
            KeyCode::Enter => Action::Submit,
            KeyCode::Backspace => Action::Backspace,
            KeyCode::Char(c) => Action::Input(c),
            _ => Action::None,
        },
        TicketsFocus::List => match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('?') => Action::Help,
            KeyCode::Char('/') => Action::FocusSearch,
            KeyCode::Char('n') => Action::FocusForm,
            KeyCode::Char('s') => Action::CycleStatus,
            KeyCode::Char('o') => Action::ToggleSort,
            KeyCode::Char('r') => Action::Refresh,
            KeyCode::Char('d') => Action::Navigate(Route::Dashboard),
            KeyCode::Down | KeyCode::Char('j') => Action::SelectNext,
            KeyCode::Up | KeyCode::Char('k') => Action::SelectPrev,
            KeyCode::Enter => Action::OpenSelected,
            _ => Action::None,
        },
    }
}

fn detail_key(state: &AppState, key: KeyEvent) -> Action {
    if state.detail.comment_focused {
        return match key.code {
            KeyCode::Esc => Action::FocusList,
            KeyCode::Enter => Action::Submit,
            KeyCode::Backspace => Action::Backspace,
            KeyCode::Char(c) => Action::Input(c),
            _ => Action::None,
        };
    }
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('?') => Action::Help,
        KeyCode::Esc | KeyCode::Char('h') => Action::Back,
        KeyCode::Char('r') => Action::Refresh,
        KeyCode::Char('c') => Action::FocusComment,
        KeyCode::Char('i') => Action::MarkInProgress,
        KeyCode::Char('R') => Action::MarkResolved,
        _ => Action::None,
    }
}

fn dashboard_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('?') => Action::Help,
        KeyCode::Esc | KeyCode::Char('h') => Action::Back,
        KeyCode::Char('r') => Action::Refresh,
        _ => Action::None,
    }
}
