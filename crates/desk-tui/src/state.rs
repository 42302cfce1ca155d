//! State management for the TUI.
//!
//! One [`AppState`] owns everything the views render. Input actions and
//! completed network calls both funnel through it; the return values name
//! the side effects (spawned requests) the app loop must perform, so the
//! state itself stays synchronous and testable.

use desk_api::ApiError;
use desk_core::{Criteria, Decision, Route, Session, guard, project};
use desk_proto::{AnalyticsSummary, Comment, Ticket, TicketStatus};

// Inline messages, per view. Raw error detail goes to the log, not the UI.
pub const ERR_LOGIN: &str = "Invalid username or password.";
pub const ERR_SIGNUP: &str = "Signup failed. Username may already exist.";
pub const ERR_FILL_FIELDS: &str = "Please fill title and description.";
pub const ERR_CREATE_TICKET: &str = "Could not create ticket.";
pub const ERR_ADD_COMMENT: &str = "Could not add comment.";
pub const ERR_LOAD_TICKETS: &str = "Could not load tickets.";
pub const ERR_LOAD_TICKET: &str = "Could not load ticket.";
pub const ERR_UPDATE_TICKET: &str = "Could not update ticket.";
pub const ERR_LOAD_ANALYTICS: &str = "Could not load analytics.";

/// A read that the app loop must spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fetch {
    Tickets,
    Detail(i64),
    Dashboard,
}

/// A side effect requested by state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Fetch(Fetch),
    Login { username: String, password: String },
    Register { username: String, password: String },
    CreateTicket { title: String, description: String },
    AddComment { ticket: i64, message: String },
    UpdateStatus { ticket: i64, status: TicketStatus },
    Logout,
}

/// Which auth flow produced a completed login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthKind {
    Login,
    Register,
}

/// Completed network calls, posted back to the event loop.
#[derive(Debug)]
pub enum Msg {
    AuthDone {
        kind: AuthKind,
        result: Result<Session, ApiError>,
    },
    TicketsLoaded {
        generation: u64,
        result: Result<Vec<Ticket>, ApiError>,
    },
    DetailLoaded {
        generation: u64,
        result: Result<(Ticket, Vec<Comment>), ApiError>,
    },
    SummaryLoaded {
        generation: u64,
        result: Result<AnalyticsSummary, ApiError>,
    },
    TicketCreated(Result<Ticket, ApiError>),
    CommentAdded(Result<Comment, ApiError>),
    StatusUpdated(Result<Ticket, ApiError>),
}

/// Input focus inside the tickets view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TicketsFocus {
    #[default]
    List,
    Search,
    Form,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthField {
    #[default]
    Username,
    Password,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Title,
    Description,
}

/// Shared login/register form buffer.
#[derive(Debug, Default)]
pub struct AuthForm {
    pub username: String,
    pub password: String,
    pub field: AuthField,
    pub error: Option<String>,
    pub in_flight: bool,
}

impl AuthForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn active_buffer(&mut self) -> &mut String {
        match self.field {
            AuthField::Username => &mut self.username,
            AuthField::Password => &mut self.password,
        }
    }
}

/// Create-ticket form on the tickets view.
#[derive(Debug, Default)]
pub struct NewTicketForm {
    pub title: String,
    pub description: String,
    pub field: FormField,
    pub error: Option<String>,
    pub in_flight: bool,
}

impl NewTicketForm {
    pub fn active_buffer(&mut self) -> &mut String {
        match self.field {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
        }
    }
}

/// Everything the ticket detail view renders.
#[derive(Debug, Default)]
pub struct DetailState {
    pub ticket: Option<Ticket>,
    pub comments: Vec<Comment>,
    pub loading: bool,
    pub error: Option<String>,
    pub comment_input: String,
    pub comment_focused: bool,
    pub comment_in_flight: bool,
    pub action_in_flight: bool,
}

impl DetailState {
    fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }
}

/// Observable state for the whole application.
pub struct AppState {
    pub session: Session,
    pub route: Route,
    /// Where to land after a successful login (retained across the
    /// login redirect).
    pub return_to: Option<Route>,
    /// Bumped on every navigation; fetch completions carrying an older
    /// generation are dropped.
    pub generation: u64,

    pub auth_form: AuthForm,

    // Tickets view: the raw snapshot plus ephemeral list controls. The
    // visible list is always re-derived via `visible_tickets`.
    pub tickets: Vec<Ticket>,
    pub tickets_loading: bool,
    pub list_error: Option<String>,
    pub criteria: Criteria,
    pub selected: usize,
    pub focus: TicketsFocus,
    pub new_ticket: NewTicketForm,

    pub detail: DetailState,

    pub summary: Option<AnalyticsSummary>,
    pub summary_loading: bool,
    pub dashboard_error: Option<String>,

    pub show_help: bool,
    pub should_quit: bool,
}

impl AppState {
    /// Creates state for an already-refreshed session and navigates to the
    /// default landing route (the guard may turn that into the login view).
    /// Returns the initial fetch, if any.
    pub fn new(session: Session) -> (Self, Option<Fetch>) {
        let mut state = Self {
            session,
            route: Route::Login,
            return_to: None,
            generation: 0,
            auth_form: AuthForm::default(),
            tickets: Vec::new(),
            tickets_loading: false,
            list_error: None,
            criteria: Criteria::default(),
            selected: 0,
            focus: TicketsFocus::default(),
            new_ticket: NewTicketForm::default(),
            detail: DetailState::default(),
            summary: None,
            summary_loading: false,
            dashboard_error: None,
            show_help: false,
            should_quit: false,
        };
        let fetch = state.navigate(Route::fallback());
        (state, fetch)
    }

    /// The filtered/sorted list the tickets view shows. Recomputed from
    /// the raw snapshot on demand; the snapshot is never mutated.
    pub fn visible_tickets(&self) -> Vec<Ticket> {
        project(&self.tickets, &self.criteria)
    }

    /// Guard and perform a navigation request. Sets the per-view loading
    /// state and returns the fetch the new view needs.
    pub fn navigate(&mut self, requested: Route) -> Option<Fetch> {
        let target = match guard(&self.session, requested) {
            Decision::Render(route) => route,
            Decision::RedirectToLogin { return_to } => {
                self.return_to = Some(return_to);
                Route::Login
            }
            Decision::Redirect(route) => route,
        };

        self.route = target;
        self.generation += 1;
        self.show_help = false;

        match target {
            Route::Login | Route::Register => {
                self.auth_form.clear();
                None
            }
            Route::Tickets => {
                self.tickets_loading = true;
                self.list_error = None;
                self.focus = TicketsFocus::List;
                Some(Fetch::Tickets)
            }
            Route::TicketDetail(id) => {
                self.detail = DetailState::loading();
                Some(Fetch::Detail(id))
            }
            Route::Dashboard => {
                self.summary_loading = true;
                self.dashboard_error = None;
                Some(Fetch::Dashboard)
            }
        }
    }

    /// Replace the session and re-guard the current route. Used after
    /// logout and after any 401: a protected view redirects immediately.
    pub fn set_session(&mut self, session: Session) -> Option<Fetch> {
        self.session = session;
        self.navigate(self.route)
    }

    fn auth_failed(&mut self) -> Option<Fetch> {
        self.set_session(Session::anonymous())
    }

    /// Applies a completed network call. Completions from a previous
    /// generation (the user navigated away) are dropped without effect.
    pub fn apply_msg(&mut self, msg: Msg) -> Option<Fetch> {
        match msg {
            Msg::AuthDone { kind, result } => {
                self.auth_form.in_flight = false;
                match result {
                    Ok(session) if session.is_authenticated() => {
                        self.session = session;
                        self.auth_form.clear();
                        let target = self.return_to.take().unwrap_or_else(Route::fallback);
                        self.navigate(target)
                    }
                    Ok(_) | Err(_) => {
                        self.auth_form.error = Some(
                            match kind {
                                AuthKind::Login => ERR_LOGIN,
                                AuthKind::Register => ERR_SIGNUP,
                            }
                            .to_string(),
                        );
                        None
                    }
                }
            }

            Msg::TicketsLoaded { generation, result } => {
                if generation != self.generation || self.route != Route::Tickets {
                    return None;
                }
                self.tickets_loading = false;
                match result {
                    Ok(tickets) => {
                        // Replaced atomically, never merged in place.
                        self.tickets = tickets;
                        self.clamp_selection();
                        None
                    }
                    Err(err) if err.is_auth() => self.auth_failed(),
                    Err(_) => {
                        self.list_error = Some(ERR_LOAD_TICKETS.to_string());
                        None
                    }
                }
            }

            Msg::DetailLoaded { generation, result } => {
                if generation != self.generation
                    || !matches!(self.route, Route::TicketDetail(_))
                {
                    return None;
                }
                self.detail.loading = false;
                match result {
                    Ok((ticket, comments)) => {
                        self.detail.ticket = Some(ticket);
                        self.detail.comments = comments;
                        None
                    }
                    Err(err) if err.is_auth() => self.auth_failed(),
                    Err(_) => {
                        self.detail.error = Some(ERR_LOAD_TICKET.to_string());
                        None
                    }
                }
            }

            Msg::SummaryLoaded { generation, result } => {
                if generation != self.generation || self.route != Route::Dashboard {
                    return None;
                }
                self.summary_loading = false;
                match result {
                    Ok(summary) => {
                        self.summary = Some(summary);
                        None
                    }
                    Err(err) if err.is_auth() => self.auth_failed(),
                    Err(_) => {
                        self.dashboard_error = Some(ERR_LOAD_ANALYTICS.to_string());
                        None
                    }
                }
            }

            Msg::TicketCreated(result) => {
                self.new_ticket.in_flight = false;
                match result {
                    Ok(_) => {
                        self.new_ticket = NewTicketForm::default();
                        self.focus = TicketsFocus::List;
                        if self.route == Route::Tickets {
                            self.navigate(Route::Tickets)
                        } else {
                            None
                        }
                    }
                    Err(err) if err.is_auth() => self.auth_failed(),
                    Err(_) => {
                        self.new_ticket.error = Some(ERR_CREATE_TICKET.to_string());
                        None
                    }
                }
            }

            Msg::CommentAdded(result) => {
                self.detail.comment_in_flight = false;
                match result {
                    Ok(comment) => {
                        self.detail.comment_input.clear();
                        if self.route == Route::TicketDetail(comment.ticket) {
                            self.navigate(self.route)
                        } else {
                            None
                        }
                    }
                    Err(err) if err.is_auth() => self.auth_failed(),
                    Err(_) => {
                        self.detail.error = Some(ERR_ADD_COMMENT.to_string());
                        None
                    }
                }
            }

            Msg::StatusUpdated(result) => {
                self.detail.action_in_flight = false;
                match result {
                    Ok(ticket) => {
                        if self.route == Route::TicketDetail(ticket.id) {
                            self.navigate(self.route)
                        } else {
                            None
                        }
                    }
                    Err(err) if err.is_auth() => self.auth_failed(),
                    Err(_) => {
                        self.detail.error = Some(ERR_UPDATE_TICKET.to_string());
                        None
                    }
                }
            }
        }
    }

    /// Applies a user input action and returns the side effects to run.
    pub fn apply_action(&mut self, action: crate::input::Action) -> Vec<Effect> {
        use crate::input::Action;

        match action {
            Action::None => Vec::new(),
            Action::Quit => {
                self.should_quit = true;
                Vec::new()
            }
            Action::Help => {
                self.show_help = true;
                Vec::new()
            }
            Action::DismissOverlay => {
                self.show_help = false;
                Vec::new()
            }

            Action::Navigate(route) => self.navigate(route).into_iter().map(Effect::Fetch).collect(),
            Action::Back => self
                .navigate(Route::Tickets)
                .into_iter()
                .map(Effect::Fetch)
                .collect(),
            Action::Refresh => self
                .navigate(self.route)
                .into_iter()
                .map(Effect::Fetch)
                .collect(),
            Action::Logout => vec![Effect::Logout],

            Action::SwitchAuthView => {
                let target = if self.route == Route::Login {
                    Route::Register
                } else {
                    Route::Login
                };
                self.navigate(target).into_iter().map(Effect::Fetch).collect()
            }

            Action::FocusSearch => {
                self.focus = TicketsFocus::Search;
                Vec::new()
            }
            Action::FocusForm => {
                self.focus = TicketsFocus::Form;
                Vec::new()
            }
            Action::FocusList => {
                self.focus = TicketsFocus::List;
                self.detail.comment_focused = false;
                Vec::new()
            }
            Action::CycleStatus => {
                self.criteria.status = self.criteria.status.next();
                self.selected = 0;
                Vec::new()
            }
            Action::ToggleSort => {
                self.criteria.sort = self.criteria.sort.toggle();
                self.selected = 0;
                Vec::new()
            }

            Action::SelectNext => {
                let len = self.visible_tickets().len();
                if len > 0 && self.selected + 1 < len {
                    self.selected += 1;
                }
                Vec::new()
            }
            Action::SelectPrev => {
                self.selected = self.selected.saturating_sub(1);
                Vec::new()
            }
            Action::OpenSelected => {
                let visible = self.visible_tickets();
                match visible.get(self.selected) {
                    Some(ticket) => self
                        .navigate(Route::TicketDetail(ticket.id))
                        .into_iter()
                        .map(Effect::Fetch)
                        .collect(),
                    None => Vec::new(),
                }
            }

            Action::NextField => {
                match self.route {
                    Route::Login | Route::Register => {
                        self.auth_form.field = match self.auth_form.field {
                            AuthField::Username => AuthField::Password,
                            AuthField::Password => AuthField::Username,
                        };
                    }
                    Route::Tickets if self.focus == TicketsFocus::Form => {
                        self.new_ticket.field = match self.new_ticket.field {
                            FormField::Title => FormField::Description,
                            FormField::Description => FormField::Title,
                        };
                    }
                    _ => {}
                }
                Vec::new()
            }

            Action::Input(c) => {
                match self.route {
                    Route::Login | Route::Register => self.auth_form.active_buffer().push(c),
                    Route::Tickets => match self.focus {
                        TicketsFocus::Search => {
                            self.criteria.search.push(c);
                            self.selected = 0;
                        }
                        TicketsFocus::Form => self.new_ticket.active_buffer().push(c),
                        TicketsFocus::List => {}
                    },
                    Route::TicketDetail(_) if self.detail.comment_focused => {
                        self.detail.comment_input.push(c);
                    }
                    _ => {}
                }
                Vec::new()
            }
            Action::Backspace => {
                match self.route {
                    Route::Login | Route::Register => {
                        self.auth_form.active_buffer().pop();
                    }
                    Route::Tickets => match self.focus {
                        TicketsFocus::Search => {
                            self.criteria.search.pop();
                            self.selected = 0;
                        }
                        TicketsFocus::Form => {
                            self.new_ticket.active_buffer().pop();
                        }
                        TicketsFocus::List => {}
                    },
                    Route::TicketDetail(_) if self.detail.comment_focused => {
                        self.detail.comment_input.pop();
                    }
                    _ => {}
                }
                Vec::new()
            }

            Action::Submit => self.submit(),

            Action::FocusComment => {
                self.detail.comment_focused = true;
                Vec::new()
            }
            Action::MarkInProgress => self.update_status(TicketStatus::InProgress),
            Action::MarkResolved => self.update_status(TicketStatus::Resolved),
        }
    }

    /// Submit whatever the current view is editing. Each submit carries an
    /// in-flight guard: a second submit while one is pending is ignored.
    fn submit(&mut self) -> Vec<Effect> {
        match self.route {
            Route::Login | Route::Register => {
                if self.auth_form.in_flight {
                    return Vec::new();
                }
                self.auth_form.error = None;
                self.auth_form.in_flight = true;
                let username = self.auth_form.username.clone();
                let password = self.auth_form.password.clone();
                if self.route == Route::Login {
                    vec![Effect::Login { username, password }]
                } else {
                    vec![Effect::Register { username, password }]
                }
            }
            Route::Tickets if self.focus == TicketsFocus::Form => {
                if self.new_ticket.in_flight {
                    return Vec::new();
                }
                self.new_ticket.error = None;
                if self.new_ticket.title.trim().is_empty()
                    || self.new_ticket.description.trim().is_empty()
                {
                    self.new_ticket.error = Some(ERR_FILL_FIELDS.to_string());
                    return Vec::new();
                }
                self.new_ticket.in_flight = true;
                vec![Effect::CreateTicket {
                    title: self.new_ticket.title.clone(),
                    description: self.new_ticket.description.clone(),
                }]
            }
            Route::TicketDetail(id) if self.detail.comment_focused => {
                if self.detail.comment_in_flight
                    || self.detail.comment_input.trim().is_empty()
                {
                    return Vec::new();
                }
                self.detail.error = None;
                self.detail.comment_in_flight = true;
                vec![Effect::AddComment {
                    ticket: id,
                    message: self.detail.comment_input.clone(),
                }]
            }
            _ => Vec::new(),
        }
    }

    /// Staff-only status change from the detail view.
    fn update_status(&mut self, status: TicketStatus) -> Vec<Effect> {
        if !self.session.is_staff() || self.detail.action_in_flight {
            return Vec::new();
        }
        match self.route {
            Route::TicketDetail(id) => {
                self.detail.error = None;
                self.detail.action_in_flight = true;
                vec![Effect::UpdateStatus { ticket: id, status }]
            }
            _ => Vec::new(),
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_tickets().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Action;
    use chrono::{TimeZone, Utc};
    use desk_proto::{Me, Priority, Sentiment};

    fn me(is_staff: bool) -> Me {
        Me {
            id: 1,
            username: "sam".to_string(),
            is_staff,
        }
    }

    fn ticket(id: i64, status: TicketStatus, day: u32) -> Ticket {
        Ticket {
            id,
            title: format!("Ticket {id}"),
            description: "details".to_string(),
            status,
            category: "OTHER".to_string(),
            priority: Priority::Medium,
            sentiment: Sentiment::Unknown,
            ai_summary: String::new(),
            ai_suggested_reply: String::new(),
            ai_confidence: 0.0,
            created_by: None,
            assigned_to: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
            updated_at: None,
            resolved_at: None,
        }
    }

    #[test]
    fn anonymous_start_lands_on_login_with_return_to() {
        let (state, fetch) = AppState::new(Session::anonymous());
        assert_eq!(state.route, Route::Login);
        assert_eq!(state.return_to, Some(Route::Tickets));
        assert!(fetch.is_none());
    }

    #[test]
    fn authenticated_start_lands_on_tickets_and_fetches() {
        let (state, fetch) = AppState::new(Session::authenticated(me(false)));
        assert_eq!(state.route, Route::Tickets);
        assert!(state.tickets_loading);
        assert_eq!(fetch, Some(Fetch::Tickets));
    }

    #[test]
    fn successful_login_returns_to_retained_route() {
        let (mut state, _) = AppState::new(Session::anonymous());
        // User originally wanted the dashboard.
        state.navigate(Route::Dashboard);
        assert_eq!(state.route, Route::Login);
        assert_eq!(state.return_to, Some(Route::Dashboard));

        let fetch = state.apply_msg(Msg::AuthDone {
            kind: AuthKind::Login,
            result: Ok(Session::authenticated(me(true))),
        });
        assert_eq!(state.route, Route::Dashboard);
        assert_eq!(fetch, Some(Fetch::Dashboard));
        assert!(state.return_to.is_none());
    }

    #[test]
    fn failed_login_shows_inline_message_and_stays() {
        let (mut state, _) = AppState::new(Session::anonymous());
        state.apply_action(Action::Submit);
        assert!(state.auth_form.in_flight);

        let fetch = state.apply_msg(Msg::AuthDone {
            kind: AuthKind::Login,
            result: Err(ApiError::Auth("bad".to_string())),
        });
        assert!(fetch.is_none());
        assert_eq!(state.route, Route::Login);
        assert_eq!(state.auth_form.error.as_deref(), Some(ERR_LOGIN));
        assert!(!state.auth_form.in_flight);
    }

    #[test]
    fn stale_tickets_completion_is_dropped() {
        let (mut state, _) = AppState::new(Session::authenticated(me(false)));
        let old_generation = state.generation;
        // Navigate away before the fetch completes.
        state.navigate(Route::TicketDetail(1));

        let fetch = state.apply_msg(Msg::TicketsLoaded {
            generation: old_generation,
            result: Ok(vec![ticket(1, TicketStatus::Open, 1)]),
        });
        assert!(fetch.is_none());
        assert!(state.tickets.is_empty(), "stale result must be a no-op");
    }

    #[test]
    fn tickets_snapshot_replaced_atomically() {
        let (mut state, _) = AppState::new(Session::authenticated(me(false)));
        let fetch = state.apply_msg(Msg::TicketsLoaded {
            generation: state.generation,
            result: Ok(vec![
                ticket(1, TicketStatus::Open, 1),
                ticket(2, TicketStatus::Resolved, 2),
            ]),
        });
        assert!(fetch.is_none());
        assert!(!state.tickets_loading);
        assert_eq!(state.tickets.len(), 2);
    }

    #[test]
    fn auth_failure_on_fetch_clears_session_and_redirects() {
        let (mut state, _) = AppState::new(Session::authenticated(me(false)));
        let fetch = state.apply_msg(Msg::TicketsLoaded {
            generation: state.generation,
            result: Err(ApiError::Auth("expired".to_string())),
        });
        assert!(fetch.is_none());
        assert_eq!(state.route, Route::Login);
        assert!(!state.session.is_authenticated());
        assert_eq!(state.return_to, Some(Route::Tickets));
    }

    #[test]
    fn logout_then_staff_route_redirects_to_login() {
        let (mut state, _) = AppState::new(Session::authenticated(me(true)));
        state.navigate(Route::Dashboard);
        assert_eq!(state.route, Route::Dashboard);

        state.set_session(Session::anonymous());
        assert_eq!(state.route, Route::Login);
        assert_eq!(state.return_to, Some(Route::Dashboard));
    }

    #[test]
    fn non_staff_navigation_to_dashboard_lands_on_tickets() {
        let (mut state, _) = AppState::new(Session::authenticated(me(false)));
        let fetch = state.navigate(Route::Dashboard);
        assert_eq!(state.route, Route::Tickets);
        assert_eq!(fetch, Some(Fetch::Tickets));
    }

    #[test]
    fn empty_create_form_validates_before_any_request() {
        let (mut state, _) = AppState::new(Session::authenticated(me(false)));
        state.focus = TicketsFocus::Form;
        let effects = state.apply_action(Action::Submit);
        assert!(effects.is_empty(), "no request for empty form");
        assert_eq!(state.new_ticket.error.as_deref(), Some(ERR_FILL_FIELDS));
    }

    #[test]
    fn double_submit_is_ignored_while_in_flight() {
        let (mut state, _) = AppState::new(Session::authenticated(me(false)));
        state.focus = TicketsFocus::Form;
        state.new_ticket.title = "Payment failed".to_string();
        state.new_ticket.description = "during checkout".to_string();

        let first = state.apply_action(Action::Submit);
        assert_eq!(first.len(), 1);
        let second = state.apply_action(Action::Submit);
        assert!(second.is_empty(), "second submit must be ignored");
    }

    #[test]
    fn created_ticket_triggers_list_refresh() {
        let (mut state, _) = AppState::new(Session::authenticated(me(false)));
        state.focus = TicketsFocus::Form;
        state.new_ticket.title = "t".to_string();
        state.new_ticket.description = "d".to_string();
        state.apply_action(Action::Submit);

        let fetch = state.apply_msg(Msg::TicketCreated(Ok(ticket(9, TicketStatus::Open, 3))));
        assert_eq!(fetch, Some(Fetch::Tickets));
        assert!(state.new_ticket.title.is_empty());
    }

    #[test]
    fn failed_create_shows_generic_message() {
        let (mut state, _) = AppState::new(Session::authenticated(me(false)));
        state.focus = TicketsFocus::Form;
        state.new_ticket.in_flight = true;

        let fetch = state.apply_msg(Msg::TicketCreated(Err(ApiError::Api {
            status: 500,
            body: "boom".to_string(),
        })));
        assert!(fetch.is_none());
        assert_eq!(state.new_ticket.error.as_deref(), Some(ERR_CREATE_TICKET));
    }

    #[test]
    fn comment_submit_requires_non_empty_message() {
        let (mut state, _) = AppState::new(Session::authenticated(me(false)));
        state.navigate(Route::TicketDetail(7));
        state.detail.comment_focused = true;
        state.detail.comment_input = "   ".to_string();
        assert!(state.apply_action(Action::Submit).is_empty());

        state.detail.comment_input = "Thanks!".to_string();
        let effects = state.apply_action(Action::Submit);
        assert_eq!(
            effects,
            vec![Effect::AddComment {
                ticket: 7,
                message: "Thanks!".to_string()
            }]
        );
    }

    #[test]
    fn status_actions_are_staff_only() {
        let (mut state, _) = AppState::new(Session::authenticated(me(false)));
        state.navigate(Route::TicketDetail(7));
        assert!(state.apply_action(Action::MarkResolved).is_empty());

        let (mut staff, _) = AppState::new(Session::authenticated(me(true)));
        staff.navigate(Route::TicketDetail(7));
        let effects = staff.apply_action(Action::MarkResolved);
        assert_eq!(
            effects,
            vec![Effect::UpdateStatus {
                ticket: 7,
                status: TicketStatus::Resolved
            }]
        );
    }

    #[test]
    fn selection_follows_visible_list_not_raw_snapshot() {
        let (mut state, _) = AppState::new(Session::authenticated(me(false)));
        state.tickets = vec![
            ticket(1, TicketStatus::Open, 1),
            ticket(2, TicketStatus::Resolved, 2),
            ticket(3, TicketStatus::Open, 3),
        ];
        state.criteria.status = desk_core::StatusFilter::Only(TicketStatus::Open);
        state.selected = 1;

        state.apply_action(Action::SelectNext);
        assert_eq!(state.selected, 1, "only two visible tickets");

        state.apply_action(Action::OpenSelected);
        // Visible order is newest first: [3, 1]; index 1 is ticket 1.
        assert_eq!(state.route, Route::TicketDetail(1));
    }

    #[test]
    fn search_input_resets_selection() {
        let (mut state, _) = AppState::new(Session::authenticated(me(false)));
        state.tickets = vec![ticket(1, TicketStatus::Open, 1), ticket(2, TicketStatus::Open, 2)];
        state.selected = 1;
        state.focus = TicketsFocus::Search;
        state.apply_action(Action::Input('x'));
        assert_eq!(state.criteria.search, "x");
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn refresh_bumps_generation() {
        let (mut state, _) = AppState::new(Session::authenticated(me(false)));
        let before = state.generation;
        let effects = state.apply_action(Action::Refresh);
        assert_eq!(effects, vec![Effect::Fetch(Fetch::Tickets)]);
        assert!(state.generation > before);
    }
}
