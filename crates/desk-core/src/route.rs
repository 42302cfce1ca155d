//! Authentication-gated navigation.
//!
//! Three request states drive the decision: unauthenticated,
//! authenticated non-staff, authenticated staff. The guard is consulted on
//! every navigation and again whenever the Session is replaced, so a
//! logout immediately redirects any protected view that is still showing.

use crate::session::Session;

/// A navigable view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Tickets,
    TicketDetail(i64),
    Dashboard,
}

/// What a route requires before it may render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Public,
    Authenticated,
    StaffOnly,
}

impl Route {
    pub fn capability(self) -> Capability {
        match self {
            Route::Login | Route::Register => Capability::Public,
            Route::Tickets | Route::TicketDetail(_) => Capability::Authenticated,
            Route::Dashboard => Capability::StaffOnly,
        }
    }

    /// Default authenticated landing route; unknown navigation requests
    /// resolve here too.
    pub fn fallback() -> Self {
        Route::Tickets
    }
}

/// Outcome of guarding a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Render the requested route.
    Render(Route),
    /// Not logged in: go to login, remembering where the user wanted to be
    /// so a successful login can return there.
    RedirectToLogin { return_to: Route },
    /// Logged in but not authorized: go to the default landing route.
    /// Authorization failures never bounce to login.
    Redirect(Route),
}

/// Maps (session, requested route) to an allow/redirect decision.
pub fn guard(session: &Session, requested: Route) -> Decision {
    match requested.capability() {
        Capability::Public => Decision::Render(requested),
        Capability::Authenticated => {
            if session.is_authenticated() {
                Decision::Render(requested)
            } else {
                Decision::RedirectToLogin {
                    return_to: requested,
                }
            }
        }
        Capability::StaffOnly => {
            if !session.is_authenticated() {
                Decision::RedirectToLogin {
                    return_to: requested,
                }
            } else if session.is_staff() {
                Decision::Render(requested)
            } else {
                Decision::Redirect(Route::fallback())
            }
        }
    }
}
