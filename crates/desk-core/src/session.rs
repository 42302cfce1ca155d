//! The client's belief about the current authenticated identity.
//!
//! Session is in-memory only and rebuilt from the backend on every start;
//! persisted tokens live in the API crate's token store. Only the session
//! store operations (refresh/login/logout) replace a Session; everything
//! else reads it.

use desk_proto::Me;

/// Current identity, or absence thereof.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub identity: Option<Me>,
}

impl Session {
    /// An unauthenticated session.
    pub fn anonymous() -> Self {
        Self { identity: None }
    }

    /// A session for a known identity.
    pub fn authenticated(me: Me) -> Self {
        Self { identity: Some(me) }
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Staff privilege. Only meaningful when an identity is present;
    /// anonymous sessions are never staff.
    pub fn is_staff(&self) -> bool {
        self.identity.as_ref().is_some_and(|me| me.is_staff)
    }

    pub fn username(&self) -> Option<&str> {
        self.identity.as_ref().map(|me| me.username.as_str())
    }
}
