//! Session store operations: the only writers of the in-memory Session.
//!
//! The Session itself lives in `desk-core`; this module ties it to the
//! identity endpoint and the token store. Lifecycle: `refresh_session` at
//! app start, after every `login`, and never in between; `logout` clears
//! tokens synchronously.

use crate::client::DeskApi;
use crate::error::Result;
use desk_core::Session;
use tracing::{debug, warn};

/// Query the identity endpoint and rebuild the Session.
///
/// Any failure - network error, missing token, 401 - yields the anonymous
/// session. This never errors outward and never leaves a stale identity
/// in place.
pub async fn refresh_session(api: &DeskApi) -> Session {
    match api.me().await {
        Ok(me) => {
            debug!("Session refreshed for {}", me.username);
            Session::authenticated(me)
        }
        Err(err) => {
            warn!("Session refresh failed, clearing identity: {}", err);
            Session::anonymous()
        }
    }
}

/// Exchange credentials for tokens and persist them.
///
/// Does not update the Session; the caller follows up with
/// [`refresh_session`]. Keeping the steps separate means a failed refresh
/// after a successful login still converges on a consistent state.
pub async fn login(api: &DeskApi, username: &str, password: &str) -> Result<()> {
    api.login(username, password).await
}

/// Clear persisted tokens and return the anonymous session. Safe to call
/// when already logged out.
pub fn logout(api: &DeskApi) -> Session {
    api.tokens().clear();
    Session::anonymous()
}
