//! Persisted bearer tokens, the client's only durable state.
//!
//! Tokens live in the OS keychain under the "supportdesk" service, one
//! entry per token. Every outgoing authenticated request reads the access
//! token; only login and logout write.

use crate::error::{ApiError, Result};
use desk_proto::TokenPair;
use std::sync::Mutex;

const SERVICE: &str = "supportdesk";
const ACCESS_ENTRY: &str = "access-token";
const REFRESH_ENTRY: &str = "refresh-token";

enum Backend {
    Keychain,
    /// Process-local storage for tests and environments without a keychain.
    Memory(Mutex<Option<TokenPair>>),
}

pub struct TokenStore {
    backend: Backend,
}

impl TokenStore {
    /// Store backed by the OS keychain.
    pub fn keychain() -> Self {
        Self {
            backend: Backend::Keychain,
        }
    }

    /// Store backed by process memory. Nothing survives exit.
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(Mutex::new(None)),
        }
    }

    /// Persist a token pair, replacing any previous one.
    pub fn save(&self, tokens: &TokenPair) -> Result<()> {
        match &self.backend {
            Backend::Keychain => {
                set_entry(ACCESS_ENTRY, &tokens.access)?;
                set_entry(REFRESH_ENTRY, &tokens.refresh)?;
                Ok(())
            }
            Backend::Memory(slot) => {
                *slot.lock().expect("token store lock") = Some(tokens.clone());
                Ok(())
            }
        }
    }

    /// Current access token, if any.
    pub fn access(&self) -> Option<String> {
        match &self.backend {
            Backend::Keychain => keyring::Entry::new(SERVICE, ACCESS_ENTRY)
                .ok()
                .and_then(|e| e.get_password().ok()),
            Backend::Memory(slot) => slot
                .lock()
                .expect("token store lock")
                .as_ref()
                .map(|t| t.access.clone()),
        }
    }

    /// Current refresh token, if any.
    pub fn refresh(&self) -> Option<String> {
        match &self.backend {
            Backend::Keychain => keyring::Entry::new(SERVICE, REFRESH_ENTRY)
                .ok()
                .and_then(|e| e.get_password().ok()),
            Backend::Memory(slot) => slot
                .lock()
                .expect("token store lock")
                .as_ref()
                .map(|t| t.refresh.clone()),
        }
    }

    /// Remove both tokens. Idempotent: missing entries are not an error.
    pub fn clear(&self) {
        match &self.backend {
            Backend::Keychain => {
                for name in [ACCESS_ENTRY, REFRESH_ENTRY] {
                    if let Ok(entry) = keyring::Entry::new(SERVICE, name) {
                        let _ = entry.delete_credential();
                    }
                }
            }
            Backend::Memory(slot) => {
                *slot.lock().expect("token store lock") = None;
            }
        }
    }
}

fn set_entry(name: &str, value: &str) -> Result<()> {
    let entry = keyring::Entry::new(SERVICE, name)
        .map_err(|e| ApiError::Keychain(e.to_string()))?;
    if let Err(err) = entry.set_password(value) {
        // Some keychains refuse overwrites; try delete + set as a fallback.
        if entry.delete_credential().is_ok() {
            entry
                .set_password(value)
                .map_err(|e| ApiError::Keychain(e.to_string()))?;
        } else {
            return Err(ApiError::Keychain(err.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> TokenPair {
        TokenPair {
            access: "acc".to_string(),
            refresh: "ref".to_string(),
        }
    }

    #[test]
    fn memory_store_round_trips() {
        let store = TokenStore::in_memory();
        assert!(store.access().is_none());

        store.save(&pair()).unwrap();
        assert_eq!(store.access().as_deref(), Some("acc"));
        assert_eq!(store.refresh().as_deref(), Some("ref"));
    }

    #[test]
    fn clear_is_idempotent() {
        let store = TokenStore::in_memory();
        store.clear();
        store.clear();
        assert!(store.access().is_none());

        store.save(&pair()).unwrap();
        store.clear();
        assert!(store.access().is_none());
        assert!(store.refresh().is_none());
    }
}
