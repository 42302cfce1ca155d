//! Identity payloads from the auth endpoints.

use serde::{Deserialize, Serialize};

/// The backend's mini user serializer, embedded in tickets and comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub is_staff: bool,
}

/// Payload from `GET /auth/me/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Me {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub is_staff: bool,
}

/// Bearer token pair from `POST /auth/token/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn me_defaults_staff_to_false() {
        let me: Me = serde_json::from_str(r#"{"id": 3, "username": "ana"}"#).unwrap();
        assert!(!me.is_staff);
    }
}
