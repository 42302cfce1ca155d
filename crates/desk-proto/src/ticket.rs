//! Ticket and comment payloads, plus the triage enums the backend emits.
//!
//! Field names match the backend serializers exactly (`created_at`,
//! `ai_confidence`, ...) so these derive straight through serde with no
//! rename shims at call sites.

use crate::error::Error;
use crate::user::UserRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
}

impl TicketStatus {
    /// All statuses in backend ordering, used by the filter cycle.
    pub const ALL: [TicketStatus; 3] = [
        TicketStatus::Open,
        TicketStatus::InProgress,
        TicketStatus::Resolved,
    ];

    /// The wire value the backend expects.
    pub fn as_str(self) -> &'static str {
        match self {
            TicketStatus::Open => "OPEN",
            TicketStatus::InProgress => "IN_PROGRESS",
            TicketStatus::Resolved => "RESOLVED",
        }
    }
}

impl fmt::Display for TicketStatus {
    /// Human form: underscores become spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketStatus::Open => write!(f, "OPEN"),
            TicketStatus::InProgress => write!(f, "IN PROGRESS"),
            TicketStatus::Resolved => write!(f, "RESOLVED"),
        }
    }
}

impl FromStr for TicketStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OPEN" => Ok(TicketStatus::Open),
            "IN_PROGRESS" => Ok(TicketStatus::InProgress),
            "RESOLVED" => Ok(TicketStatus::Resolved),
            other => Err(Error::UnknownStatus(other.to_string())),
        }
    }
}

/// Triage priority assigned by the AI pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
            Priority::Critical => "CRITICAL",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(Priority::Low),
            "MEDIUM" => Ok(Priority::Medium),
            "HIGH" => Ok(Priority::High),
            "CRITICAL" => Ok(Priority::Critical),
            other => Err(Error::UnknownPriority(other.to_string())),
        }
    }
}

/// Detected user sentiment. The backend may emit values this client has
/// never seen; anything unrecognized decodes as `Unknown`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sentiment {
    Positive,
    Neutral,
    Angry,
    #[default]
    #[serde(other)]
    Unknown,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Sentiment::Positive => "POSITIVE",
            Sentiment::Neutral => "NEUTRAL",
            Sentiment::Angry => "ANGRY",
            Sentiment::Unknown => "UNKNOWN",
        };
        write!(f, "{s}")
    }
}

/// A support ticket as the backend serializes it.
///
/// AI fields (`sentiment`, `ai_summary`, `ai_suggested_reply`,
/// `ai_confidence`) populate asynchronously after creation; until then the
/// backend sends defaults, so they all carry serde defaults here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub category: String,
    pub priority: Priority,
    #[serde(default)]
    pub sentiment: Sentiment,
    #[serde(default)]
    pub ai_summary: String,
    #[serde(default)]
    pub ai_suggested_reply: String,
    #[serde(default)]
    pub ai_confidence: f64,
    #[serde(default)]
    pub created_by: Option<UserRef>,
    #[serde(default)]
    pub assigned_to: Option<UserRef>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Ticket {
    /// True once the AI pipeline has filled in a summary.
    pub fn has_ai_summary(&self) -> bool {
        !self.ai_summary.trim().is_empty()
    }

    /// True once the AI pipeline has drafted a reply.
    pub fn has_ai_reply(&self) -> bool {
        !self.ai_suggested_reply.trim().is_empty()
    }
}

/// A comment on a ticket. Append-only from the client's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub ticket: i64,
    pub author: UserRef,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /tickets/`.
#[derive(Debug, Clone, Serialize)]
pub struct NewTicket {
    pub title: String,
    pub description: String,
}

/// Request body for `POST /comments/`.
#[derive(Debug, Clone, Serialize)]
pub struct NewComment {
    pub ticket: i64,
    pub message: String,
}

/// Partial update body for `PATCH /tickets/{id}/`.
#[derive(Debug, Clone, Serialize)]
pub struct StatusPatch {
    pub status: TicketStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_wire_form() {
        for status in TicketStatus::ALL {
            assert_eq!(status.as_str().parse::<TicketStatus>().unwrap(), status);
        }
    }

    #[test]
    fn priority_rejects_unknown_wire_value() {
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert!(matches!(
            "URGENT".parse::<Priority>(),
            Err(Error::UnknownPriority(_))
        ));
    }

    #[test]
    fn in_progress_displays_with_space() {
        assert_eq!(TicketStatus::InProgress.to_string(), "IN PROGRESS");
        assert_eq!(TicketStatus::InProgress.as_str(), "IN_PROGRESS");
    }

    #[test]
    fn unknown_sentiment_decodes_as_unknown() {
        let s: Sentiment = serde_json::from_str("\"EUPHORIC\"").unwrap();
        assert_eq!(s, Sentiment::Unknown);
    }

    #[test]
    fn ticket_decodes_backend_payload() {
        let json = r#"{
            "id": 7,
            "title": "Payment failed during checkout",
            "description": "Card declined on step 3",
            "status": "OPEN",
            "category": "BILLING",
            "priority": "HIGH",
            "sentiment": "ANGRY",
            "ai_summary": "",
            "ai_suggested_reply": "",
            "ai_confidence": 0.0,
            "created_by": {"id": 1, "username": "sam", "is_staff": false},
            "assigned_to": null,
            "created_at": "2024-01-01T10:00:00Z",
            "updated_at": "2024-01-01T10:00:00Z",
            "resolved_at": null
        }"#;

        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.status, TicketStatus::Open);
        assert_eq!(ticket.priority, Priority::High);
        assert_eq!(ticket.sentiment, Sentiment::Angry);
        assert!(!ticket.has_ai_summary());
        assert!(ticket.resolved_at.is_none());
    }

    #[test]
    fn ticket_tolerates_missing_ai_fields() {
        // Freshly created tickets may omit AI fields entirely.
        let json = r#"{
            "id": 1,
            "title": "Login broken",
            "description": "Cannot sign in",
            "status": "OPEN",
            "category": "LOGIN",
            "priority": "MEDIUM",
            "created_at": "2024-01-02T00:00:00Z"
        }"#;

        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.sentiment, Sentiment::Unknown);
        assert_eq!(ticket.ai_confidence, 0.0);
        assert!(!ticket.has_ai_reply());
    }

    #[test]
    fn status_patch_serializes_wire_value() {
        let patch = StatusPatch {
            status: TicketStatus::InProgress,
        };
        assert_eq!(
            serde_json::to_string(&patch).unwrap(),
            r#"{"status":"IN_PROGRESS"}"#
        );
    }
}
