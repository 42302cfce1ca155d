//! # desk-proto
//!
//! Shared wire types for the Supportdesk backend REST API.
//!
//! Every struct here mirrors a payload the backend produces or consumes,
//! field names included. No I/O lives in this crate; it exists so the API
//! client, the presentation core, and the TUI agree on one set of types.

pub mod analytics;
pub mod error;
pub mod ticket;
pub mod user;

pub use analytics::{AnalyticsSummary, CategoryCount, SentimentCount, StatusCount};
pub use error::{Error, Result};
pub use ticket::{Comment, NewComment, NewTicket, Priority, Sentiment, StatusPatch, Ticket, TicketStatus};
pub use user::{Me, TokenPair, UserRef};
