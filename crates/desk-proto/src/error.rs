//! Error types shared across the Supportdesk crates.

use thiserror::Error;

/// Errors that can occur while handling backend payloads.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown ticket status: {0}")]
    UnknownStatus(String),

    #[error("Unknown priority: {0}")]
    UnknownPriority(String),

    #[error("Payload parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
