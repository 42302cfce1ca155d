//! # desk-api
//!
//! Network layer for the Supportdesk client:
//! - [`client::DeskApi`]: one method per backend REST endpoint
//! - [`tokens::TokenStore`]: bearer tokens persisted in the OS keychain
//! - [`session`]: refresh/login/logout over the identity endpoint
//! - [`config::DeskConfig`]: backend base URL and timeouts from env

pub mod client;
pub mod config;
pub mod error;
pub mod session;
pub mod tokens;

pub use client::DeskApi;
pub use config::DeskConfig;
pub use error::{ApiError, Result};
pub use session::{login, logout, refresh_session};
pub use tokens::TokenStore;
