//! # desk-tui
//!
//! Terminal user interface for the Supportdesk helpdesk client.
//!
//! Built with `ratatui` and `crossterm`, this crate provides:
//! - The view-per-route layout (login, register, tickets, detail, dashboard)
//! - A single event loop that owns all state; network calls run in spawned
//!   tasks and report back over a message channel
//! - Stale-fetch suppression so abandoned views never see late results

pub mod app;
pub mod input;
pub mod state;
pub mod widgets;

pub use app::App;
pub use state::{AppState, Fetch, Msg};
