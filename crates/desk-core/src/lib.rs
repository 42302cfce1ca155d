//! # desk-core
//!
//! Presentation logic for the Supportdesk client, kept free of I/O:
//! - [`projection`]: filtered/searched/sorted views over a ticket snapshot
//! - [`route`]: the authentication-gated navigation state machine
//! - [`session`]: the client's belief about who is logged in
//! - [`dashboard`]: reshaping pre-aggregated analytics into chart series
//!
//! Everything here is a pure function over its inputs; the network layer
//! lives in `desk-api` and the rendering in `desk-tui`.

pub mod dashboard;
pub mod projection;
pub mod route;
pub mod session;

pub use dashboard::{
    SeriesPoint, category_series, format_avg_resolution, sentiment_series, status_series,
};
pub use projection::{Criteria, SortOrder, StatusFilter, project};
pub use route::{Capability, Decision, Route, guard};
pub use session::Session;
