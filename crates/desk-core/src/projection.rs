//! Client-side ticket list projection: status filter, text search, sort.
//!
//! The raw ticket snapshot is never mutated; [`project`] clones the
//! matching tickets into a fresh vector. Recomputation is deterministic
//! for identical inputs, so the projection can simply be re-invoked
//! whenever the snapshot or any control changes.

use desk_proto::{Ticket, TicketStatus};

/// Status filter control: everything, or exactly one status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TicketStatus),
}

impl StatusFilter {
    /// Cycle ALL -> OPEN -> IN_PROGRESS -> RESOLVED -> ALL, matching the
    /// dropdown order in the backend's status choices.
    pub fn next(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Only(TicketStatus::Open),
            StatusFilter::Only(TicketStatus::Open) => {
                StatusFilter::Only(TicketStatus::InProgress)
            }
            StatusFilter::Only(TicketStatus::InProgress) => {
                StatusFilter::Only(TicketStatus::Resolved)
            }
            StatusFilter::Only(TicketStatus::Resolved) => StatusFilter::All,
        }
    }

    pub fn matches(self, status: TicketStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => status == wanted,
        }
    }

    pub fn label(self) -> String {
        match self {
            StatusFilter::All => "ALL".to_string(),
            StatusFilter::Only(status) => status.to_string(),
        }
    }
}

/// Sort order over `created_at`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Newest => SortOrder::Oldest,
            SortOrder::Oldest => SortOrder::Newest,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Newest => "NEWEST",
            SortOrder::Oldest => "OLDEST",
        }
    }
}

/// Ephemeral list controls. Never persisted; reset on every app start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    pub search: String,
    pub status: StatusFilter,
    pub sort: SortOrder,
}

/// Derives the visible ticket list from a raw snapshot.
///
/// Steps run in fixed order: status filter, then trimmed case-insensitive
/// substring search over `"{title} {description}"`, then a stable sort by
/// `created_at`. Empty search and `StatusFilter::All` degrade to no
/// filtering, so invalid criteria never error.
pub fn project(tickets: &[Ticket], criteria: &Criteria) -> Vec<Ticket> {
    let needle = criteria.search.trim().to_lowercase();

    let mut out: Vec<Ticket> = tickets
        .iter()
        .filter(|t| criteria.status.matches(t.status))
        .filter(|t| {
            if needle.is_empty() {
                return true;
            }
            let haystack = format!("{} {}", t.title, t.description).to_lowercase();
            haystack.contains(&needle)
        })
        .cloned()
        .collect();

    // sort_by is stable, so equal timestamps keep their fetch order.
    match criteria.sort {
        SortOrder::Newest => out.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::Oldest => out.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
    }

    out
}
