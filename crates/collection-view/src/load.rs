//! Fetch Lifecycle
//!
//! A list is fetched once per mount and again on every reload. Only the
//! newest fetch of a still-mounted view may publish its result.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Where a page's list fetch stands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Proof that a fetch was started at a given generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Gate deciding whether a finished fetch may still update its view.
///
/// Clones share state, so the copy moved into a cleanup hook disposes the
/// same gate the fetch tasks check.
#[derive(Debug, Clone, Default)]
pub struct FetchGate {
    generation: Arc<AtomicU64>,
    disposed: Arc<AtomicBool>,
}

impl FetchGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch; any earlier ticket stops being accepted
    pub fn begin(&self) -> FetchTicket {
        FetchTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether a fetch holding `ticket` may publish its result
    pub fn accepts(&self, ticket: FetchTicket) -> bool {
        if self.disposed.load(Ordering::SeqCst) {
            tracing::debug!("[FETCH] view disposed, dropping result of generation {}", ticket.0);
            return false;
        }
        let current = self.generation.load(Ordering::SeqCst);
        if ticket.0 != current {
            tracing::debug!("[FETCH] generation {} superseded by {}", ticket.0, current);
            return false;
        }
        true
    }

    /// Mark the owning view as unmounted
    pub fn dispose(&self) {
        self.disposed.store(true, Ordering::SeqCst);
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_is_accepted() {
        let gate = FetchGate::new();
        let ticket = gate.begin();
        assert!(gate.accepts(ticket));
    }

    #[test]
    fn test_superseded_ticket_is_rejected() {
        let gate = FetchGate::new();
        let first = gate.begin();
        let second = gate.begin();
        assert!(!gate.accepts(first));
        assert!(gate.accepts(second));
    }

    #[test]
    fn test_dispose_rejects_everything() {
        let gate = FetchGate::new();
        let ticket = gate.begin();
        let cleanup = gate.clone();
        cleanup.dispose();
        assert!(gate.is_disposed());
        assert!(!gate.accepts(ticket));
        assert!(!gate.accepts(gate.begin()));
    }

    #[test]
    fn test_load_state_helpers() {
        assert_eq!(LoadState::default(), LoadState::Idle);
        assert!(LoadState::Loading.is_loading());
        assert_eq!(LoadState::Failed("offline".into()).error(), Some("offline"));
        assert_eq!(LoadState::Loaded.error(), None);
    }
}
