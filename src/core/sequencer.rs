use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out monotonically increasing tickets so displays keep the result
/// of the last-requested computation and discard superseded ones.
///
/// Cancellation is advisory: a stale computation may run to completion, its
/// result just never wins `accept`.
#[derive(Debug, Default)]
pub struct ReportSequencer {
    latest: AtomicU64,
}

impl ReportSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new computation request and returns its ticket.
    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Returns true when the ticket still belongs to the latest request.
    pub fn accept(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }
}
