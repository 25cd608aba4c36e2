//! Stale-response guard for overlapping requests.
//!
//! A caller that may issue several requests for the same view (for example
//! paging the leaderboard) takes a [`RequestToken`] per request and only
//! applies a response whose token is still the latest.

use std::sync::atomic::{AtomicU64, Ordering};

/// Ticket identifying one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    /// Sequence number of this token.
    pub const fn sequence(self) -> u64 {
        self.0
    }
}

/// Issues monotonically increasing request tokens.
///
/// Shareable across threads; the counter is atomic.
#[derive(Debug, Default)]
pub struct RequestGuard {
    latest: AtomicU64,
}

impl RequestGuard {
    /// Guard with no requests issued.
    pub const fn new() -> Self {
        Self {
            latest: AtomicU64::new(0),
        }
    }

    /// Issue a token for a new request, superseding all earlier ones.
    pub fn issue(&self) -> RequestToken {
        let previous = self.latest.fetch_add(1, Ordering::AcqRel);
        RequestToken(previous.wrapping_add(1))
    }

    /// Whether `token` belongs to the most recently issued request.
    pub fn is_latest(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::Acquire) == token.0
    }
}
