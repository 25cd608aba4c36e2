//! Ephemeral animation event queue.
//!
//! Events are cosmetic: each one is kept until `duration_ms` has elapsed
//! on the owning store's clock, or until it is cleared explicitly.

use organic_types::{AnimationEvent, AnimationId};

/// An event plus the instant it stops being shown.
#[derive(Debug, Clone, PartialEq)]
struct QueuedAnimation {
    event: AnimationEvent,
    expires_at_ms: i64,
}

/// Time-ordered queue of live animation events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationQueue {
    entries: Vec<QueuedAnimation>,
}

impl AnimationQueue {
    /// Empty queue.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Enqueue `event`, expiring `duration_ms` after `now_ms`.
    pub fn push(&mut self, event: AnimationEvent, now_ms: i64) {
        let duration = i64::try_from(event.duration_ms).unwrap_or(i64::MAX);
        let expires_at_ms = now_ms.saturating_add(duration);
        self.entries.push(QueuedAnimation {
            event,
            expires_at_ms,
        });
    }

    /// Drop every event whose lifetime has elapsed at `now_ms`.
    ///
    /// Returns the number of events removed.
    pub fn expire(&mut self, now_ms: i64) -> usize {
        let before = self.entries.len();
        self.entries.retain(|q| q.expires_at_ms > now_ms);
        before.saturating_sub(self.entries.len())
    }

    /// Remove the event with `id`. Returns whether one was removed.
    pub fn clear(&mut self, id: AnimationId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|q| q.event.id != id);
        self.entries.len() < before
    }

    /// Remove every event.
    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    /// Live events in insertion order.
    pub fn events(&self) -> impl Iterator<Item = &AnimationEvent> {
        self.entries.iter().map(|q| &q.event)
    }

    /// Number of queued events.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use organic_types::{AnimationKind, Position};

    use super::*;

    fn pulse(duration_ms: u64) -> AnimationEvent {
        AnimationEvent {
            id: AnimationId::new(),
            kind: AnimationKind::Pulse,
            position: Position::default(),
            color: None,
            text: None,
            duration_ms,
        }
    }

    #[test]
    fn expires_after_duration() {
        let mut queue = AnimationQueue::new();
        queue.push(pulse(1000), 0);
        queue.push(pulse(3000), 0);

        assert_eq!(queue.expire(999), 0);
        assert_eq!(queue.expire(1000), 1);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.expire(3000), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn clear_by_id() {
        let mut queue = AnimationQueue::new();
        let event = pulse(1000);
        let id = event.id;
        queue.push(event, 0);
        queue.push(pulse(1000), 0);

        assert!(queue.clear(id));
        assert!(!queue.clear(id));
        assert_eq!(queue.len(), 1);
        assert!(queue.events().all(|e| e.id != id));
    }

    #[test]
    fn zero_duration_expires_immediately() {
        let mut queue = AnimationQueue::new();
        queue.push(pulse(0), 50);
        assert_eq!(queue.expire(50), 1);
    }
}
