// src/events/mod.rs

//! Bounded trace of the most recent lab operations.

use crate::core::constants::LOG_CAPACITY;
use std::collections::VecDeque;
use tracing::info;

/// Append-only log holding the last `capacity` messages, newest first.
///
/// Recording past capacity drops the oldest entry. Every message is also
/// emitted as a `tracing` event so hosts with a subscriber see the full
/// history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventLog {
    entries: VecDeque<String>,
    capacity: usize,
}

impl EventLog {
    /// An empty log keeping at most `capacity` entries (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { entries: VecDeque::with_capacity(capacity), capacity }
    }

    pub fn record(&mut self, message: impl Into<String>) {
        let message = message.into();
        info!(target: "qlab::events", "{}", message);
        self.entries.push_front(message);
        self.entries.truncate(self.capacity);
    }

    /// Clears the log down to a single entry.
    pub fn reset_with(&mut self, message: impl Into<String>) {
        self.entries.clear();
        self.record(message);
    }

    /// Entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn latest(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::with_capacity(LOG_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first() {
        let mut log = EventLog::default();
        log.record("a");
        log.record("b");
        assert_eq!(log.entries().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(log.latest(), Some("b"));
    }

    #[test]
    fn test_evicts_oldest_past_capacity() {
        let mut log = EventLog::default();
        for i in 0..8 {
            log.record(format!("m{}", i));
        }
        assert_eq!(log.len(), 5);
        assert_eq!(log.entries().collect::<Vec<_>>(), vec!["m7", "m6", "m5", "m4", "m3"]);
    }

    #[test]
    fn test_reset_with_leaves_single_entry() {
        let mut log = EventLog::with_capacity(3);
        log.record("x");
        log.record("y");
        log.reset_with("fresh");
        assert_eq!(log.entries().collect::<Vec<_>>(), vec!["fresh"]);
    }

    #[test]
    fn test_zero_capacity_is_raised_to_one() {
        let mut log = EventLog::with_capacity(0);
        log.record("a");
        log.record("b");
        assert_eq!(log.capacity(), 1);
        assert_eq!(log.entries().collect::<Vec<_>>(), vec!["b"]);
    }
}
