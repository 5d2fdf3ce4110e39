//! Per-worker event accumulation.

use crate::event::{Event, Severity};

/// Accumulates events for a single worker.
///
/// Every worker owns exactly one collector, so registration needs no
/// synchronization and events from one worker are invisible to every other
/// collector. The orchestrator flushes each collector after its worker has
/// joined and merges the batches.
#[derive(Debug, Default)]
pub struct EventCollector {
    events: Vec<Event>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event. Never blocks, never fails.
    pub fn register(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Remove and return all events registered so far, in registration order.
    ///
    /// A second flush immediately after a non-empty flush returns an empty
    /// vector; events are consumed exactly once.
    pub fn flush(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    /// Number of pending (not yet flushed) events.
    pub fn pending(&self) -> usize {
        self.events.len()
    }

    /// True when any pending event has Error severity.
    pub fn has_pending_error(&self) -> bool {
        self.events.iter().any(|e| e.severity == Severity::Error)
    }
}
