//! Hand-off point between the core and persistence.

use crate::core::PunchEvent;
use std::sync::{Arc, Mutex};

/// Receives ownership of every accepted punch.
///
/// Implementations forward events to whatever records them. Delivery is
/// fire-and-forget from the session's point of view: the status has already
/// changed when `deliver` is called.
pub trait PunchSink: Send + Sync {
    fn deliver(&self, event: PunchEvent);
}

impl<K: PunchSink + ?Sized> PunchSink for Arc<K> {
    fn deliver(&self, event: PunchEvent) {
        (**self).deliver(event)
    }
}

/// Logs each event as the JSON payload a persistence API would receive.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl PunchSink for TracingSink {
    fn deliver(&self, event: PunchEvent) {
        match event.to_json() {
            Ok(payload) => tracing::info!(%payload, "punch event ready for persistence"),
            Err(e) => tracing::error!(error = %e, event_id = %event.id, "failed to encode punch event"),
        }
    }
}

/// Keeps delivered events in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<PunchEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything delivered so far.
    pub fn events(&self) -> Vec<PunchEvent> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Remove and return everything delivered so far.
    pub fn drain(&self) -> Vec<PunchEvent> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<PunchEvent>> {
        self.events.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl PunchSink for MemorySink {
    fn deliver(&self, event: PunchEvent) {
        self.lock().push(event);
    }
}
