//! EventSink 実装

use std::sync::Mutex;

use tracing::{error, info, warn};

use crate::domain::GalleryEvent;
use crate::ports::EventSink;

/// Forwards every event to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn emit(&self, event: GalleryEvent) {
        match &event {
            GalleryEvent::PersistenceCorrupt { key, reason } => {
                error!(event = event.name(), %key, %reason, "durable slot discarded");
            }
            GalleryEvent::PersistenceWriteFailed { key, reason } => {
                error!(event = event.name(), %key, %reason, "durable write dropped");
            }
            GalleryEvent::NotificationFailed { reason } => {
                warn!(event = event.name(), %reason, "notification not delivered");
            }
            GalleryEvent::PurchaseRequested { artwork_id } => {
                info!(event = event.name(), %artwork_id, "purchase requested");
            }
        }
    }
}

/// Keeps events in memory.
#[derive(Debug, Default)]
pub struct MemoryEventSink {
    events: Mutex<Vec<GalleryEvent>>,
}

impl MemoryEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<GalleryEvent> {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl EventSink for MemoryEventSink {
    fn emit(&self, event: GalleryEvent) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(event);
    }
}
