//! Events - 観測用のドメインイベント
//!
//! These go to an `EventSink`; nothing in the core reacts to them.

use serde::{Deserialize, Serialize};

use super::ids::ArtworkId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GalleryEvent {
    /// The durable slot could not be parsed; the store started empty.
    PersistenceCorrupt { key: String, reason: String },

    /// A write to the durable slot was dropped.
    PersistenceWriteFailed { key: String, reason: String },

    /// The notification capability reported an error.
    NotificationFailed { reason: String },

    /// A purchase was handed to the payment capability.
    PurchaseRequested { artwork_id: ArtworkId },
}

impl GalleryEvent {
    pub fn name(&self) -> &'static str {
        match self {
            GalleryEvent::PersistenceCorrupt { .. } => "persistence_corrupt",
            GalleryEvent::PersistenceWriteFailed { .. } => "persistence_write_failed",
            GalleryEvent::NotificationFailed { .. } => "notification_failed",
            GalleryEvent::PurchaseRequested { .. } => "purchase_requested",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_is_tagged_by_name() {
        let e = GalleryEvent::NotificationFailed {
            reason: "offline".to_string(),
        };
        let v = serde_json::to_value(&e).unwrap();
        assert_eq!(v["event"], e.name());
        assert_eq!(v["reason"], "offline");
    }
}
