//! Persistence - 永続スロットとの変換
//!
//! Artwork metadata <-> one durable slot.
//!
//! Images are never written. The slot holds a JSON array of
//! `{id, title, description, price, artist}` with no version field; any shape
//! mismatch makes the whole slot corrupt.
//!
//! Both directions are best-effort. `save` and `load` never fail from the
//! caller's point of view: problems are logged and sent to the event sink.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::domain::{Artwork, GalleryError, GalleryEvent, StoredArtwork};
use crate::ports::{EventSink, KeyValueStore};

pub struct PersistenceAdapter {
    kv: Arc<dyn KeyValueStore>,
    sink: Arc<dyn EventSink>,
    key: String,
}

impl PersistenceAdapter {
    pub fn new(kv: Arc<dyn KeyValueStore>, sink: Arc<dyn EventSink>, key: impl Into<String>) -> Self {
        Self {
            kv,
            sink,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Write `records` (minus images) to the slot. Errors are logged only.
    pub fn save(&self, records: &[Artwork]) {
        match self.try_save(records) {
            Ok(bytes) => debug!(key = %self.key, records = records.len(), bytes, "saved artworks"),
            Err(e) => {
                error!(error = %e, "failed to save artworks");
                self.sink.emit(GalleryEvent::PersistenceWriteFailed {
                    key: self.key.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    /// Read the slot. Absent -> empty; corrupt or unreadable -> empty + event.
    pub fn load(&self) -> Vec<StoredArtwork> {
        match self.try_load() {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "discarding durable artworks");
                let reason = match e {
                    GalleryError::PersistenceCorrupt { reason, .. } => reason,
                    other => other.to_string(),
                };
                self.sink.emit(GalleryEvent::PersistenceCorrupt {
                    key: self.key.clone(),
                    reason,
                });
                Vec::new()
            }
        }
    }

    /// Returns the number of bytes written.
    pub fn try_save(&self, records: &[Artwork]) -> Result<usize, GalleryError> {
        let stored: Vec<StoredArtwork> = records.iter().map(StoredArtwork::from).collect();
        let json = serde_json::to_string(&stored).map_err(|e| self.write_failed(e))?;
        self.kv
            .set(&self.key, &json)
            .map_err(|e| self.write_failed(e))?;
        Ok(json.len())
    }

    pub fn try_load(&self) -> Result<Vec<StoredArtwork>, GalleryError> {
        let raw = self.kv.get(&self.key).map_err(|e| self.corrupt(e))?;
        let Some(raw) = raw else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(|e| self.corrupt(e))
    }

    fn write_failed(&self, reason: impl ToString) -> GalleryError {
        GalleryError::PersistenceWriteFailed {
            key: self.key.clone(),
            reason: reason.to_string(),
        }
    }

    fn corrupt(&self, reason: impl ToString) -> GalleryError {
        GalleryError::PersistenceCorrupt {
            key: self.key.clone(),
            reason: reason.to_string(),
        }
    }
}
