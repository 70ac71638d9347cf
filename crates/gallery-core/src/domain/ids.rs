//! IDs - ドメイン識別子（strongly-typed IDs）
//!
//! # ArtworkId
//! Artwork ids are opaque strings. Freshly generated ids are ULIDs
//! (timestamp first, so generation order is sortable), but catalog entries
//! ("featured-1", "sample-3") and ids recovered from the durable slot may be
//! any string, so the type wraps `String` instead of `Ulid`.
//!
//! ## なぜ newtype なのか
//! - `String` と混同できない（title や artist を id として渡せない）
//! - serde では素の文字列として扱われる（`#[serde(transparent)]`）

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

/// Identifier of an Artwork.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtworkId(String);

impl ArtworkId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse back into a ULID, if this id was produced by an `IdGenerator`.
    pub fn as_ulid(&self) -> Option<Ulid> {
        Ulid::from_string(&self.0).ok()
    }
}

impl From<Ulid> for ArtworkId {
    fn from(ulid: Ulid) -> Self {
        Self(ulid.to_string())
    }
}

impl From<&str> for ArtworkId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ulid_ids_are_sortable() {
        // ULID は時刻ベースなので、生成順序でソート可能
        let id1 = ArtworkId::from(Ulid::new());
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id2 = ArtworkId::from(Ulid::new());

        assert!(id1 < id2);
        assert!(id1.as_ulid().is_some());
    }

    #[test]
    fn catalog_ids_are_not_ulids() {
        let id = ArtworkId::new("featured-1");
        assert_eq!(id.as_str(), "featured-1");
        assert_eq!(id.as_ulid(), None);
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = ArtworkId::new("1");
        let s = serde_json::to_string(&id).unwrap();
        assert_eq!(s, "\"1\"");

        let back: ArtworkId = serde_json::from_str(&s).unwrap();
        assert_eq!(back, id);
    }
}
