//! Config - マーケットプレイスの設定
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! yields the stock marketplace.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::PLACEHOLDER_IMAGE;
use crate::domain::{GalleryError, SWIPE_THRESHOLD};

pub const DEFAULT_STORAGE_KEY: &str = "dna-contemporary-artworks";

/// Longest banner the config accepts (one day).
pub const MAX_ACKNOWLEDGEMENT_SECS: i64 = 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Name of the durable slot holding uploaded artwork metadata.
    pub storage_key: String,

    /// Image given to artworks rehydrated from the durable slot.
    pub placeholder_image: String,

    /// Drag distance a swipe must exceed to count as a decision.
    pub swipe_threshold: f64,

    /// How long "uploaded" / "sent" banners stay up.
    pub acknowledgement_secs: i64,

    /// Largest accepted image upload.
    pub max_image_bytes: usize,

    /// Viewports narrower than this use the swipe layout.
    pub mobile_breakpoint: u32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
            swipe_threshold: SWIPE_THRESHOLD,
            acknowledgement_secs: 3,
            max_image_bytes: 10 * 1024 * 1024,
            mobile_breakpoint: 768,
        }
    }
}

impl GalleryConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, GalleryError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| GalleryError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, GalleryError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| GalleryError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), GalleryError> {
        if self.storage_key.trim().is_empty() {
            return Err(GalleryError::Config("storage_key must not be empty".into()));
        }
        if !self.swipe_threshold.is_finite() || self.swipe_threshold < 0.0 {
            return Err(GalleryError::Config(format!(
                "swipe_threshold must be a non-negative number, got {}",
                self.swipe_threshold
            )));
        }
        if !(0..=MAX_ACKNOWLEDGEMENT_SECS).contains(&self.acknowledgement_secs) {
            return Err(GalleryError::Config(format!(
                "acknowledgement_secs must be within 0..={MAX_ACKNOWLEDGEMENT_SECS}, got {}",
                self.acknowledgement_secs
            )));
        }
        Ok(())
    }

    /// Saturates instead of panicking on values `validate` would refuse.
    pub fn acknowledgement_duration(&self) -> chrono::Duration {
        chrono::Duration::try_seconds(self.acknowledgement_secs).unwrap_or(chrono::Duration::MAX)
    }
}
