//! Errors - エラー型と分類
//!
//! None of these are fatal to the shell. Persistence and notification errors
//! are logged and swallowed by the components that hit them; only
//! `MalformedUpload` travels back to a caller, so a form can refuse to submit.

use thiserror::Error;

/// ErrorKind は運用上の分類
///
/// - Recoverable: state is unchanged, the error is logged
/// - Rejected: the caller supplied invalid input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Recoverable,
    Rejected,
}

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("durable slot '{key}' is corrupt: {reason}")]
    PersistenceCorrupt { key: String, reason: String },

    #[error("failed to write durable slot '{key}': {reason}")]
    PersistenceWriteFailed { key: String, reason: String },

    #[error("notification failed: {0}")]
    NotificationFailed(String),

    #[error("malformed upload: {0}")]
    MalformedUpload(String),

    #[error("image decoding failed: {0}")]
    ImageDecode(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl GalleryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GalleryError::MalformedUpload(_) | GalleryError::Config(_) => ErrorKind::Rejected,
            GalleryError::PersistenceCorrupt { .. }
            | GalleryError::PersistenceWriteFailed { .. }
            | GalleryError::NotificationFailed(_)
            | GalleryError::ImageDecode(_) => ErrorKind::Recoverable,
        }
    }
}
