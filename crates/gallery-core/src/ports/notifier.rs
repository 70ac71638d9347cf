//! Notifier port - ホストの通知機能
//!
//! Fire-and-forget: the caller only learns whether the host accepted it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// The "new art" broadcast offered from the header.
    pub fn new_art_available() -> Self {
        Self::new(
            "New Art Available! 🎨",
            "Check out the latest pieces in DNA Contemporary",
        )
    }
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("notifications are not enabled for this client")]
    NotEnabled,
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, notification: &Notification) -> Result<(), NotifyError>;
}
