//! Logging - ホスト機能のログ専用スタブ
//!
//! The marketplace runs outside a wallet host in development and in the CLI;
//! these keep every call observable without doing anything.

use async_trait::async_trait;
use tracing::info;

use crate::domain::Artwork;
use crate::ports::{HostLifecycle, Notification, Notifier, NotifyError, PaymentCapability};

#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingPayment;

impl PaymentCapability for LoggingPayment {
    fn purchase(&self, artwork: &Artwork) {
        info!(artwork_id = %artwork.id, title = %artwork.title, price = %artwork.price, "pay purchase");
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingHost;

impl HostLifecycle for LoggingHost {
    fn ready(&self) {
        info!("frame ready");
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingNotifier;

#[async_trait]
impl Notifier for LoggingNotifier {
    async fn send(&self, notification: &Notification) -> Result<(), NotifyError> {
        info!(title = %notification.title, body = %notification.body, "notification sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[tokio::test]
    #[traced_test]
    async fn logging_notifier_always_succeeds() {
        let result = LoggingNotifier
            .send(&Notification::new_art_available())
            .await;
        assert!(result.is_ok());
        assert!(logs_contain("notification sent"));
    }
}
