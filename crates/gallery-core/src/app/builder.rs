//! MarketplaceBuilder - ポートのワイヤリング
//!
//! Every port has a development default, so `MarketplaceBuilder::new().build()`
//! gives a working in-memory marketplace that only logs host calls.

use std::sync::Arc;

use tracing::debug;

use crate::config::GalleryConfig;
use crate::domain::{GalleryError, ImageRef};
use crate::impls::{
    InMemoryKeyValueStore, LoggingHost, LoggingNotifier, LoggingPayment, TracingEventSink,
};
use crate::ports::{
    Clock, EventSink, HostLifecycle, IdGenerator, KeyValueStore, Notifier, PaymentCapability,
    SystemClock, UlidGenerator,
};
use crate::store::{ArtworkStore, PersistenceAdapter};
use crate::upload::UploadFlow;

use super::marketplace::{Marketplace, Ports};

/// # 使用例
/// ```ignore
/// let market = MarketplaceBuilder::new()
///     .config(GalleryConfig::load("gallery.json")?)
///     .key_value(Arc::new(FileKeyValueStore::open(".gallery")?))
///     .build()?;
/// ```
pub struct MarketplaceBuilder {
    config: GalleryConfig,
    clock: Arc<dyn Clock>,
    ids: Option<Arc<dyn IdGenerator>>,
    kv: Arc<dyn KeyValueStore>,
    sink: Arc<dyn EventSink>,
    payment: Arc<dyn PaymentCapability>,
    host: Arc<dyn HostLifecycle>,
    notifier: Arc<dyn Notifier>,
}

impl MarketplaceBuilder {
    pub fn new() -> Self {
        Self {
            config: GalleryConfig::default(),
            clock: Arc::new(SystemClock),
            ids: None,
            kv: Arc::new(InMemoryKeyValueStore::new()),
            sink: Arc::new(TracingEventSink),
            payment: Arc::new(LoggingPayment),
            host: Arc::new(LoggingHost),
            notifier: Arc::new(LoggingNotifier),
        }
    }

    pub fn config(mut self, config: GalleryConfig) -> Self {
        self.config = config;
        self
    }

    /// Also drives id generation unless `id_generator` is set.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = Some(ids);
        self
    }

    pub fn key_value(mut self, kv: Arc<dyn KeyValueStore>) -> Self {
        self.kv = kv;
        self
    }

    pub fn event_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn payment(mut self, payment: Arc<dyn PaymentCapability>) -> Self {
        self.payment = payment;
        self
    }

    pub fn host(mut self, host: Arc<dyn HostLifecycle>) -> Self {
        self.host = host;
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// 起動時検証: a bad config fails here, not on first use.
    pub fn build(self) -> Result<Marketplace, GalleryError> {
        self.config.validate()?;

        let ids: Arc<dyn IdGenerator> = match self.ids {
            Some(ids) => ids,
            None => Arc::new(UlidGenerator::new(self.clock.clone())),
        };
        let adapter = PersistenceAdapter::new(self.kv, self.sink.clone(), &self.config.storage_key);
        let store = ArtworkStore::new(adapter, ImageRef::asset(&self.config.placeholder_image));
        let upload = UploadFlow::new(
            ids,
            self.config.max_image_bytes,
            self.config.acknowledgement_duration(),
        );
        debug!(storage_key = %self.config.storage_key, "marketplace built");

        Ok(Marketplace::new(
            self.config,
            store,
            upload,
            Ports {
                clock: self.clock,
                sink: self.sink,
                payment: self.payment,
                host: self.host,
                notifier: self.notifier,
            },
        ))
    }
}

impl Default for MarketplaceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Tab;

    #[test]
    fn defaults_build() {
        let market = MarketplaceBuilder::new().build().unwrap();
        assert_eq!(market.tab(), Tab::Browse);
        assert_eq!(market.config(), &GalleryConfig::default());
    }

    #[test]
    fn invalid_config_fails_fast() {
        let config = GalleryConfig {
            swipe_threshold: f64::NAN,
            ..GalleryConfig::default()
        };
        let result = MarketplaceBuilder::new().config(config).build();
        assert!(matches!(result, Err(GalleryError::Config(_))));
    }

    #[test]
    fn oversized_banner_duration_fails_fast() {
        let config = GalleryConfig {
            acknowledgement_secs: 10_000_000_000_000,
            ..GalleryConfig::default()
        };
        let result = MarketplaceBuilder::new().config(config).build();
        assert!(matches!(result, Err(GalleryError::Config(_))));
    }
}
