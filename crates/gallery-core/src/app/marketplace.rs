//! Marketplace - タブ構成のビューシェル
//!
//! Owns the artwork store and every piece of view state (tab, swipe session,
//! liked list, artist search, banners). All mutation goes through `&mut self`
//! on the caller's event thread.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::artists::ArtistSearch;
use crate::config::GalleryConfig;
use crate::domain::catalog::compose_feed;
use crate::domain::{
    Acknowledgement, Artwork, ArtworkId, GalleryError, GalleryEvent, LayoutMode, SwipeDecision,
    Tab,
};
use crate::ports::{Clock, EventSink, HostLifecycle, Notification, Notifier, PaymentCapability};
use crate::store::ArtworkStore;
use crate::swipe::SwipeEngine;
use crate::upload::{ImageUpload, UploadFlow, UploadForm};

/// Host-facing ports the shell calls directly.
pub(crate) struct Ports {
    pub clock: Arc<dyn Clock>,
    pub sink: Arc<dyn EventSink>,
    pub payment: Arc<dyn PaymentCapability>,
    pub host: Arc<dyn HostLifecycle>,
    pub notifier: Arc<dyn Notifier>,
}

pub struct Marketplace {
    config: GalleryConfig,
    ports: Ports,
    store: ArtworkStore,
    upload: UploadFlow,
    search: ArtistSearch,
    swipe: Option<SwipeEngine>,
    liked: Vec<Artwork>,
    tab: Tab,
    mounted: bool,
    notification_sent: Acknowledgement,
}

impl Marketplace {
    pub(crate) fn new(
        config: GalleryConfig,
        store: ArtworkStore,
        upload: UploadFlow,
        ports: Ports,
    ) -> Self {
        Self {
            config,
            ports,
            store,
            upload,
            search: ArtistSearch::new(),
            swipe: None,
            liked: Vec::new(),
            tab: Tab::default(),
            mounted: false,
            notification_sent: Acknowledgement::default(),
        }
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn store(&self) -> &ArtworkStore {
        &self.store
    }

    /// Hydrate the store and tell the host the frame is ready. Only the first
    /// call does anything.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.store.hydrate();
        self.ports.host.ready();
        self.mounted = true;
        info!(uploaded = self.store.len(), "marketplace mounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Featured piece, then uploads, then samples.
    pub fn feed(&self) -> Vec<Artwork> {
        compose_feed(&self.store.snapshot())
    }

    pub fn layout(&self, viewport_width: u32) -> LayoutMode {
        LayoutMode::for_width(viewport_width, self.config.mobile_breakpoint)
    }

    // ---- tabs ----

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: Tab) {
        debug!(?tab, "tab changed");
        self.tab = tab;
    }

    /// "BROWSE ART"
    pub fn browse(&mut self) {
        self.set_tab(Tab::Browse);
    }

    // ---- swipe ----

    /// The running swipe session, if one has been started.
    pub fn swipe(&self) -> Option<&SwipeEngine> {
        self.swipe.as_ref()
    }

    /// Start a fresh session over the current feed, replacing any old one.
    pub fn start_swipe_session(&mut self) -> &SwipeEngine {
        let engine = SwipeEngine::with_threshold(self.feed(), self.config.swipe_threshold);
        debug!(artworks = engine.len(), "swipe session started");
        self.swipe.insert(engine)
    }

    /// Drag and button input before any session exists starts one.
    fn session(&mut self) -> &mut SwipeEngine {
        let engine = match self.swipe.take() {
            Some(engine) => engine,
            None => SwipeEngine::with_threshold(self.feed(), self.config.swipe_threshold),
        };
        self.swipe.insert(engine)
    }

    pub fn begin_drag(&mut self, pointer_x: f64) {
        self.session().begin_drag(pointer_x);
    }

    pub fn update_drag(&mut self, pointer_x: f64) {
        self.session().update_drag(pointer_x);
    }

    pub fn end_drag(&mut self) -> Option<SwipeDecision> {
        let decision = self.session().end_drag();
        self.record(decision)
    }

    pub fn like(&mut self) -> Option<SwipeDecision> {
        let decision = self.session().like();
        self.record(decision)
    }

    pub fn pass(&mut self) -> Option<SwipeDecision> {
        let decision = self.session().pass();
        self.record(decision)
    }

    fn record(&mut self, decision: Option<SwipeDecision>) -> Option<SwipeDecision> {
        if let Some(SwipeDecision::Liked(artwork)) = &decision {
            info!(artwork_id = %artwork.id, liked = self.liked.len() + 1, "liked artwork");
            self.liked.push(artwork.clone());
        }
        decision
    }

    /// Liked artworks in the order they were liked. Liking the same piece in
    /// two sessions lists it twice.
    pub fn liked(&self) -> &[Artwork] {
        &self.liked
    }

    pub fn liked_count(&self) -> usize {
        self.liked.len()
    }

    // ---- purchase / notifications ----

    /// "Buy" on a feed item. Returns `false` if `id` is not in the feed.
    pub fn purchase(&self, id: &ArtworkId) -> bool {
        let Some(artwork) = self.feed().into_iter().find(|a| &a.id == id) else {
            warn!(artwork_id = %id, "purchase of unknown artwork ignored");
            return false;
        };
        info!(artwork_id = %artwork.id, price = %artwork.price, "purchase requested");
        self.ports.payment.purchase(&artwork);
        self.ports.sink.emit(GalleryEvent::PurchaseRequested {
            artwork_id: artwork.id,
        });
        true
    }

    /// Broadcast the "new art" notification. Failure leaves the shell as it
    /// was; the error is logged, sent to the sink and returned.
    pub async fn send_notification(&mut self) -> Result<(), GalleryError> {
        let notification = Notification::new_art_available();
        match self.ports.notifier.send(&notification).await {
            Ok(()) => {
                let now = self.ports.clock.now();
                self.notification_sent
                    .raise(now, self.config.acknowledgement_duration());
                info!("notification delivered");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "notification failed");
                let reason = e.to_string();
                self.ports.sink.emit(GalleryEvent::NotificationFailed {
                    reason: reason.clone(),
                });
                Err(GalleryError::NotificationFailed(reason))
            }
        }
    }

    /// "Sent!"
    pub fn notification_acknowledged(&self) -> bool {
        self.notification_sent.is_visible(self.ports.clock.now())
    }

    // ---- upload ----

    /// Upload step 1. A running swipe session is dropped because the feed
    /// changed underneath it.
    pub async fn select_image(&mut self, upload: ImageUpload) -> Result<ArtworkId, GalleryError> {
        self.store.hydrate();
        let id = self.upload.select_image(&mut self.store, upload).await?;
        self.swipe = None;
        Ok(id)
    }

    /// Upload step 2, from raw form fields. On success the shell returns to
    /// the browse tab.
    pub fn submit_upload(
        &mut self,
        title: &str,
        description: &str,
        price: &str,
        artist: &str,
    ) -> Result<ArtworkId, GalleryError> {
        let form = UploadForm::parse(title, description, price, artist)?;
        let id = self
            .upload
            .submit_metadata(&mut self.store, form, self.ports.clock.now());
        self.swipe = None;
        self.set_tab(Tab::Browse);
        Ok(id)
    }

    pub fn upload_pending(&self) -> bool {
        self.upload.pending_image().is_some()
    }

    /// "Artwork uploaded successfully!"
    pub fn upload_acknowledged(&self) -> bool {
        self.upload.success().is_visible(self.ports.clock.now())
    }

    // ---- artist search ----

    pub fn artist_search(&self) -> &ArtistSearch {
        &self.search
    }

    pub fn set_artist_query(&mut self, query: &str) {
        self.search.set_query(query);
    }

    pub fn select_artist(&mut self, artist: &str) {
        self.search.select(artist);
    }

    pub fn clear_artist_search(&mut self) {
        self.search.clear();
    }

    pub fn visible_artists(&self) -> Vec<String> {
        self.search.visible_artists(&self.feed())
    }

    pub fn visible_artworks(&self) -> Vec<Artwork> {
        self.search.visible_artworks(&self.feed())
    }

    pub fn no_artist_matches(&self) -> bool {
        self.search.no_matches(&self.feed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::{Duration, TimeZone, Utc};
    use tracing_test::traced_test;

    use crate::app::MarketplaceBuilder;
    use crate::impls::{InMemoryKeyValueStore, MemoryEventSink};
    use crate::ports::{FixedClock, KeyValueStore, NotifyError};

    const PNG: &[u8] = &[0x89, b'P', b'N', b'G'];

    #[derive(Default)]
    struct CountingHost(AtomicUsize);

    impl HostLifecycle for CountingHost {
        fn ready(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[derive(Default)]
    struct RecordingPayment(Mutex<Vec<ArtworkId>>);

    impl PaymentCapability for RecordingPayment {
        fn purchase(&self, artwork: &Artwork) {
            self.0.lock().unwrap().push(artwork.id.clone());
        }
    }

    struct FailingNotifier;

    #[async_trait]
    impl Notifier for FailingNotifier {
        async fn send(&self, _: &Notification) -> Result<(), NotifyError> {
            Err(NotifyError::NotEnabled)
        }
    }

    struct Harness {
        market: Marketplace,
        clock: Arc<FixedClock>,
        sink: Arc<MemoryEventSink>,
        host: Arc<CountingHost>,
        payment: Arc<RecordingPayment>,
        kv: Arc<InMemoryKeyValueStore>,
    }

    fn harness_with(kv: InMemoryKeyValueStore) -> Harness {
        let clock = Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        ));
        let sink = Arc::new(MemoryEventSink::new());
        let host = Arc::new(CountingHost::default());
        let payment = Arc::new(RecordingPayment::default());
        let kv = Arc::new(kv);
        let market = MarketplaceBuilder::new()
            .clock(clock.clone())
            .event_sink(sink.clone())
            .host(host.clone())
            .payment(payment.clone())
            .key_value(kv.clone())
            .build()
            .unwrap();
        Harness {
            market,
            clock,
            sink,
            host,
            payment,
            kv,
        }
    }

    fn harness() -> Harness {
        harness_with(InMemoryKeyValueStore::new())
    }

    #[test]
    fn ready_is_signalled_once() {
        let mut h = harness();
        h.market.mount();
        h.market.mount();
        assert!(h.market.is_mounted());
        assert_eq!(h.host.0.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn mount_hydrates_uploads_into_the_feed() {
        let kv = InMemoryKeyValueStore::new().with_entry(
            "dna-contemporary-artworks",
            r#"[{"id":"u1","title":"Kept","description":"d","price":5,"artist":"Me"}]"#,
        );
        let mut h = harness_with(kv);
        h.market.mount();

        let feed = h.market.feed();
        assert_eq!(feed.len(), 9);
        assert_eq!(feed[0].id.as_str(), "featured-1");
        assert_eq!(feed[1].title, "Kept");
        assert_eq!(feed[1].image.as_str(), "/placeholder.svg");
        assert_eq!(feed[2].id.as_str(), "sample-1");
    }

    #[test]
    fn corrupt_slot_still_mounts() {
        let kv = InMemoryKeyValueStore::new().with_entry("dna-contemporary-artworks", "{oops");
        let mut h = harness_with(kv);
        h.market.mount();

        assert_eq!(h.market.feed().len(), 8);
        assert!(matches!(
            h.sink.events().as_slice(),
            [GalleryEvent::PersistenceCorrupt { .. }]
        ));
    }

    #[test]
    fn swiping_collects_likes() {
        let mut h = harness();
        h.market.mount();

        h.market.begin_drag(0.0);
        h.market.update_drag(150.0);
        assert!(matches!(h.market.end_drag(), Some(SwipeDecision::Liked(_))));
        assert!(matches!(h.market.pass(), Some(SwipeDecision::Passed(_))));
        assert!(h.market.like().is_some());

        assert_eq!(h.market.liked_count(), 2);
        assert_eq!(h.market.liked()[0].id.as_str(), "featured-1");
        assert_eq!(h.market.liked()[1].id.as_str(), "sample-2");
    }

    #[test]
    fn session_runs_out_and_restarts() {
        let mut h = harness();
        h.market.mount();
        for _ in 0..8 {
            assert!(h.market.like().is_some());
        }
        assert!(h.market.like().is_none());
        assert!(h.market.swipe().is_some_and(|s| s.state().is_terminal()));
        assert_eq!(h.market.liked_count(), 8);

        h.market.start_swipe_session();
        assert!(h.market.pass().is_some());
        assert_eq!(h.market.liked_count(), 8);
    }

    #[test]
    fn swipe_uses_configured_threshold() {
        let clock = Arc::new(FixedClock::new(Utc::now()));
        let mut market = MarketplaceBuilder::new()
            .clock(clock)
            .config(GalleryConfig {
                swipe_threshold: 20.0,
                ..GalleryConfig::default()
            })
            .build()
            .unwrap();
        market.begin_drag(0.0);
        market.update_drag(-21.0);
        assert!(matches!(market.end_drag(), Some(SwipeDecision::Passed(_))));
    }

    #[test]
    fn layout_switches_at_breakpoint() {
        let h = harness();
        assert_eq!(h.market.layout(767), LayoutMode::Swipe);
        assert_eq!(h.market.layout(768), LayoutMode::Grid);
    }

    #[test]
    fn purchase_goes_to_payment_and_sink() {
        let h = harness();
        assert!(h.market.purchase(&ArtworkId::new("featured-1")));
        assert!(!h.market.purchase(&ArtworkId::new("nope")));

        assert_eq!(
            *h.payment.0.lock().unwrap(),
            vec![ArtworkId::new("featured-1")]
        );
        assert_eq!(
            h.sink.events(),
            vec![GalleryEvent::PurchaseRequested {
                artwork_id: ArtworkId::new("featured-1")
            }]
        );
    }

    #[tokio::test]
    async fn notification_acknowledged_for_three_seconds() {
        let mut h = harness();
        h.market.send_notification().await.unwrap();
        assert!(h.market.notification_acknowledged());

        h.clock.advance(Duration::seconds(3));
        assert!(!h.market.notification_acknowledged());
    }

    #[tokio::test]
    #[traced_test]
    async fn failed_notification_is_reported_and_not_acknowledged() {
        let sink = Arc::new(MemoryEventSink::new());
        let mut market = MarketplaceBuilder::new()
            .event_sink(sink.clone())
            .notifier(Arc::new(FailingNotifier))
            .build()
            .unwrap();

        let err = market.send_notification().await.unwrap_err();

        assert!(matches!(err, GalleryError::NotificationFailed(_)));
        assert!(!market.notification_acknowledged());
        assert!(matches!(
            sink.events().as_slice(),
            [GalleryEvent::NotificationFailed { .. }]
        ));
        assert!(logs_contain("notification failed"));
    }

    #[tokio::test]
    async fn upload_lands_in_feed_and_returns_to_browse() {
        let mut h = harness();
        h.market.mount();
        h.market.set_tab(Tab::Upload);

        let id = h
            .market
            .select_image(ImageUpload::new(PNG, "image/png"))
            .await
            .unwrap();
        assert!(h.market.upload_pending());
        assert_eq!(h.market.tab(), Tab::Upload);

        let written = h.market.submit_upload("Dawn", "Oil", "300", "Mia").unwrap();

        assert_eq!(written, id);
        assert!(!h.market.upload_pending());
        assert!(h.market.upload_acknowledged());
        assert_eq!(h.market.tab(), Tab::Browse);

        let feed = h.market.feed();
        assert_eq!(feed.len(), 9);
        assert_eq!(feed[1].id, id);
        assert_eq!(feed[1].title, "Dawn");
        assert!(h.kv.get("dna-contemporary-artworks").unwrap().is_some());

        h.clock.advance(Duration::seconds(3));
        assert!(!h.market.upload_acknowledged());
    }

    #[tokio::test]
    async fn upload_before_mount_keeps_saved_artworks() {
        let kv = InMemoryKeyValueStore::new().with_entry(
            "dna-contemporary-artworks",
            r#"[{"id":"old","title":"Kept","description":"d","price":5,"artist":"Me"}]"#,
        );
        let mut h = harness_with(kv);

        h.market
            .select_image(ImageUpload::new(PNG, "image/png"))
            .await
            .unwrap();
        h.market.submit_upload("T", "D", "5", "A").unwrap();
        h.market.mount();

        let titles: Vec<String> = h.market.store().snapshot().into_iter().map(|a| a.title).collect();
        assert_eq!(titles, vec!["Kept", "T"]);

        let raw = h.kv.get("dna-contemporary-artworks").unwrap().unwrap();
        assert!(raw.contains("\"Kept\""));
        assert!(raw.contains("\"T\""));
        assert_eq!(h.host.0.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn upload_drops_running_swipe_session() {
        let mut h = harness();
        h.market.mount();
        h.market.start_swipe_session();
        assert_eq!(h.market.swipe().map(SwipeEngine::len), Some(8));

        h.market
            .select_image(ImageUpload::new(PNG, "image/png"))
            .await
            .unwrap();
        assert!(h.market.swipe().is_none());

        h.market.start_swipe_session();
        assert_eq!(h.market.swipe().map(SwipeEngine::len), Some(9));
    }

    #[test]
    fn malformed_form_is_refused_and_tab_kept() {
        let mut h = harness();
        h.market.mount();
        h.market.set_tab(Tab::Upload);

        let err = h.market.submit_upload("T", "D", "abc", "A").unwrap_err();

        assert!(matches!(err, GalleryError::MalformedUpload(_)));
        assert_eq!(h.market.tab(), Tab::Upload);
        assert!(h.market.store().is_empty());
    }

    #[test]
    fn artist_search_over_feed() {
        let mut h = harness();
        h.market.mount();
        h.market.submit_upload("Dawn", "Oil", "300", "Mia").unwrap();

        assert_eq!(
            h.market.visible_artists(),
            vec!["Artist", "Contemporary Artist", "Mia"]
        );

        h.market.set_artist_query("CONTEMP");
        assert_eq!(h.market.visible_artists(), vec!["Contemporary Artist"]);

        h.market.select_artist("Artist");
        assert_eq!(h.market.visible_artworks().len(), 7);

        h.market.set_artist_query("zzz");
        assert!(h.market.no_artist_matches());

        h.market.clear_artist_search();
        assert!(h.market.artist_search().selected().is_none());
        assert_eq!(h.market.visible_artworks().len(), 9);
    }
}
