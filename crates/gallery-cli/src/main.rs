use std::error::Error;
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use gallery_core::domain::{SwipeDecision, Tab};
use gallery_core::impls::FileKeyValueStore;
use gallery_core::upload::ImageUpload;
use gallery_core::{GalleryConfig, Marketplace, MarketplaceBuilder};

/// 1x1 transparent PNG
const SAMPLE_PNG: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1f,
    0x15, 0xc4, 0x89, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9c, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0d, 0x0a, 0x2d, 0xb4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
];

#[derive(Debug, Serialize)]
struct Summary {
    feed: usize,
    uploaded: usize,
    liked: Vec<String>,
    artists: Vec<String>,
    notification_acknowledged: bool,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn load_config() -> Result<GalleryConfig, Box<dyn Error>> {
    match std::env::var("GALLERY_CONFIG") {
        Ok(path) => {
            info!(%path, "loading config");
            Ok(GalleryConfig::load(path)?)
        }
        Err(_) => Ok(GalleryConfig::default()),
    }
}

/// スワイプセッション：交互に like / pass、途中で短いドラッグも混ぜる
fn swipe_through(market: &mut Marketplace) {
    market.start_swipe_session();

    // 閾値に届かないドラッグは何も決めない
    market.begin_drag(0.0);
    market.update_drag(40.0);
    let nudge = market.end_drag();
    info!(decided = nudge.is_some(), "short drag");

    let mut turn = 0usize;
    loop {
        let decision = if turn % 2 == 0 {
            market.begin_drag(0.0);
            market.update_drag(150.0);
            market.end_drag()
        } else {
            market.pass()
        };
        match decision {
            Some(SwipeDecision::Liked(a)) => println!("  ♥ {} by {} ({})", a.title, a.artist, a.price),
            Some(SwipeDecision::Passed(a)) => println!("  ✕ {}", a.title),
            None => break,
        }
        turn += 1;
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    // (A) 設定と永続スロットを用意
    let config = load_config()?;
    let data_dir = std::env::args().nth(1).unwrap_or_else(|| ".gallery".to_string());
    let kv = Arc::new(FileKeyValueStore::open(&data_dir)?);
    info!(dir = %kv.dir().display(), "using file storage");

    let mut market = MarketplaceBuilder::new().config(config).key_value(kv).build()?;

    // (B) マウント：保存済みアップロードを読み戻し、ホストに ready を通知
    market.mount();
    println!("feed: {} artworks ({} uploaded)", market.feed().len(), market.store().len());

    // (C) アップロード：画像を選んでから詳細を送信
    market.set_tab(Tab::Upload);
    market
        .select_image(ImageUpload::new(SAMPLE_PNG, "image/png"))
        .await?;
    let id = market.submit_upload(
        "Night Garden",
        "Acrylic on canvas",
        "480",
        "Mia Chen",
    )?;
    println!("uploaded {id}");

    // 不正なフォームは拒否される
    if let Err(e) = market.submit_upload("Untitled", "", "free", "Mia Chen") {
        warn!(error = %e, "form refused");
    }

    // (D) スワイプ
    println!("swipe:");
    swipe_through(&mut market);

    // (E) アーティスト検索
    market.set_tab(Tab::Artists);
    market.set_artist_query("mia");
    for artist in market.visible_artists() {
        market.select_artist(&artist);
        println!("{artist}: {} artworks", market.visible_artworks().len());
    }
    market.clear_artist_search();

    // (F) 購入と通知
    if let Some(first) = market.liked().first() {
        let first = first.id.clone();
        market.purchase(&first);
    }
    if let Err(e) = market.send_notification().await {
        warn!(error = %e, "notification not sent");
    }
    market.browse();

    let summary = Summary {
        feed: market.feed().len(),
        uploaded: market.store().len(),
        liked: market.liked().iter().map(|a| a.title.clone()).collect(),
        artists: market.visible_artists(),
        notification_acknowledged: market.notification_acknowledged(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
