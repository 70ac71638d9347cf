//! gallery-core
//!
//! Core of the DNA Contemporary artwork marketplace client.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, artwork, catalog, decision, state, errors, events）
//! - **ports**: 抽象化レイヤー（KeyValueStore, Clock, IdGenerator, EventSink, Notifier, PaymentCapability, HostLifecycle）
//! - **impls**: 実装（InMemoryKeyValueStore, FileKeyValueStore, logging stand-ins）
//! - **store**: ArtworkStore と永続化アダプタ
//! - **artists** / **swipe** / **upload**: ストア上のビュー操作
//! - **app**: MarketplaceBuilder と Marketplace（ビューシェル）
//! - **config**: GalleryConfig

pub mod app;
pub mod artists;
pub mod config;
pub mod domain;
pub mod impls;
pub mod ports;
pub mod store;
pub mod swipe;
pub mod upload;

pub use app::{Marketplace, MarketplaceBuilder};
pub use config::GalleryConfig;
pub use domain::GalleryError;
