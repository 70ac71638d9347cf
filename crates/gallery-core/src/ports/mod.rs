//! Ports - 抽象化レイヤー
//!
//! Hexagonal Architecture の「ポート」。各 trait はホスト環境
//! （ローカルストレージ、ウォレット、通知、ミニアプリのライフサイクル）への
//! インターフェースで、実装の詳細を隠蔽します。
//!
//! # 設計原則
//! - メモリ上の ArtworkStore が正本（source of truth）
//! - KeyValueStore はベストエフォートのミラー
//! - ホスト側の機能はすべて不透明な capability として扱う

pub mod clock;
pub mod event_sink;
pub mod host;
pub mod id_generator;
pub mod key_value;
pub mod notifier;
pub mod payment;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::event_sink::EventSink;
pub use self::host::HostLifecycle;
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::key_value::{KeyValueStore, StorageError};
pub use self::notifier::{Notification, Notifier, NotifyError};
pub use self::payment::PaymentCapability;
