//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **InMemoryKeyValueStore** / **FileKeyValueStore**: 永続スロット
//! - **TracingEventSink** / **MemoryEventSink**: 観測
//! - **LoggingPayment** / **LoggingHost** / **LoggingNotifier**: ホスト機能のスタブ

pub mod event_sinks;
pub mod file_kv;
pub mod inmem_kv;
pub mod logging;

pub use self::event_sinks::{MemoryEventSink, TracingEventSink};
pub use self::file_kv::FileKeyValueStore;
pub use self::inmem_kv::InMemoryKeyValueStore;
pub use self::logging::{LoggingHost, LoggingNotifier, LoggingPayment};
