//! EventSink port - イベント記録の抽象化
//!
//! # 実装
//! - TracingEventSink: `tracing` に流す
//! - MemoryEventSink: 記録するだけ（テスト・埋め込み用）

use crate::domain::GalleryEvent;

/// EventSink はドメインイベントを記録
///
/// Emitting never fails from the caller's point of view.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: GalleryEvent);
}
