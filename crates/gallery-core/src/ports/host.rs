//! HostLifecycle port - ミニアプリのホスト
//!
//! The host expects one "ready" signal after the first mount. No reply.

pub trait HostLifecycle: Send + Sync {
    fn ready(&self);
}
