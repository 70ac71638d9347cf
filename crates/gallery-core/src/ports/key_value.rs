//! KeyValueStore port - ブラウザのローカルストレージ相当
//!
//! A flat string -> string store, synchronous like `localStorage`.
//!
//! # 実装
//! - InMemoryKeyValueStore（テスト用、quota 指定可）
//! - FileKeyValueStore（CLI 用、key ごとに 1 ファイル）

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("quota exceeded: {needed} bytes needed, {available} available")]
    QuotaExceeded { needed: usize, available: usize },

    #[error("invalid key '{0}'")]
    InvalidKey(String),

    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub trait KeyValueStore: Send + Sync {
    /// `Ok(None)` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
