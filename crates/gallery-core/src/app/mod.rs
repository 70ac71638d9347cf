//! App - アプリケーション層
//!
//! ports と store を組み合わせて、マーケットプレイスの画面状態を実装します。
//!
//! # 主要コンポーネント
//! - **MarketplaceBuilder**: ポートのワイヤリングと起動時検証
//! - **Marketplace**: タブ、スワイプ、アップロード、アーティスト検索、通知

pub mod builder;
pub mod marketplace;

pub use self::builder::MarketplaceBuilder;
pub use self::marketplace::Marketplace;
