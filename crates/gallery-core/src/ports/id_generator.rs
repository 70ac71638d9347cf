//! IdGenerator port - ID 生成の抽象化
//!
//! Artwork ids are timestamp-derived tokens. Using a ULID built from the
//! injected clock keeps them sortable and lets tests pin the timestamp part.
//!
//! # 実装
//! - **UlidGenerator**: ULID ベース

use crate::domain::ArtworkId;
use crate::ports::Clock;
use ulid::Ulid;

/// ULID の timestamp は 48 bit
const MAX_ULID_TIMESTAMP_MS: u64 = (1 << 48) - 1;

pub trait IdGenerator: Send + Sync {
    fn generate_artwork_id(&self) -> ArtworkId;
}

/// UlidGenerator は ULID ベースの ID 生成器
///
/// Two ids generated in the same millisecond still differ thanks to the
/// random part.
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn generate_artwork_id(&self) -> ArtworkId {
        let timestamp_ms = u64::try_from(self.clock.now().timestamp_millis())
            .unwrap_or(0)
            .min(MAX_ULID_TIMESTAMP_MS);
        let ulid = Ulid::from_parts(timestamp_ms, rand::random());
        ArtworkId::from(ulid)
    }
}
