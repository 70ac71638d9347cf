//! PaymentCapability port - ウォレット決済
//!
//! The marketplace hands over an artwork and moves on; settlement is never
//! awaited.

use crate::domain::Artwork;

pub trait PaymentCapability: Send + Sync {
    fn purchase(&self, artwork: &Artwork);
}
