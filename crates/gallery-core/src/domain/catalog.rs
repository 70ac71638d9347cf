//! Catalog - 固定カタログ
//!
//! The fixed catalog shipped with the marketplace.
//!
//! Every browsing surface (grid, swipe, artist search) shows the same feed:
//! the featured piece, then user uploads in store order, then the samples.

use super::artwork::{Artwork, ImageRef, Price};
use super::ids::ArtworkId;

/// Generic image used for samples and for rehydrated uploads.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

const SAMPLE_COUNT: usize = 7;

/// The headline piece, always first in the feed.
pub fn featured() -> Artwork {
    Artwork {
        id: ArtworkId::new("featured-1"),
        title: "Life After Death".to_string(),
        description: "A striking contemporary piece featuring a neon green skull with crossed \
                      spoon and syringe, exploring themes of addiction, mortality, and the \
                      fragility of life."
            .to_string(),
        image: ImageRef::asset("/LifeAfterDeath.png"),
        price: Price(2850.0),
        artist: "Contemporary Artist".to_string(),
    }
}

/// Sample pieces `sample-1..=sample-7`, titled `Artwork #2..#8`.
pub fn samples() -> Vec<Artwork> {
    (1..=SAMPLE_COUNT)
        .map(|n| Artwork {
            id: ArtworkId::new(format!("sample-{n}")),
            title: format!("Artwork #{}", n + 1),
            description: "Contemporary artwork with unique style and expression".to_string(),
            image: ImageRef::asset(PLACEHOLDER_IMAGE),
            price: Price(1250.0),
            artist: "Artist".to_string(),
        })
        .collect()
}

/// featured ++ uploaded ++ samples
pub fn compose_feed(uploaded: &[Artwork]) -> Vec<Artwork> {
    let mut feed = Vec::with_capacity(uploaded.len() + SAMPLE_COUNT + 1);
    feed.push(featured());
    feed.extend_from_slice(uploaded);
    feed.extend(samples());
    feed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_without_uploads_is_featured_then_samples() {
        let feed = compose_feed(&[]);
        assert_eq!(feed.len(), 8);
        assert_eq!(feed[0].id.as_str(), "featured-1");
        assert_eq!(feed[1].id.as_str(), "sample-1");
        assert_eq!(feed[1].title, "Artwork #2");
        assert_eq!(feed[7].title, "Artwork #8");
    }

    #[test]
    fn uploads_sit_between_featured_and_samples() {
        let mut upload = featured();
        upload.id = ArtworkId::new("u1");
        let feed = compose_feed(&[upload]);
        assert_eq!(feed.len(), 9);
        assert_eq!(feed[1].id.as_str(), "u1");
        assert_eq!(feed[2].id.as_str(), "sample-1");
    }
}
