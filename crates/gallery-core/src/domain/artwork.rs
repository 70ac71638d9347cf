//! Artwork - 作品レコードと永続化用の形

use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::GalleryError;
use super::ids::ArtworkId;

/// Where an artwork's image comes from.
///
/// Data URIs are transient: they never enter durable storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum ImageRef {
    /// Static asset path (e.g. "/placeholder.svg").
    Asset(String),

    /// Embedded `data:<mime>;base64,...` payload.
    DataUri(String),
}

impl ImageRef {
    pub fn asset(path: impl Into<String>) -> Self {
        Self::Asset(path.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            ImageRef::Asset(path) => path,
            ImageRef::DataUri(uri) => uri,
        }
    }

    pub fn is_data_uri(&self) -> bool {
        matches!(self, ImageRef::DataUri(_))
    }
}

/// Non-negative, finite amount. Currency is implicit (USD) and display-only.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(pub(super) f64);

impl Price {
    pub fn new(amount: f64) -> Result<Self, GalleryError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(GalleryError::MalformedUpload(format!(
                "price must be a non-negative number, got {amount}"
            )));
        }
        Ok(Self(amount))
    }

    pub fn amount(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Price {
    type Error = GalleryError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

/// One sellable piece.
///
/// Design: the Artwork Store is the single owner of these records.
/// Other components only ever see cloned snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: ArtworkId,
    pub title: String,
    pub description: String,
    pub image: ImageRef,
    pub price: Price,
    pub artist: String,
}

/// Partial update for `ArtworkStore::amend`. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtworkPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<ImageRef>,
    pub price: Option<Price>,
    pub artist: Option<String>,
}

impl ArtworkPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply this patch in place. The id is never touched.
    pub fn apply(self, artwork: &mut Artwork) {
        if let Some(title) = self.title {
            artwork.title = title;
        }
        if let Some(description) = self.description {
            artwork.description = description;
        }
        if let Some(image) = self.image {
            artwork.image = image;
        }
        if let Some(price) = self.price {
            artwork.price = price;
        }
        if let Some(artist) = self.artist {
            artwork.artist = artist;
        }
    }
}

/// The durable shape of an artwork: everything except the image.
///
/// `deny_unknown_fields` + `Price`'s `try_from` make deserialization strict,
/// so a slot with any unexpected shape fails as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoredArtwork {
    pub id: ArtworkId,
    pub title: String,
    pub description: String,
    pub price: Price,
    pub artist: String,
}

impl StoredArtwork {
    /// Rehydrate with the given placeholder image.
    pub fn into_artwork(self, placeholder: ImageRef) -> Artwork {
        Artwork {
            id: self.id,
            title: self.title,
            description: self.description,
            image: placeholder,
            price: self.price,
            artist: self.artist,
        }
    }
}

impl From<&Artwork> for StoredArtwork {
    fn from(artwork: &Artwork) -> Self {
        Self {
            id: artwork.id.clone(),
            title: artwork.title.clone(),
            description: artwork.description.clone(),
            price: artwork.price,
            artist: artwork.artist.clone(),
        }
    }
}
