//! Upload - 2 ステップのアップロード
//!
//! Pick an image, then fill in the details.
//!
//! Step 1 (`select_image`) always appends a fresh placeholder artwork carrying
//! the decoded image, even if an earlier placeholder is still waiting for its
//! details. Step 2 (`submit_metadata`) amends whatever artwork is last in the
//! store. Picking two images before submitting therefore leaves one
//! placeholder behind.

use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use crate::domain::{
    Acknowledgement, Artwork, ArtworkId, ArtworkPatch, GalleryError, ImageRef, Price,
};
use crate::ports::IdGenerator;
use crate::store::ArtworkStore;

const PENDING_TITLE: &str = "New Artwork";
const PENDING_DESCRIPTION: &str = "Uploaded artwork";
const PENDING_PRICE: f64 = 1000.0;
const PENDING_ARTIST: &str = "Artist";

/// Raw file handed over by the host's file picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub bytes: Vec<u8>,
    pub mime: String,
}

impl ImageUpload {
    pub fn new(bytes: impl Into<Vec<u8>>, mime: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            mime: mime.into(),
        }
    }

    fn validate(&self, max_bytes: usize) -> Result<(), GalleryError> {
        if !self.mime.starts_with("image/") {
            return Err(GalleryError::MalformedUpload(format!(
                "expected an image, got '{}'",
                self.mime
            )));
        }
        if self.bytes.is_empty() {
            return Err(GalleryError::MalformedUpload("image is empty".into()));
        }
        if self.bytes.len() > max_bytes {
            return Err(GalleryError::MalformedUpload(format!(
                "image is {} bytes, limit is {max_bytes}",
                self.bytes.len()
            )));
        }
        Ok(())
    }
}

/// `data:<mime>;base64,<payload>`
pub fn encode_data_uri(upload: &ImageUpload) -> String {
    format!("data:{};base64,{}", upload.mime, STANDARD.encode(&upload.bytes))
}

/// Validated details form.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadForm {
    pub title: String,
    pub description: String,
    pub price: Price,
    pub artist: String,
}

impl UploadForm {
    /// Input boundary: every field is required and the price must be a
    /// non-negative number.
    pub fn parse(
        title: &str,
        description: &str,
        price: &str,
        artist: &str,
    ) -> Result<Self, GalleryError> {
        let title = required("title", title)?;
        let description = required("description", description)?;
        let artist = required("artist", artist)?;
        let amount: f64 = required("price", price)?
            .parse()
            .map_err(|_| GalleryError::MalformedUpload(format!("price '{price}' is not a number")))?;

        Ok(Self {
            title,
            description,
            price: Price::new(amount)?,
            artist,
        })
    }

    fn into_patch(self) -> ArtworkPatch {
        ArtworkPatch {
            title: Some(self.title),
            description: Some(self.description),
            price: Some(self.price),
            artist: Some(self.artist),
            image: None,
        }
    }
}

fn required(field: &str, value: &str) -> Result<String, GalleryError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(GalleryError::MalformedUpload(format!("{field} is required")));
    }
    Ok(value.to_string())
}

pub struct UploadFlow {
    ids: Arc<dyn IdGenerator>,
    max_image_bytes: usize,
    acknowledgement: Duration,
    pending_image: Option<ImageRef>,
    success: Acknowledgement,
}

impl UploadFlow {
    pub fn new(ids: Arc<dyn IdGenerator>, max_image_bytes: usize, acknowledgement: Duration) -> Self {
        Self {
            ids,
            max_image_bytes,
            acknowledgement,
            pending_image: None,
            success: Acknowledgement::default(),
        }
    }

    /// Image chosen but not yet submitted.
    pub fn pending_image(&self) -> Option<&ImageRef> {
        self.pending_image.as_ref()
    }

    /// "Artwork uploaded successfully" banner.
    pub fn success(&self) -> &Acknowledgement {
        &self.success
    }

    /// Step 1. Decodes off the event thread; the store is only touched once
    /// decoding has finished.
    pub async fn select_image(
        &mut self,
        store: &mut ArtworkStore,
        upload: ImageUpload,
    ) -> Result<ArtworkId, GalleryError> {
        upload.validate(self.max_image_bytes)?;
        debug!(mime = %upload.mime, bytes = upload.bytes.len(), "decoding image");

        let uri = tokio::task::spawn_blocking(move || encode_data_uri(&upload))
            .await
            .map_err(|e| GalleryError::ImageDecode(e.to_string()))?;
        let image = ImageRef::DataUri(uri);

        let artwork = Artwork {
            id: self.ids.generate_artwork_id(),
            title: PENDING_TITLE.to_string(),
            description: PENDING_DESCRIPTION.to_string(),
            image: image.clone(),
            price: Price::new(PENDING_PRICE)?,
            artist: PENDING_ARTIST.to_string(),
        };
        let id = artwork.id.clone();
        self.pending_image = Some(image);
        store.append(artwork);
        info!(artwork_id = %id, "image selected, placeholder artwork created");
        Ok(id)
    }

    /// Step 2. Amends the last artwork in the store, or creates one if the
    /// store is empty. Returns the id of the artwork written.
    pub fn submit_metadata(
        &mut self,
        store: &mut ArtworkStore,
        form: UploadForm,
        now: DateTime<Utc>,
    ) -> ArtworkId {
        store.hydrate();
        let id = match store.last().map(|a| a.id.clone()) {
            Some(id) => {
                store.amend(&id, form.into_patch());
                id
            }
            None => {
                let image = self
                    .pending_image
                    .clone()
                    .unwrap_or_else(|| store.placeholder().clone());
                let artwork = Artwork {
                    id: self.ids.generate_artwork_id(),
                    title: form.title,
                    description: form.description,
                    image,
                    price: form.price,
                    artist: form.artist,
                };
                let id = artwork.id.clone();
                store.append(artwork);
                id
            }
        };

        self.pending_image = None;
        self.success.raise(now, self.acknowledgement);
        info!(artwork_id = %id, "artwork details submitted");
        id
    }
}
