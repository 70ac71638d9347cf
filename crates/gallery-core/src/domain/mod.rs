//! Domain - ドメインモデル（ids, artworks, decisions, states, errors, events）

pub mod acknowledgement;
pub mod artwork;
pub mod catalog;
pub mod decision;
pub mod errors;
pub mod events;
pub mod ids;
pub mod state;

pub use acknowledgement::Acknowledgement;
pub use artwork::{Artwork, ArtworkPatch, ImageRef, Price, StoredArtwork};
pub use decision::{SWIPE_THRESHOLD, SwipeDecision, Verdict, judge};
pub use errors::{ErrorKind, GalleryError};
pub use events::GalleryEvent;
pub use ids::ArtworkId;
pub use state::{LayoutMode, SwipeState, Tab};
