//! Store - 作品ストア
//!
//! The single owner of user-submitted artworks.
//!
//! Design:
//! - Single writer. Every mutation takes `&mut self`; there are no locks.
//! - Memory is authoritative. The durable slot is a best-effort mirror written
//!   after each successful append/amend.
//! - Nothing is written before the store has been hydrated. The first
//!   mutation hydrates on demand, so an early write extends the durable data
//!   instead of replacing it.
//! - An empty store never writes `[]`.

mod persistence;

pub use persistence::PersistenceAdapter;

use tracing::debug;

use crate::domain::{Artwork, ArtworkId, ArtworkPatch, ImageRef};

pub struct ArtworkStore {
    records: Vec<Artwork>,
    persistence: PersistenceAdapter,
    placeholder: ImageRef,
    hydrated: bool,
}

impl ArtworkStore {
    /// An empty, not yet hydrated store.
    pub fn new(persistence: PersistenceAdapter, placeholder: ImageRef) -> Self {
        Self {
            records: Vec::new(),
            persistence,
            placeholder,
            hydrated: false,
        }
    }

    /// Replace the in-memory sequence with what the durable slot holds.
    /// Recovered records get the placeholder image.
    pub fn initialize(&mut self) {
        self.records = self
            .persistence
            .load()
            .into_iter()
            .map(|stored| stored.into_artwork(self.placeholder.clone()))
            .collect();
        self.hydrated = true;
        debug!(records = self.records.len(), "artwork store hydrated");
    }

    /// `initialize` unless that already happened.
    pub fn hydrate(&mut self) {
        if !self.hydrated {
            self.initialize();
        }
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    /// Insert at the end. Ids are trusted as given; duplicates coexist.
    pub fn append(&mut self, artwork: Artwork) {
        self.hydrate();
        debug!(artwork_id = %artwork.id, "append artwork");
        self.records.push(artwork);
        self.persist();
    }

    /// Patch the first record with `id`. Returns `false` (and writes nothing)
    /// when no record matches. An empty patch matches but writes nothing.
    pub fn amend(&mut self, id: &ArtworkId, patch: ArtworkPatch) -> bool {
        self.hydrate();
        let Some(artwork) = self.records.iter_mut().find(|a| &a.id == id) else {
            debug!(artwork_id = %id, "amend: no such artwork");
            return false;
        };
        if patch.is_empty() {
            return true;
        }
        patch.apply(artwork);
        debug!(artwork_id = %id, "amended artwork");
        self.persist();
        true
    }

    /// Owned copy of the current sequence.
    pub fn snapshot(&self) -> Vec<Artwork> {
        self.records.clone()
    }

    pub fn get(&self, id: &ArtworkId) -> Option<&Artwork> {
        self.records.iter().find(|a| &a.id == id)
    }

    pub fn last(&self) -> Option<&Artwork> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn placeholder(&self) -> &ImageRef {
        &self.placeholder
    }

    fn persist(&self) {
        if !self.hydrated || self.records.is_empty() {
            return;
        }
        self.persistence.save(&self.records);
    }
}
