//! Artists - アーティスト索引
//!
//! Derived, read-only views over a feed.
//!
//! Two different matching rules live here on purpose:
//! - artist *names* are searched case-insensitively by substring
//! - artworks are attributed by exact, case-sensitive artist equality
//!
//! Names sort by plain `str` ordering, so "Zed" comes before "ann".

use std::collections::BTreeSet;

use crate::domain::Artwork;

/// Distinct artist names, sorted ascending (case-sensitive).
pub fn list_artists(artworks: &[Artwork]) -> Vec<String> {
    artworks
        .iter()
        .map(|a| a.artist.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Names containing `query`, ignoring case. Empty query keeps everything.
pub fn filter_by_query(artists: &[String], query: &str) -> Vec<String> {
    if query.is_empty() {
        return artists.to_vec();
    }
    let needle = query.to_lowercase();
    artists
        .iter()
        .filter(|name| name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Artworks whose artist is exactly `artist`, in feed order.
pub fn artworks_by_artist(artworks: &[Artwork], artist: &str) -> Vec<Artwork> {
    artworks
        .iter()
        .filter(|a| a.artist == artist)
        .cloned()
        .collect()
}

/// State of the "Search by Artist" tab.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistSearch {
    query: String,
    selected: Option<String>,
}

impl ArtistSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Select `artist`, or deselect it if it is already selected.
    pub fn select(&mut self, artist: &str) {
        if self.selected.as_deref() == Some(artist) {
            self.selected = None;
        } else {
            self.selected = Some(artist.to_string());
        }
    }

    /// Drop both the selection and the query.
    pub fn clear(&mut self) {
        self.selected = None;
        self.query.clear();
    }

    /// Artist buttons to show for `feed`.
    pub fn visible_artists(&self, feed: &[Artwork]) -> Vec<String> {
        filter_by_query(&list_artists(feed), &self.query)
    }

    /// Artworks of the selected artist, or the whole feed when none is selected.
    pub fn visible_artworks(&self, feed: &[Artwork]) -> Vec<Artwork> {
        match &self.selected {
            Some(artist) => artworks_by_artist(feed, artist),
            None => feed.to_vec(),
        }
    }

    /// A non-empty query that matches nobody.
    pub fn no_matches(&self, feed: &[Artwork]) -> bool {
        !self.query.is_empty() && self.visible_artists(feed).is_empty()
    }
}
