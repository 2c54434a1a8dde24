//! In-memory record store.
//!
//! [`MemoryStore`] holds a fixed snapshot of venues, artists and shows in
//! plain vectors. It performs no referential checks, which makes it handy for
//! exercising the query layer against deliberately broken data.
//!
//! # Example
//!
//! ```
//! use marquee_core::{store::{MemoryStore, RecordStore}, Venue};
//!
//! let store = MemoryStore::new().with_venue(Venue {
//!     id: 1,
//!     name: "The Musical Hop".to_string(),
//!     city: "San Francisco".to_string(),
//!     state: "CA".to_string(),
//!     address: None,
//!     phone: None,
//!     image_link: None,
//!     facebook_link: None,
//!     website_link: None,
//!     genres: vec![],
//!     seeking_talent: false,
//!     seeking_description: None,
//! });
//! assert_eq!(store.venues_named("HOP").unwrap().len(), 1);
//! ```

use super::RecordStore;
use crate::{
    error::Result,
    models::{Artist, Show, Venue},
    query::name_matches,
};

/// Vector-backed snapshot implementing [`RecordStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    venues: Vec<Venue>,
    artists: Vec<Artist>,
    shows: Vec<Show>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from complete collections, kept in the given order.
    #[must_use]
    pub fn from_parts(venues: Vec<Venue>, artists: Vec<Artist>, shows: Vec<Show>) -> Self {
        Self {
            venues,
            artists,
            shows,
        }
    }

    #[must_use]
    pub fn with_venue(mut self, venue: Venue) -> Self {
        self.venues.push(venue);
        self
    }

    #[must_use]
    pub fn with_artist(mut self, artist: Artist) -> Self {
        self.artists.push(artist);
        self
    }

    #[must_use]
    pub fn with_show(mut self, show: Show) -> Self {
        self.shows.push(show);
        self
    }
}

impl RecordStore for MemoryStore {
    fn all_venues(&self) -> Result<Vec<Venue>> {
        Ok(self.venues.clone())
    }

    fn all_artists(&self) -> Result<Vec<Artist>> {
        Ok(self.artists.clone())
    }

    fn all_shows(&self) -> Result<Vec<Show>> {
        Ok(self.shows.clone())
    }

    fn find_venue(&self, id: u64) -> Result<Option<Venue>> {
        Ok(self.venues.iter().find(|v| v.id == id).cloned())
    }

    fn find_artist(&self, id: u64) -> Result<Option<Artist>> {
        Ok(self.artists.iter().find(|a| a.id == id).cloned())
    }

    fn venues_named(&self, term: &str) -> Result<Vec<Venue>> {
        Ok(self
            .venues
            .iter()
            .filter(|v| name_matches(&v.name, term))
            .cloned()
            .collect())
    }

    fn artists_named(&self, term: &str) -> Result<Vec<Artist>> {
        Ok(self
            .artists
            .iter()
            .filter(|a| name_matches(&a.name, term))
            .cloned()
            .collect())
    }

    fn shows_for_venue(&self, venue_id: u64) -> Result<Vec<Show>> {
        Ok(self
            .shows
            .iter()
            .filter(|s| s.venue_id == venue_id)
            .cloned()
            .collect())
    }

    fn shows_for_artist(&self, artist_id: u64) -> Result<Vec<Show>> {
        Ok(self
            .shows
            .iter()
            .filter(|s| s.artist_id == artist_id)
            .cloned()
            .collect())
    }
}
