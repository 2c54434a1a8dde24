//! [`RecordStore`] over the SQLite database.

use super::Database;
use crate::{
    error::Result,
    models::{Artist, Show, Venue},
    store::RecordStore,
};

impl RecordStore for Database {
    fn all_venues(&self) -> Result<Vec<Venue>> {
        self.list_venues()
    }

    fn all_artists(&self) -> Result<Vec<Artist>> {
        self.list_artists()
    }

    fn all_shows(&self) -> Result<Vec<Show>> {
        self.list_shows()
    }

    fn find_venue(&self, id: u64) -> Result<Option<Venue>> {
        self.get_venue(id)
    }

    fn find_artist(&self, id: u64) -> Result<Option<Artist>> {
        self.get_artist(id)
    }

    fn venues_named(&self, term: &str) -> Result<Vec<Venue>> {
        self.find_venues_by_name(term)
    }

    fn artists_named(&self, term: &str) -> Result<Vec<Artist>> {
        self.find_artists_by_name(term)
    }

    fn shows_for_venue(&self, venue_id: u64) -> Result<Vec<Show>> {
        self.get_shows_for_venue(venue_id)
    }

    fn shows_for_artist(&self, artist_id: u64) -> Result<Vec<Show>> {
        self.get_shows_for_artist(artist_id)
    }
}
