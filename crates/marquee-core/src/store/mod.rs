//! The read capability the query layer needs from a record store.
//!
//! [`RecordStore`] is the seam between the pure view logic in
//! [`crate::query`] and wherever records actually live. Two implementations
//! ship with the crate:
//!
//! - [`crate::db::Database`]: the SQLite store used by the application
//! - [`MemoryStore`]: a vector-backed snapshot for tests and examples
//!
//! Every method is a synchronous read returning an owned snapshot. Name
//! searches must follow [`crate::query::name_matches`] so both stores agree
//! on what matches.

pub mod memory;

pub use memory::MemoryStore;

use crate::{
    error::Result,
    models::{Artist, Show, Venue},
};

/// Read-only access to venues, artists and shows.
pub trait RecordStore {
    /// Every venue, in storage order.
    fn all_venues(&self) -> Result<Vec<Venue>>;

    /// Every artist, in storage order.
    fn all_artists(&self) -> Result<Vec<Artist>>;

    /// Every show, in storage order.
    fn all_shows(&self) -> Result<Vec<Show>>;

    fn find_venue(&self, id: u64) -> Result<Option<Venue>>;

    fn find_artist(&self, id: u64) -> Result<Option<Artist>>;

    /// Venues whose name contains `term`, ignoring case.
    fn venues_named(&self, term: &str) -> Result<Vec<Venue>>;

    /// Artists whose name contains `term`, ignoring case.
    fn artists_named(&self, term: &str) -> Result<Vec<Artist>>;

    /// Shows hosted by the given venue.
    fn shows_for_venue(&self, venue_id: u64) -> Result<Vec<Show>>;

    /// Shows played by the given artist.
    fn shows_for_artist(&self, artist_id: u64) -> Result<Vec<Show>>;
}
