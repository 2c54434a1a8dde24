//! Data models for venues, artists and shows.
//!
//! This module holds the stored records ([`Venue`], [`Artist`], [`Show`])
//! and the read-only view records built from them by [`crate::query`].
//! Display implementations live in [`crate::display::models`] to keep
//! presentation apart from the data structures.
//!
//! # Record Relationships
//!
//! A [`Show`] references exactly one venue and one artist by ID. There are no
//! back-references: "shows for venue X" is a store query
//! ([`crate::store::RecordStore::shows_for_venue`]), which keeps every model
//! a plain immutable value.
//!
//! # Examples
//!
//! ```rust
//! use jiff::Timestamp;
//! use marquee_core::models::Show;
//!
//! let show = Show {
//!     id: 1,
//!     artist_id: 4,
//!     venue_id: 1,
//!     start_time: "2035-04-01T20:00:00Z".parse().unwrap(),
//! };
//! let now: Timestamp = "2030-01-01T00:00:00Z".parse().unwrap();
//! assert!(show.is_upcoming(now));
//! ```

pub mod artist;
pub mod record;
pub mod show;
pub mod venue;
pub mod views;

#[cfg(test)]
mod tests;

pub use artist::Artist;
pub use record::{Record, RecordKind};
pub use show::Show;
pub use venue::Venue;
pub use views::{
    ArtistDetail, ArtistShow, ArtistSummary, RosterEntry, SearchHit, SearchResult, VenueDetail,
    VenueGroup, VenueShow, VenueSummary,
};
