//! Derived views over a record store snapshot.
//!
//! Every function in this module is a pure transformation: it reads from a
//! [`RecordStore`](crate::store::RecordStore), asks a
//! [`Clock`](crate::clock::Clock) for the reference instant where needed,
//! and returns owned view records. Nothing is cached or mutated between
//! calls, so the same snapshot always yields the same output.
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────────────────┐     ┌────────────┐
//! │ RecordStore  │────▶│ grouping / search / detail / │────▶│ view types │
//! │   + Clock    │     │ roster  (partition inside)   │     │  (models)  │
//! └──────────────┘     └──────────────────────────────┘     └────────────┘
//! ```
//!
//! - [`partition`]: past/upcoming split shared by everything else
//! - [`grouping`]: venues by city and state
//! - [`search`]: case-insensitive name search
//! - [`detail`]: venue and artist pages
//! - [`roster`]: the flattened show list
//! - [`listing`]: the artist index

pub mod detail;
pub mod grouping;
pub mod listing;
pub mod partition;
pub mod roster;
pub mod search;

#[cfg(test)]
pub(crate) mod fixtures;

pub use detail::{artist_detail, venue_detail};
pub use grouping::{group_venues, list_venues_grouped};
pub use listing::list_artists;
pub use partition::{canonical_time, count_upcoming, partition_shows, upcoming_counts, Partition};
pub use roster::{list_shows, RosterOrder};
pub use search::{name_matches, search, search_artists, search_venues};

use crate::{
    error::DirectoryError,
    models::{RecordKind, Show},
};

/// A show whose venue or artist is missing from the store.
fn dangling(show: &Show, kind: RecordKind, id: u64) -> DirectoryError {
    DirectoryError::invariant(format!(
        "show {} references {} {} which does not exist",
        show.id,
        kind.as_str(),
        id
    ))
}
