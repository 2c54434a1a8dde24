//! Core library for the Marquee booking directory.
//!
//! Marquee keeps venues, artists and the shows that connect them, and derives
//! the views a booking site needs from those records: venues grouped by city,
//! case-insensitive name search with upcoming-show counts, venue and artist
//! pages split into past and upcoming shows, and the full show roster.
//!
//! # Layers
//!
//! - **Records** ([`models`]): plain data, no back-references
//! - **Stores** ([`store`], [`db`]): the [`RecordStore`] read seam with a
//!   SQLite implementation and an in-memory one
//! - **Views** ([`query`]): pure functions from a store snapshot and a
//!   [`Clock`] to view records
//! - **Facade** ([`directory`]): async [`Directory`] used by the CLI and the
//!   MCP server
//! - **Presentation** ([`display`]): markdown `Display` impls and wrappers
//!
//! # Quick Start
//!
//! ```rust
//! use marquee_core::{
//!     clock::FixedClock,
//!     params::{ArtistFields, CreateShow, Search, VenueFields},
//!     DirectoryBuilder, RecordKind,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let directory = DirectoryBuilder::new()
//!     .with_database_path(Some("marquee.db"))
//!     .with_clock(FixedClock::new("2030-01-01T00:00:00Z".parse()?))
//!     .build()
//!     .await?;
//!
//! let venue = directory
//!     .create_venue(&VenueFields {
//!         name: "The Musical Hop".to_string(),
//!         city: "San Francisco".to_string(),
//!         state: "CA".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//! let artist = directory
//!     .create_artist(&ArtistFields {
//!         name: "Guns N Petals".to_string(),
//!         city: "San Francisco".to_string(),
//!         state: "CA".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//! directory
//!     .create_show(&CreateShow {
//!         artist_id: artist.id,
//!         venue_id: venue.id,
//!         start_time: "2035-04-01T20:00:00Z".to_string(),
//!     })
//!     .await?;
//!
//! let hits = directory
//!     .search(&Search {
//!         term: "hop".to_string(),
//!         kind: RecordKind::Venue,
//!     })
//!     .await?;
//! println!("{hits}");
//! # Ok(())
//! # }
//! ```

pub mod clock;
pub mod db;
pub mod directory;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod query;
pub mod store;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use db::Database;
pub use directory::{Directory, DirectoryBuilder};
pub use display::{
    ArtistIndex, CreateResult, DeleteResult, OperationStatus, Roster, SearchResults,
    UpdateResult, VenueGroups,
};
pub use error::{DirectoryError, Result};
pub use models::{
    Artist, ArtistDetail, RecordKind, RosterEntry, SearchResult, Show, Venue, VenueDetail,
    VenueGroup,
};
pub use params::{
    ArtistFields, CreateShow, DeleteRecord, Id, ListShows, Search, UpdateArtist, UpdateVenue,
    VenueFields,
};
pub use query::RosterOrder;
pub use store::{MemoryStore, RecordStore};
