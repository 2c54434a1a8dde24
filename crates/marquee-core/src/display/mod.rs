//! Display formatting for records, views and operation results.
//!
//! Domain records and detail views implement [`std::fmt::Display`] directly
//! (see [`models`]); lists and operation outcomes go through wrapper types so
//! the same data can be shown differently depending on context.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Views/Records  │    │ Wrappers &      │    │   Formatted     │
//! │ (VenueDetail,   │───▶│ Result Types    │───▶│    Output       │
//! │  SearchResult)  │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! All output is markdown.
//!
//! - [`collections`]: `VenueGroups`, `SearchResults`, `Roster`, `ArtistIndex`
//! - [`results`]: `CreateResult`, `UpdateResult`, `DeleteResult`
//! - [`status`]: `OperationStatus`
//! - [`datetime`]: `LocalDateTime` and show time styles
//! - [`models`]: Display implementations for records and views

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{ArtistIndex, Roster, SearchResults, VenueGroups};
pub use datetime::{DateStyle, LocalDateTime, ShowTime};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
