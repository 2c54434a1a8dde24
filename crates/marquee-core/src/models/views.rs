//! Read-only view records derived from venues, artists and shows.
//!
//! These are the shapes handed to renderers. None of them hold references
//! back into the store; each is a plain value computed from one snapshot.

use serde::{Deserialize, Serialize};

/// One venue inside a city/state group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VenueSummary {
    pub id: u64,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// All venues sharing a (city, state) pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VenueGroup {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

/// A single search match with its live upcoming-show count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchHit {
    pub id: u64,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// Result of a name search over venues or artists.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResult {
    /// Always equal to `data.len()`
    pub count: usize,
    pub data: Vec<SearchHit>,
}

impl SearchResult {
    /// Builds a result, keeping `count` in sync with the hits.
    pub fn new(data: Vec<SearchHit>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// A show as seen from a venue page: the counterpart is the artist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VenueShow {
    pub artist_id: u64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    /// Canonical RFC 3339 rendering of the start time
    pub start_time: String,
}

/// A show as seen from an artist page: the counterpart is the venue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtistShow {
    pub venue_id: u64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    /// Canonical RFC 3339 rendering of the start time
    pub start_time: String,
}

/// Full venue page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VenueDetail {
    pub id: u64,
    pub name: String,
    pub genres: Vec<String>,
    pub address: Option<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// Full artist page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtistDetail {
    pub id: u64,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// One line of the show roster, denormalized with display fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterEntry {
    pub venue_id: u64,
    pub venue_name: String,
    pub artist_id: u64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

/// Entry on the artist index page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtistSummary {
    pub id: u64,
    pub name: String,
}
