//! Parameter structures for Marquee operations
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (CLI, MCP, etc.) without framework-specific derives or
//! dependencies. Interface layers wrap or convert into these types.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Field values arrive here already validated by the form layer; the core
//! copies them into records as-is. The one exception is
//! [`CreateShow::start_time`], which is parsed because it becomes the basis
//! of every past/upcoming classification.

use jiff::Timestamp;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{DirectoryError, Result},
    models::{Artist, RecordKind, Venue},
};

/// Generic parameters for operations requiring just an ID.
///
/// Used for venue_detail, artist_detail, get_venue, get_artist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the record to operate on
    pub id: u64,
}

/// Every editable field of a venue.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct VenueFields {
    /// Venue name (required)
    pub name: String,
    /// City (required)
    pub city: String,
    /// State (required)
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    /// Genre tags in display order
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Every editable field of an artist.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ArtistFields {
    /// Artist name (required)
    pub name: String,
    /// Home city (required)
    pub city: String,
    /// Home state (required)
    pub state: String,
    pub phone: Option<String>,
    /// Genre tags in display order
    #[serde(default)]
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    #[serde(default)]
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

/// Parameters for replacing all fields of an existing venue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateVenue {
    /// ID of the venue to update
    pub id: u64,
    /// New field values
    #[serde(flatten)]
    pub fields: VenueFields,
}

/// Parameters for replacing all fields of an existing artist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateArtist {
    /// ID of the artist to update
    pub id: u64,
    /// New field values
    #[serde(flatten)]
    pub fields: ArtistFields,
}

/// Parameters for permanently deleting a venue or artist.
///
/// Deleting a record also deletes every show it takes part in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DeleteRecord {
    /// ID of the record to delete
    pub id: u64,
    /// Must be true for the deletion to go ahead
    #[serde(default)]
    pub confirmed: bool,
}

impl DeleteRecord {
    /// Rejects unconfirmed deletions.
    pub fn ensure_confirmed(&self) -> Result<()> {
        if self.confirmed {
            Ok(())
        } else {
            Err(DirectoryError::InvalidInput {
                field: "confirmed".to_string(),
                reason: "Deletion requires explicit confirmation. Set 'confirmed' to true to \
                         permanently delete the record and its shows."
                    .to_string(),
            })
        }
    }
}

/// Parameters for scheduling a show.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateShow {
    /// ID of the performing artist
    pub artist_id: u64,
    /// ID of the hosting venue
    pub venue_id: u64,
    /// Start time as an RFC 3339 timestamp, e.g. `2035-04-01T20:00:00Z`
    pub start_time: String,
}

impl CreateShow {
    /// Parse the start time into a [`Timestamp`].
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::InvalidInput` when the string is not a valid
    /// RFC 3339 timestamp.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use marquee_core::params::CreateShow;
    ///
    /// let params = CreateShow {
    ///     artist_id: 1,
    ///     venue_id: 2,
    ///     start_time: "2035-04-01T20:00:00Z".to_string(),
    /// };
    /// assert_eq!(params.parsed_start_time().unwrap().as_second(), 2059070400);
    ///
    /// let bad = CreateShow {
    ///     start_time: "next tuesday".to_string(),
    ///     ..params
    /// };
    /// assert!(bad.parsed_start_time().is_err());
    /// ```
    pub fn parsed_start_time(&self) -> Result<Timestamp> {
        self.start_time
            .trim()
            .parse::<Timestamp>()
            .map_err(|e| DirectoryError::InvalidInput {
                field: "start_time".to_string(),
                reason: format!("'{}' is not an RFC 3339 timestamp: {e}", self.start_time),
            })
    }
}

/// Parameters for a case-insensitive name search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Search {
    /// Text to look for anywhere in the name. Empty matches everything.
    #[serde(default)]
    pub term: String,
    /// Which records to search
    #[serde(default)]
    pub kind: RecordKind,
}

/// Parameters for listing the show roster.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListShows {
    /// Sort by start time instead of storage order
    #[serde(default)]
    pub chronological: bool,
}

impl VenueFields {
    /// Build the stored record for these fields.
    pub fn into_venue(self, id: u64) -> Venue {
        Venue {
            id,
            name: self.name,
            city: self.city,
            state: self.state,
            address: self.address,
            phone: self.phone,
            image_link: self.image_link,
            facebook_link: self.facebook_link,
            website_link: self.website_link,
            genres: self.genres,
            seeking_talent: self.seeking_talent,
            seeking_description: self.seeking_description,
        }
    }
}

impl From<Venue> for VenueFields {
    fn from(venue: Venue) -> Self {
        Self {
            name: venue.name,
            city: venue.city,
            state: venue.state,
            address: venue.address,
            phone: venue.phone,
            image_link: venue.image_link,
            facebook_link: venue.facebook_link,
            website_link: venue.website_link,
            genres: venue.genres,
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description,
        }
    }
}

impl ArtistFields {
    /// Build the stored record for these fields.
    pub fn into_artist(self, id: u64) -> Artist {
        Artist {
            id,
            name: self.name,
            city: self.city,
            state: self.state,
            phone: self.phone,
            genres: self.genres,
            image_link: self.image_link,
            facebook_link: self.facebook_link,
            website_link: self.website_link,
            seeking_venue: self.seeking_venue,
            seeking_description: self.seeking_description,
        }
    }
}

impl From<Artist> for ArtistFields {
    fn from(artist: Artist) -> Self {
        Self {
            name: artist.name,
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            genres: artist.genres,
            image_link: artist.image_link,
            facebook_link: artist.facebook_link,
            website_link: artist.website_link,
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description,
        }
    }
}
