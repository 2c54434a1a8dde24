//! Artist model definition.

use serde::{Deserialize, Serialize};

use super::{Record, RecordKind};

/// A performer who plays shows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Artist {
    /// Unique identifier for the artist
    pub id: u64,

    /// Display name of the artist
    pub name: String,

    /// Home city
    pub city: String,

    /// Home state
    pub state: String,

    /// Contact phone number
    pub phone: Option<String>,

    /// Free-text genre tags, in the order they were entered
    #[serde(default)]
    pub genres: Vec<String>,

    /// Link to a representative image
    pub image_link: Option<String>,

    /// Facebook page
    pub facebook_link: Option<String>,

    /// Public website
    pub website_link: Option<String>,

    /// Whether the artist is looking for venues to play
    #[serde(default)]
    pub seeking_venue: bool,

    /// What kind of venue the artist is looking for
    pub seeking_description: Option<String>,
}

impl Record for Artist {
    const KIND: RecordKind = RecordKind::Artist;

    fn id(&self) -> u64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn image_link(&self) -> Option<&str> {
        self.image_link.as_deref()
    }
}
