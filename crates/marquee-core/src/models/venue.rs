//! Venue model definition.

use serde::{Deserialize, Serialize};

use super::{Record, RecordKind};

/// A physical location that hosts shows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Venue {
    /// Unique identifier for the venue
    pub id: u64,

    /// Display name of the venue
    pub name: String,

    /// City the venue is located in (first grouping key)
    pub city: String,

    /// State the venue is located in (second grouping key)
    pub state: String,

    /// Street address
    pub address: Option<String>,

    /// Contact phone number
    pub phone: Option<String>,

    /// Link to a representative image
    pub image_link: Option<String>,

    /// Facebook page
    pub facebook_link: Option<String>,

    /// Public website
    pub website_link: Option<String>,

    /// Free-text genre tags, in the order they were entered
    #[serde(default)]
    pub genres: Vec<String>,

    /// Whether the venue is looking for performers
    #[serde(default)]
    pub seeking_talent: bool,

    /// What kind of talent the venue is looking for. Only meaningful when
    /// `seeking_talent` is set.
    pub seeking_description: Option<String>,
}

impl Record for Venue {
    const KIND: RecordKind = RecordKind::Venue;

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
