//! Record kinds and the behaviour shared by venues and artists.

use std::{fmt, str::FromStr};

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The two searchable, detailable record kinds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    #[default]
    Venue,
    Artist,
}

impl RecordKind {
    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Venue => "venue",
            RecordKind::Artist => "artist",
        }
    }
}

impl FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "venue" | "venues" => Ok(RecordKind::Venue),
            "artist" | "artists" => Ok(RecordKind::Artist),
            _ => Err(format!("Invalid record kind: {s}")),
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Venue => write!(f, "Venue"),
            RecordKind::Artist => write!(f, "Artist"),
        }
    }
}

/// Fields every venue and artist exposes to listings and show entries.
pub trait Record {
    /// Which kind of record this is.
    const KIND: RecordKind;

    fn id(&self) -> u64;

    fn name(&self) -> &str;

    fn image_link(&self) -> Option<&str>;
}
