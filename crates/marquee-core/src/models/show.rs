//! Show model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A scheduled event joining one venue and one artist at a start time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Show {
    /// Unique identifier for the show
    pub id: u64,

    /// ID of the performing artist
    pub artist_id: u64,

    /// ID of the hosting venue
    pub venue_id: u64,

    /// When the show starts (UTC)
    pub start_time: Timestamp,
}

impl Show {
    /// Whether the show has not started yet relative to `now`.
    ///
    /// A show starting exactly at `now` counts as upcoming.
    pub fn is_upcoming(&self, now: Timestamp) -> bool {
        self.start_time >= now
    }
}
