//! Flattened listing of every show.

use std::collections::HashMap;

use crate::{
    error::Result,
    models::{Artist, RecordKind, RosterEntry, Venue},
    query::partition::canonical_time,
    store::RecordStore,
};

/// Ordering applied to the roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RosterOrder {
    /// The order the store returns shows in
    #[default]
    Stored,
    /// Earliest start time first; ties keep storage order
    Chronological,
}

impl From<&crate::params::ListShows> for RosterOrder {
    fn from(params: &crate::params::ListShows) -> Self {
        if params.chronological {
            RosterOrder::Chronological
        } else {
            RosterOrder::Stored
        }
    }
}

/// One entry per show, denormalized with venue and artist display fields.
///
/// # Errors
///
/// Returns `DirectoryError::InvariantViolation` when a show references a
/// venue or artist missing from the snapshot.
pub fn list_shows<S>(store: &S, order: RosterOrder) -> Result<Vec<RosterEntry>>
where
    S: RecordStore + ?Sized,
{
    let venues: HashMap<u64, Venue> = store
        .all_venues()?
        .into_iter()
        .map(|venue| (venue.id, venue))
        .collect();
    let artists: HashMap<u64, Artist> = store
        .all_artists()?
        .into_iter()
        .map(|artist| (artist.id, artist))
        .collect();

    let mut shows = store.all_shows()?;
    if order == RosterOrder::Chronological {
        shows.sort_by_key(|show| show.start_time);
    }

    shows
        .iter()
        .map(|show| {
            let venue = venues
                .get(&show.venue_id)
                .ok_or_else(|| super::dangling(show, RecordKind::Venue, show.venue_id))?;
            let artist = artists
                .get(&show.artist_id)
                .ok_or_else(|| super::dangling(show, RecordKind::Artist, show.artist_id))?;
            Ok(RosterEntry {
                venue_id: venue.id,
                venue_name: venue.name.clone(),
                artist_id: artist.id,
                artist_name: artist.name.clone(),
                artist_image_link: artist.image_link.clone(),
                start_time: canonical_time(&show.start_time),
            })
        })
        .collect()
}
