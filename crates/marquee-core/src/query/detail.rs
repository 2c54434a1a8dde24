//! Venue and artist detail pages.

use std::collections::{hash_map::Entry, HashMap};

use crate::{
    clock::Clock,
    error::{DirectoryError, Result},
    models::{
        Artist, ArtistDetail, ArtistShow, Record, Show, Venue, VenueDetail, VenueShow,
    },
    query::partition::{canonical_time, partition_shows},
    store::RecordStore,
};

/// Compose the detail view of one venue.
///
/// # Errors
///
/// Returns `DirectoryError::NotFound` when no venue has the given ID, and
/// `DirectoryError::InvariantViolation` when one of its shows references an
/// artist that does not exist.
pub fn venue_detail<S, C>(store: &S, clock: &C, id: u64) -> Result<VenueDetail>
where
    S: RecordStore + ?Sized,
    C: Clock + ?Sized,
{
    let venue = store
        .find_venue(id)?
        .ok_or_else(|| DirectoryError::venue_not_found(id))?;
    let shows = store.shows_for_venue(id)?;

    let mut artists: HashMap<u64, Artist> = HashMap::new();
    let partition = partition_shows(&shows, clock.now(), |show| {
        let artist = counterpart(&mut artists, show, show.artist_id, |id| {
            store.find_artist(id)
        })?;
        Ok(VenueShow {
            artist_id: artist.id,
            artist_name: artist.name.clone(),
            artist_image_link: artist.image_link.clone(),
            start_time: canonical_time(&show.start_time),
        })
    })?;

    let past_shows_count = partition.past_count();
    let upcoming_shows_count = partition.upcoming_count();
    let Venue {
        id,
        name,
        city,
        state,
        address,
        phone,
        image_link,
        facebook_link,
        website_link,
        genres,
        seeking_talent,
        seeking_description,
    } = venue;

    Ok(VenueDetail {
        id,
        name,
        genres,
        address,
        city,
        state,
        phone,
        website: website_link,
        facebook_link,
        seeking_talent,
        seeking_description,
        image_link,
        past_shows: partition.past,
        upcoming_shows: partition.upcoming,
        past_shows_count,
        upcoming_shows_count,
    })
}

/// Compose the detail view of one artist.
///
/// # Errors
///
/// Returns `DirectoryError::NotFound` when no artist has the given ID, and
/// `DirectoryError::InvariantViolation` when one of its shows references a
/// venue that does not exist.
pub fn artist_detail<S, C>(store: &S, clock: &C, id: u64) -> Result<ArtistDetail>
where
    S: RecordStore + ?Sized,
    C: Clock + ?Sized,
{
    let artist = store
        .find_artist(id)?
        .ok_or_else(|| DirectoryError::artist_not_found(id))?;
    let shows = store.shows_for_artist(id)?;

    let mut venues: HashMap<u64, Venue> = HashMap::new();
    let partition = partition_shows(&shows, clock.now(), |show| {
        let venue = counterpart(&mut venues, show, show.venue_id, |id| store.find_venue(id))?;
        Ok(ArtistShow {
            venue_id: venue.id,
            venue_name: venue.name.clone(),
            venue_image_link: venue.image_link.clone(),
            start_time: canonical_time(&show.start_time),
        })
    })?;

    let past_shows_count = partition.past_count();
    let upcoming_shows_count = partition.upcoming_count();
    let Artist {
        id,
        name,
        city,
        state,
        phone,
        genres,
        image_link,
        facebook_link,
        website_link,
        seeking_venue,
        seeking_description,
    } = artist;

    Ok(ArtistDetail {
        id,
        name,
        genres,
        city,
        state,
        phone,
        website: website_link,
        facebook_link,
        seeking_venue,
        seeking_description,
        image_link,
        past_shows: partition.past,
        upcoming_shows: partition.upcoming,
        past_shows_count,
        upcoming_shows_count,
    })
}

/// Resolve the other end of a show, looking each ID up at most once.
fn counterpart<'c, R, F>(
    cache: &'c mut HashMap<u64, R>,
    show: &Show,
    id: u64,
    find: F,
) -> Result<&'c R>
where
    R: Record,
    F: FnOnce(u64) -> Result<Option<R>>,
{
    match cache.entry(id) {
        Entry::Occupied(entry) => Ok(entry.into_mut()),
        Entry::Vacant(entry) => {
            let record = find(id)?.ok_or_else(|| super::dangling(show, R::KIND, id))?;
            Ok(entry.insert(record))
        }
    }
}
