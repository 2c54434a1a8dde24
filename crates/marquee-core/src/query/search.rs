//! Case-insensitive partial name search over venues and artists.

use std::collections::HashMap;

use crate::{
    clock::Clock,
    error::Result,
    models::{Record, RecordKind, SearchHit, SearchResult, Show},
    query::partition::upcoming_counts,
    store::RecordStore,
};

/// Whether `term` occurs anywhere in `name`, ignoring case.
///
/// Both sides are lower-cased with Unicode rules before the containment test,
/// so the result does not depend on the process locale. An empty term
/// matches every name.
///
/// # Examples
///
/// ```rust
/// use marquee_core::query::name_matches;
///
/// assert!(name_matches("The Musical Hop", "hop"));
/// assert!(name_matches("The Musical Hop", "HOP"));
/// assert!(name_matches("Café Ümlaut", "ÜMLAUT"));
/// assert!(name_matches("Anything", ""));
/// assert!(!name_matches("The Dueling Pianos Bar", "music"));
/// ```
pub fn name_matches(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}

/// Search venues or artists by name.
///
/// Each hit carries its number of upcoming shows. `count` always equals the
/// number of hits.
pub fn search<S, C>(store: &S, clock: &C, term: &str, kind: RecordKind) -> Result<SearchResult>
where
    S: RecordStore + ?Sized,
    C: Clock + ?Sized,
{
    match kind {
        RecordKind::Venue => search_venues(store, clock, term),
        RecordKind::Artist => search_artists(store, clock, term),
    }
}

pub fn search_venues<S, C>(store: &S, clock: &C, term: &str) -> Result<SearchResult>
where
    S: RecordStore + ?Sized,
    C: Clock + ?Sized,
{
    let venues = store.venues_named(term)?;
    let shows = store.all_shows()?;
    Ok(collect_hits(&venues, &shows, clock, |show| show.venue_id))
}

pub fn search_artists<S, C>(store: &S, clock: &C, term: &str) -> Result<SearchResult>
where
    S: RecordStore + ?Sized,
    C: Clock + ?Sized,
{
    let artists = store.artists_named(term)?;
    let shows = store.all_shows()?;
    Ok(collect_hits(&artists, &shows, clock, |show| show.artist_id))
}

fn collect_hits<R, C, K>(records: &[R], shows: &[Show], clock: &C, key: K) -> SearchResult
where
    R: Record,
    C: Clock + ?Sized,
    K: Fn(&Show) -> u64,
{
    let counts: HashMap<u64, usize> = upcoming_counts(shows, clock.now(), key);
    SearchResult::new(
        records
            .iter()
            .map(|record| SearchHit {
                id: record.id(),
                name: record.name().to_string(),
                num_upcoming_shows: counts.get(&record.id()).copied().unwrap_or(0),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        query::fixtures::{clock, sample_store},
        store::MemoryStore,
    };

    fn names(result: &SearchResult) -> Vec<&str> {
        result.data.iter().map(|hit| hit.name.as_str()).collect()
    }

    #[test]
    fn test_search_music_returns_two_venues() {
        let result = search(&sample_store(), &clock(), "Music", RecordKind::Venue).unwrap();

        assert_eq!(result.count, 2);
        assert_eq!(
            names(&result),
            vec!["The Musical Hop", "Park Square Live Music & Coffee"]
        );
    }

    #[test]
    fn test_search_ignores_case() {
        let store = sample_store();
        let lower = search(&store, &clock(), "hop", RecordKind::Venue).unwrap();
        let upper = search(&store, &clock(), "HOP", RecordKind::Venue).unwrap();

        assert_eq!(names(&lower), vec!["The Musical Hop"]);
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_empty_term_matches_everything() {
        let store = sample_store();

        let venues = search(&store, &clock(), "", RecordKind::Venue).unwrap();
        assert_eq!(venues.count, 3);

        let artists = search(&store, &clock(), "", RecordKind::Artist).unwrap();
        assert_eq!(artists.count, 3);
    }

    #[test]
    fn test_artist_search_matches_anywhere_in_name() {
        let store = sample_store();

        let a = search(&store, &clock(), "A", RecordKind::Artist).unwrap();
        assert_eq!(
            names(&a),
            vec!["Guns N Petals", "Matt Quevado", "The Wild Sax Band"]
        );

        let band = search(&store, &clock(), "band", RecordKind::Artist).unwrap();
        assert_eq!(names(&band), vec!["The Wild Sax Band"]);
        assert_eq!(band.count, 1);
    }

    #[test]
    fn test_hits_carry_upcoming_counts() {
        let store = sample_store();

        let venues = search(&store, &clock(), "park", RecordKind::Venue).unwrap();
        assert_eq!(venues.data[0].num_upcoming_shows, 3);

        let artists = search(&store, &clock(), "petals", RecordKind::Artist).unwrap();
        assert_eq!(artists.data[0].id, 4);
        assert_eq!(artists.data[0].num_upcoming_shows, 0);
    }

    #[test]
    fn test_no_match_gives_empty_result() {
        let result = search(&sample_store(), &clock(), "zydeco", RecordKind::Venue).unwrap();
        assert_eq!(result, SearchResult::default());

        let empty = search(&MemoryStore::new(), &clock(), "", RecordKind::Artist).unwrap();
        assert_eq!(empty.count, 0);
    }
}
