//! City/state grouping of venues.

use crate::{
    clock::Clock,
    error::Result,
    models::{Venue, VenueGroup, VenueSummary},
    query::partition::upcoming_counts,
    store::RecordStore,
};

/// Every venue, grouped by (city, state) in ascending order, each with its
/// number of upcoming shows.
pub fn list_venues_grouped<S, C>(store: &S, clock: &C) -> Result<Vec<VenueGroup>>
where
    S: RecordStore + ?Sized,
    C: Clock + ?Sized,
{
    let venues = store.all_venues()?;
    let counts = upcoming_counts(&store.all_shows()?, clock.now(), |show| show.venue_id);
    Ok(group_venues(venues, |venue| {
        counts.get(&venue.id).copied().unwrap_or(0)
    }))
}

/// Group venues by (city, state).
///
/// Venues are stably sorted by city then state, split into maximal runs
/// sharing both keys, and each run becomes one [`VenueGroup`]. Venues with
/// the same key keep their input order.
pub fn group_venues<F>(mut venues: Vec<Venue>, mut upcoming: F) -> Vec<VenueGroup>
where
    F: FnMut(&Venue) -> usize,
{
    venues.sort_by(|a, b| {
        (a.city.as_str(), a.state.as_str()).cmp(&(b.city.as_str(), b.state.as_str()))
    });

    venues
        .chunk_by(|a, b| a.city == b.city && a.state == b.state)
        .map(|run| VenueGroup {
            city: run[0].city.clone(),
            state: run[0].state.clone(),
            venues: run
                .iter()
                .map(|venue| VenueSummary {
                    id: venue.id,
                    name: venue.name.clone(),
                    num_upcoming_shows: upcoming(venue),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::{
        query::fixtures::{clock, sample_store, venue},
        store::MemoryStore,
    };

    #[test]
    fn test_groups_sample_directory() {
        let groups = list_venues_grouped(&sample_store(), &clock()).unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!((groups[0].city.as_str(), groups[0].state.as_str()), ("New York", "NY"));
        assert_eq!(groups[0].venues.len(), 1);
        assert_eq!(groups[0].venues[0].name, "The Dueling Pianos Bar");
        assert_eq!(groups[0].venues[0].num_upcoming_shows, 0);

        assert_eq!(groups[1].city, "San Francisco");
        let names: Vec<_> = groups[1].venues.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["The Musical Hop", "Park Square Live Music & Coffee"]);
    }

    #[test]
    fn test_upcoming_count_is_per_venue() {
        let groups = list_venues_grouped(&sample_store(), &clock()).unwrap();
        let sf = &groups[1];

        // The Musical Hop only has a 2019 show; Park Square has three in 2035.
        assert_eq!(sf.venues[0].num_upcoming_shows, 0);
        assert_eq!(sf.venues[1].num_upcoming_shows, 3);
    }

    #[test]
    fn test_empty_store_gives_no_groups() {
        let groups = list_venues_grouped(&MemoryStore::new(), &clock()).unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn test_same_city_different_state_are_separate_groups() {
        let venues = vec![
            venue(1, "A", "Portland", "OR"),
            venue(2, "B", "Portland", "ME"),
            venue(3, "C", "Portland", "OR"),
        ];

        let groups = group_venues(venues, |_| 0);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].state, "ME");
        assert_eq!(groups[1].state, "OR");
        let ids: Vec<_> = groups[1].venues.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_every_venue_appears_exactly_once() {
        let venues = vec![
            venue(1, "A", "Austin", "TX"),
            venue(2, "B", "Boston", "MA"),
            venue(3, "C", "Austin", "TX"),
            venue(4, "D", "Chicago", "IL"),
            venue(5, "E", "Boston", "MA"),
        ];

        let groups = group_venues(venues.clone(), |_| 0);

        let mut seen = HashSet::new();
        for group in &groups {
            for summary in &group.venues {
                assert!(seen.insert(summary.id), "venue {} listed twice", summary.id);
                let original = venues.iter().find(|v| v.id == summary.id).unwrap();
                assert_eq!(original.city, group.city);
                assert_eq!(original.state, group.state);
            }
        }
        assert_eq!(seen.len(), venues.len());
        let cities: Vec<_> = groups.iter().map(|g| g.city.as_str()).collect();
        assert_eq!(cities, vec!["Austin", "Boston", "Chicago"]);
    }

    #[test]
    fn test_grouping_is_idempotent() {
        let store = sample_store();
        let first = list_venues_grouped(&store, &clock()).unwrap();
        let second = list_venues_grouped(&store, &clock()).unwrap();
        assert_eq!(first, second);
    }
}
