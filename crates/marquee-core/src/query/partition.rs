//! Past/upcoming show partitioning.

use std::collections::HashMap;

use jiff::Timestamp;

use crate::{error::Result, models::Show};

/// Shows split around a reference instant.
///
/// Entries keep their input order within each half.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<T> {
    /// Shows with `start_time < now`
    pub past: Vec<T>,
    /// Shows with `start_time >= now`
    pub upcoming: Vec<T>,
}

impl<T> Partition<T> {
    pub fn past_count(&self) -> usize {
        self.past.len()
    }

    pub fn upcoming_count(&self) -> usize {
        self.upcoming.len()
    }

    /// Total number of partitioned shows.
    pub fn len(&self) -> usize {
        self.past.len() + self.upcoming.len()
    }

    pub fn is_empty(&self) -> bool {
        self.past.is_empty() && self.upcoming.is_empty()
    }
}

impl<T> Default for Partition<T> {
    fn default() -> Self {
        Self {
            past: Vec::new(),
            upcoming: Vec::new(),
        }
    }
}

/// Split `shows` into past and upcoming relative to `now`, mapping each show
/// through `entry` to produce the value stored in the partition.
///
/// `start_time == now` counts as upcoming. The first error returned by
/// `entry` aborts the partition.
///
/// # Examples
///
/// ```rust
/// use marquee_core::{models::Show, query::partition_shows};
///
/// let now = "2030-01-01T00:00:00Z".parse().unwrap();
/// let shows = vec![
///     Show { id: 1, artist_id: 1, venue_id: 1, start_time: "2019-05-21T21:30:00Z".parse().unwrap() },
///     Show { id: 2, artist_id: 1, venue_id: 1, start_time: now },
/// ];
/// let split = partition_shows(&shows, now, |show| Ok(show.id)).unwrap();
/// assert_eq!(split.past, vec![1]);
/// assert_eq!(split.upcoming, vec![2]);
/// ```
pub fn partition_shows<T, F>(shows: &[Show], now: Timestamp, mut entry: F) -> Result<Partition<T>>
where
    F: FnMut(&Show) -> Result<T>,
{
    let mut partition = Partition::default();
    for show in shows {
        let value = entry(show)?;
        if show.is_upcoming(now) {
            partition.upcoming.push(value);
        } else {
            partition.past.push(value);
        }
    }
    Ok(partition)
}

/// Number of shows in the upcoming half of a partition.
pub fn count_upcoming(shows: &[Show], now: Timestamp) -> usize {
    shows.iter().filter(|show| show.is_upcoming(now)).count()
}

/// Upcoming-show counts keyed by `key`, e.g. `|s| s.venue_id`.
///
/// Keys with no upcoming shows are absent from the map.
pub fn upcoming_counts<K>(shows: &[Show], now: Timestamp, key: K) -> HashMap<u64, usize>
where
    K: Fn(&Show) -> u64,
{
    let mut counts = HashMap::new();
    for show in shows.iter().filter(|show| show.is_upcoming(now)) {
        *counts.entry(key(show)).or_insert(0) += 1;
    }
    counts
}

/// Canonical string form of a start time (RFC 3339, UTC).
pub fn canonical_time(timestamp: &Timestamp) -> String {
    timestamp.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DirectoryError;

    fn ts(s: &str) -> Timestamp {
        s.parse().expect("valid timestamp")
    }

    fn show(id: u64, venue_id: u64, start: &str) -> Show {
        Show {
            id,
            artist_id: 1,
            venue_id,
            start_time: ts(start),
        }
    }

    #[test]
    fn test_empty_input_gives_empty_partitions() {
        let split = partition_shows(&[], ts("2030-01-01T00:00:00Z"), |s| Ok(s.id)).unwrap();
        assert!(split.is_empty());
        assert_eq!(split.past_count(), 0);
        assert_eq!(split.upcoming_count(), 0);
    }

    #[test]
    fn test_strictly_earlier_is_past_and_now_is_upcoming() {
        let now = ts("2030-01-01T00:00:00Z");
        let shows = vec![
            show(1, 1, "2029-12-31T23:59:59Z"),
            show(2, 1, "2030-01-01T00:00:00Z"),
            show(3, 1, "2030-01-01T00:00:01Z"),
        ];

        let split = partition_shows(&shows, now, |s| Ok(s.id)).unwrap();

        assert_eq!(split.past, vec![1]);
        assert_eq!(split.upcoming, vec![2, 3]);
        assert_eq!(split.len(), shows.len());
    }

    #[test]
    fn test_partition_keeps_input_order() {
        let now = ts("2030-01-01T00:00:00Z");
        let shows = vec![
            show(1, 1, "2035-04-15T20:00:00Z"),
            show(2, 1, "2019-06-15T23:00:00Z"),
            show(3, 1, "2035-04-01T20:00:00Z"),
            show(4, 1, "2019-05-21T21:30:00Z"),
        ];

        let split = partition_shows(&shows, now, |s| Ok(s.id)).unwrap();

        assert_eq!(split.past, vec![2, 4]);
        assert_eq!(split.upcoming, vec![1, 3]);
    }

    #[test]
    fn test_entry_error_aborts() {
        let now = ts("2030-01-01T00:00:00Z");
        let shows = vec![show(1, 1, "2035-04-15T20:00:00Z")];

        let result: Result<Partition<u64>> =
            partition_shows(&shows, now, |s| Err(DirectoryError::invariant(format!("show {}", s.id))));

        assert!(matches!(
            result,
            Err(DirectoryError::InvariantViolation { .. })
        ));
    }

    #[test]
    fn test_upcoming_counts_by_venue() {
        let now = ts("2030-01-01T00:00:00Z");
        let shows = vec![
            show(1, 1, "2035-04-15T20:00:00Z"),
            show(2, 1, "2019-06-15T23:00:00Z"),
            show(3, 3, "2035-04-01T20:00:00Z"),
            show(4, 3, "2035-04-08T20:00:00Z"),
        ];

        let counts = upcoming_counts(&shows, now, |s| s.venue_id);

        assert_eq!(counts.get(&1), Some(&1));
        assert_eq!(counts.get(&3), Some(&2));
        assert_eq!(counts.get(&2), None);
        assert_eq!(count_upcoming(&shows, now), 3);
    }

    #[test]
    fn test_canonical_time_is_rfc3339() {
        assert_eq!(
            canonical_time(&ts("2019-05-21T21:30:00Z")),
            "2019-05-21T21:30:00Z"
        );
    }
}
