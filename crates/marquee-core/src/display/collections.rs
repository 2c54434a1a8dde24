//! Collection wrapper types for displaying lists of views.
//!
//! Each wrapper prints a markdown list and a "No ... found." line when empty.
//! The wrappers serialize as their inner data, so `--json` output and MCP
//! clients see the plain view records.

use std::{fmt, ops::Index};

use serde::Serialize;

use crate::models::{
    ArtistSummary, RecordKind, RosterEntry, SearchHit, SearchResult, VenueGroup,
};

use super::datetime::{DateStyle, ShowTime};

fn plural(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::Venue => "venues",
        RecordKind::Artist => "artists",
    }
}

fn upcoming_label(count: usize) -> String {
    match count {
        1 => "1 upcoming show".to_string(),
        n => format!("{n} upcoming shows"),
    }
}

/// Venues grouped by city and state.
///
/// # Examples
///
/// ```rust
/// use marquee_core::{
///     display::VenueGroups,
///     models::{VenueGroup, VenueSummary},
/// };
///
/// let groups = VenueGroups(vec![VenueGroup {
///     city: "San Francisco".to_string(),
///     state: "CA".to_string(),
///     venues: vec![VenueSummary {
///         id: 1,
///         name: "The Musical Hop".to_string(),
///         num_upcoming_shows: 0,
///     }],
/// }]);
/// let output = groups.to_string();
/// assert!(output.contains("## San Francisco, CA"));
/// assert!(output.contains("The Musical Hop (ID: 1)"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VenueGroups(pub Vec<VenueGroup>);

impl VenueGroups {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of groups, not venues.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VenueGroup> {
        self.0.iter()
    }

    /// Total number of venues across all groups.
    pub fn venue_count(&self) -> usize {
        self.0.iter().map(|group| group.venues.len()).sum()
    }
}

impl Index<usize> for VenueGroups {
    type Output = VenueGroup;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a VenueGroups {
    type Item = &'a VenueGroup;
    type IntoIter = std::slice::Iter<'a, VenueGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for VenueGroups {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No venues found.");
        }
        for group in &self.0 {
            writeln!(f, "## {}, {}", group.city, group.state)?;
            writeln!(f)?;
            for venue in &group.venues {
                writeln!(
                    f,
                    "- {} (ID: {}): {}",
                    venue.name,
                    venue.id,
                    upcoming_label(venue.num_upcoming_shows)
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Search hits together with what was searched for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    pub kind: RecordKind,
    pub term: String,
    pub result: SearchResult,
}

impl SearchResults {
    pub fn new(kind: RecordKind, term: String, result: SearchResult) -> Self {
        Self { kind, term, result }
    }

    pub fn count(&self) -> usize {
        self.result.count
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SearchHit> {
        self.result.data.iter()
    }
}

impl Serialize for SearchResults {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.result.serialize(serializer)
    }
}

impl fmt::Display for SearchResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = plural(self.kind);
        if self.result.data.is_empty() {
            return writeln!(f, "No {kind} found matching \"{}\".", self.term);
        }
        writeln!(
            f,
            "Found {} {kind} matching \"{}\":",
            self.result.count, self.term
        )?;
        writeln!(f)?;
        for hit in &self.result.data {
            writeln!(
                f,
                "- {} (ID: {}): {}",
                hit.name,
                hit.id,
                upcoming_label(hit.num_upcoming_shows)
            )?;
        }
        Ok(())
    }
}

/// The flattened show list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roster(pub Vec<RosterEntry>);

impl Roster {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RosterEntry> {
        self.0.iter()
    }
}

impl Index<usize> for Roster {
    type Output = RosterEntry;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl fmt::Display for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No shows found.");
        }
        for entry in &self.0 {
            writeln!(
                f,
                "- **{}** (artist {}) at **{}** (venue {}), {}",
                entry.artist_name,
                entry.artist_id,
                entry.venue_name,
                entry.venue_id,
                ShowTime::render_canonical(&entry.start_time, DateStyle::Medium)
            )?;
        }
        Ok(())
    }
}

/// The artist index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ArtistIndex(pub Vec<ArtistSummary>);

impl ArtistIndex {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ArtistSummary> {
        self.0.iter()
    }
}

impl fmt::Display for ArtistIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No artists found.");
        }
        for artist in &self.0 {
            writeln!(f, "- {} (ID: {})", artist.name, artist.id)?;
        }
        Ok(())
    }
}
