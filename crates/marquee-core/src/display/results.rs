//! Result wrapper types for displaying operation outcomes.
//!
//! Create, update and delete operations print a one-line confirmation
//! followed, where it makes sense, by the full record.

use std::fmt;

use crate::models::{Artist, Show, Venue};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use marquee_core::{display::CreateResult, params::VenueFields};
///
/// let venue = VenueFields {
///     name: "The Musical Hop".to_string(),
///     city: "San Francisco".to_string(),
///     state: "CA".to_string(),
///     ..Default::default()
/// }
/// .into_venue(1);
///
/// let output = CreateResult::new(venue).to_string();
/// assert!(output.starts_with("Venue The Musical Hop was successfully listed (ID: 1)"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Venue> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Venue {} was successfully listed (ID: {})",
            self.resource.name, self.resource.id
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Artist> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Artist {} was successfully listed (ID: {})",
            self.resource.name, self.resource.id
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Show> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Show was successfully listed (ID: {})", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// The wrapper can carry a list of changed fields for feedback.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }

    fn fmt_changes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for UpdateResult<Venue> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated venue with ID: {}", self.resource.id)?;
        self.fmt_changes(f)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for UpdateResult<Artist> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated artist with ID: {}", self.resource.id)?;
        self.fmt_changes(f)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Venue> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted venue '{}' (ID: {}) and all of its shows",
            self.resource.name, self.resource.id
        )
    }
}

impl fmt::Display for DeleteResult<Artist> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted artist '{}' (ID: {}) and all of their shows",
            self.resource.name, self.resource.id
        )
    }
}
