//! Venue record operations for the Directory.

use super::Directory;
use crate::{
    error::{DirectoryError, Result},
    models::Venue,
    params::{DeleteRecord, Id, UpdateVenue, VenueFields},
};

impl Directory {
    /// Creates a new venue.
    pub async fn create_venue(&self, params: &VenueFields) -> Result<Venue> {
        let fields = params.clone();
        let venue = self
            .with_database(move |db| db.create_venue(&fields))
            .await?;
        log::debug!("created venue {} ({})", venue.id, venue.name);
        Ok(venue)
    }

    /// Retrieves a venue by its ID.
    pub async fn get_venue(&self, params: &Id) -> Result<Option<Venue>> {
        let venue_id = params.id;
        self.with_database(move |db| db.get_venue(venue_id)).await
    }

    /// Like [`get_venue`](Self::get_venue) but a missing venue is an error.
    pub async fn require_venue(&self, params: &Id) -> Result<Venue> {
        self.get_venue(params)
            .await?
            .ok_or_else(|| DirectoryError::venue_not_found(params.id))
    }

    /// Replaces every field of an existing venue.
    pub async fn update_venue(&self, params: &UpdateVenue) -> Result<Venue> {
        let venue_id = params.id;
        let fields = params.fields.clone();
        self.with_database(move |db| db.update_venue(venue_id, &fields))
            .await
    }

    /// Permanently deletes a venue and its shows.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::InvalidInput` unless `confirmed` is set, and
    /// `DirectoryError::NotFound` when the venue does not exist.
    pub async fn delete_venue(&self, params: &DeleteRecord) -> Result<Venue> {
        params.ensure_confirmed()?;
        let venue_id = params.id;
        let venue = self
            .with_database(move |db| db.delete_venue(venue_id))
            .await?;
        log::debug!("deleted venue {venue_id}");
        Ok(venue)
    }
}
