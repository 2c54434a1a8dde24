//! Venue CRUD operations and queries.

use rusqlite::{params, OptionalExtension};

use super::rows::{encode_genres, inserted_id, sql_id, venue_from_row};
use crate::{
    error::{DatabaseResultExt, DirectoryError, Result},
    models::Venue,
    params::VenueFields,
};

const INSERT_VENUE_SQL: &str = "INSERT INTO venues (name, city, state, address, phone, image_link, facebook_link, website_link, genres, seeking_talent, seeking_description) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)";
const SELECT_VENUE_SQL: &str = "SELECT id, name, city, state, address, phone, image_link, facebook_link, website_link, genres, seeking_talent, seeking_description FROM venues WHERE id = ?1";
const SELECT_ALL_VENUES_SQL: &str = "SELECT id, name, city, state, address, phone, image_link, facebook_link, website_link, genres, seeking_talent, seeking_description FROM venues ORDER BY id";
const SELECT_VENUES_BY_NAME_SQL: &str = "SELECT id, name, city, state, address, phone, image_link, facebook_link, website_link, genres, seeking_talent, seeking_description FROM venues WHERE name_matches(name, ?1) ORDER BY id";
const UPDATE_VENUE_SQL: &str = "UPDATE venues SET name = ?1, city = ?2, state = ?3, address = ?4, phone = ?5, image_link = ?6, facebook_link = ?7, website_link = ?8, genres = ?9, seeking_talent = ?10, seeking_description = ?11 WHERE id = ?12";
const DELETE_VENUE_SQL: &str = "DELETE FROM venues WHERE id = ?1";

impl super::Database {
    /// Creates a new venue and returns it with its assigned ID.
    pub fn create_venue(&mut self, fields: &VenueFields) -> Result<Venue> {
        let genres = encode_genres(&fields.genres)?;
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_VENUE_SQL,
            params![
                &fields.name,
                &fields.city,
                &fields.state,
                fields.address.as_deref(),
                fields.phone.as_deref(),
                fields.image_link.as_deref(),
                fields.facebook_link.as_deref(),
                fields.website_link.as_deref(),
                &genres,
                fields.seeking_talent,
                fields.seeking_description.as_deref(),
            ],
        )
        .db_context("Failed to insert venue")?;

        let id = inserted_id(tx.last_insert_rowid())?;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(fields.clone().into_venue(id))
    }

    /// Retrieves a venue by its ID.
    pub fn get_venue(&self, id: u64) -> Result<Option<Venue>> {
        self.connection
            .query_row(SELECT_VENUE_SQL, params![sql_id(id)?], venue_from_row)
            .optional()
            .db_context("Failed to query venue")
    }

    /// Lists every venue in ID order.
    pub fn list_venues(&self) -> Result<Vec<Venue>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ALL_VENUES_SQL)
            .db_context("Failed to prepare query")?;

        let venues = stmt
            .query_map([], venue_from_row)
            .db_context("Failed to query venues")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch venues")?;
        Ok(venues)
    }

    /// Venues whose name contains `term`, ignoring case.
    pub fn find_venues_by_name(&self, term: &str) -> Result<Vec<Venue>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_VENUES_BY_NAME_SQL)
            .db_context("Failed to prepare query")?;

        let venues = stmt
            .query_map(params![term], venue_from_row)
            .db_context("Failed to search venues")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch venues")?;
        Ok(venues)
    }

    /// Replaces every field of an existing venue.
    pub fn update_venue(&mut self, id: u64, fields: &VenueFields) -> Result<Venue> {
        let genres = encode_genres(&fields.genres)?;
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let rows_affected = tx
            .execute(
                UPDATE_VENUE_SQL,
                params![
                    &fields.name,
                    &fields.city,
                    &fields.state,
                    fields.address.as_deref(),
                    fields.phone.as_deref(),
                    fields.image_link.as_deref(),
                    fields.facebook_link.as_deref(),
                    fields.website_link.as_deref(),
                    &genres,
                    fields.seeking_talent,
                    fields.seeking_description.as_deref(),
                    sql_id(id)?,
                ],
            )
            .db_context("Failed to update venue")?;

        if rows_affected == 0 {
            return Err(DirectoryError::venue_not_found(id));
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(fields.clone().into_venue(id))
    }

    /// Deletes a venue together with all of its shows, returning the removed
    /// record.
    pub fn delete_venue(&mut self, id: u64) -> Result<Venue> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let venue = tx
            .query_row(SELECT_VENUE_SQL, params![sql_id(id)?], venue_from_row)
            .optional()
            .db_context("Failed to query venue")?
            .ok_or_else(|| DirectoryError::venue_not_found(id))?;

        // Shows go with it through ON DELETE CASCADE
        tx.execute(DELETE_VENUE_SQL, params![sql_id(id)?])
            .db_context("Failed to delete venue")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(venue)
    }
}
