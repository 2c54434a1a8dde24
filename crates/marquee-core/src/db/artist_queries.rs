//! Artist CRUD operations and queries.

use rusqlite::{params, OptionalExtension};

use super::rows::{artist_from_row, encode_genres, inserted_id, sql_id};
use crate::{
    error::{DatabaseResultExt, DirectoryError, Result},
    models::Artist,
    params::ArtistFields,
};

const INSERT_ARTIST_SQL: &str = "INSERT INTO artists (name, city, state, phone, genres, image_link, facebook_link, website_link, seeking_venue, seeking_description) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";
const SELECT_ARTIST_SQL: &str = "SELECT id, name, city, state, phone, genres, image_link, facebook_link, website_link, seeking_venue, seeking_description FROM artists WHERE id = ?1";
const SELECT_ALL_ARTISTS_SQL: &str = "SELECT id, name, city, state, phone, genres, image_link, facebook_link, website_link, seeking_venue, seeking_description FROM artists ORDER BY id";
const SELECT_ARTISTS_BY_NAME_SQL: &str = "SELECT id, name, city, state, phone, genres, image_link, facebook_link, website_link, seeking_venue, seeking_description FROM artists WHERE name_matches(name, ?1) ORDER BY id";
const UPDATE_ARTIST_SQL: &str = "UPDATE artists SET name = ?1, city = ?2, state = ?3, phone = ?4, genres = ?5, image_link = ?6, facebook_link = ?7, website_link = ?8, seeking_venue = ?9, seeking_description = ?10 WHERE id = ?11";
const DELETE_ARTIST_SQL: &str = "DELETE FROM artists WHERE id = ?1";

impl super::Database {
    /// Creates a new artist and returns it with its assigned ID.
    pub fn create_artist(&mut self, fields: &ArtistFields) -> Result<Artist> {
        let genres = encode_genres(&fields.genres)?;
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_ARTIST_SQL,
            params![
                &fields.name,
                &fields.city,
                &fields.state,
                fields.phone.as_deref(),
                &genres,
                fields.image_link.as_deref(),
                fields.facebook_link.as_deref(),
                fields.website_link.as_deref(),
                fields.seeking_venue,
                fields.seeking_description.as_deref(),
            ],
        )
        .db_context("Failed to insert artist")?;

        let id = inserted_id(tx.last_insert_rowid())?;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(fields.clone().into_artist(id))
    }

    /// Retrieves an artist by its ID.
    pub fn get_artist(&self, id: u64) -> Result<Option<Artist>> {
        self.connection
            .query_row(SELECT_ARTIST_SQL, params![sql_id(id)?], artist_from_row)
            .optional()
            .db_context("Failed to query artist")
    }

    /// Lists every artist, oldest first.
    pub fn list_artists(&self) -> Result<Vec<Artist>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ALL_ARTISTS_SQL)
            .db_context("Failed to prepare query")?;

        let artists = stmt
            .query_map([], artist_from_row)
            .db_context("Failed to query artists")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch artists")?;
        Ok(artists)
    }

    /// Artists whose name contains `term`, ignoring case.
    pub fn find_artists_by_name(&self, term: &str) -> Result<Vec<Artist>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ARTISTS_BY_NAME_SQL)
            .db_context("Failed to prepare query")?;

        let artists = stmt
            .query_map(params![term], artist_from_row)
            .db_context("Failed to search artists")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch artists")?;
        Ok(artists)
    }

    /// Replaces every field of an existing artist.
    pub fn update_artist(&mut self, id: u64, fields: &ArtistFields) -> Result<Artist> {
        let genres = encode_genres(&fields.genres)?;
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let rows_affected = tx
            .execute(
                UPDATE_ARTIST_SQL,
                params![
                    &fields.name,
                    &fields.city,
                    &fields.state,
                    fields.phone.as_deref(),
                    &genres,
                    fields.image_link.as_deref(),
                    fields.facebook_link.as_deref(),
                    fields.website_link.as_deref(),
                    fields.seeking_venue,
                    fields.seeking_description.as_deref(),
                    sql_id(id)?,
                ],
            )
            .db_context("Failed to update artist")?;

        if rows_affected == 0 {
            return Err(DirectoryError::artist_not_found(id));
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(fields.clone().into_artist(id))
    }

    /// Deletes an artist together with all of its shows, returning the removed
    /// record.
    pub fn delete_artist(&mut self, id: u64) -> Result<Artist> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let artist = tx
            .query_row(SELECT_ARTIST_SQL, params![sql_id(id)?], artist_from_row)
            .optional()
            .db_context("Failed to query artist")?
            .ok_or_else(|| DirectoryError::artist_not_found(id))?;

        // ON DELETE CASCADE removes the artist's shows
        tx.execute(DELETE_ARTIST_SQL, params![sql_id(id)?])
            .db_context("Failed to delete artist")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(artist)
    }
}
