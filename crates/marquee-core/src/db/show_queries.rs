//! Show scheduling and lookup queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use super::rows::{inserted_id, show_from_row, sql_id};
use crate::{
    error::{DatabaseResultExt, DirectoryError, Result},
    models::Show,
};

const CHECK_VENUE_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM venues WHERE id = ?1)";
const CHECK_ARTIST_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM artists WHERE id = ?1)";
const INSERT_SHOW_SQL: &str =
    "INSERT INTO shows (artist_id, venue_id, start_time) VALUES (?1, ?2, ?3)";
const SELECT_SHOW_SQL: &str = "SELECT id, artist_id, venue_id, start_time FROM shows WHERE id = ?1";
const SELECT_ALL_SHOWS_SQL: &str =
    "SELECT id, artist_id, venue_id, start_time FROM shows ORDER BY id";
const SELECT_SHOWS_BY_VENUE_SQL: &str =
    "SELECT id, artist_id, venue_id, start_time FROM shows WHERE venue_id = ?1 ORDER BY id";
const SELECT_SHOWS_BY_ARTIST_SQL: &str =
    "SELECT id, artist_id, venue_id, start_time FROM shows WHERE artist_id = ?1 ORDER BY id";

impl super::Database {
    /// Schedules an artist to play a venue.
    ///
    /// Both endpoints are checked inside the transaction so the error names
    /// the missing record instead of surfacing a foreign key failure.
    pub fn create_show(
        &mut self,
        artist_id: u64,
        venue_id: u64,
        start_time: Timestamp,
    ) -> Result<Show> {
        let (artist_key, venue_key) = (sql_id(artist_id)?, sql_id(venue_id)?);
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let artist_exists: bool = tx
            .query_row(CHECK_ARTIST_EXISTS_SQL, params![artist_key], |row| {
                row.get(0)
            })
            .db_context("Failed to check artist existence")?;
        if !artist_exists {
            return Err(DirectoryError::artist_not_found(artist_id));
        }

        let venue_exists: bool = tx
            .query_row(CHECK_VENUE_EXISTS_SQL, params![venue_key], |row| {
                row.get(0)
            })
            .db_context("Failed to check venue existence")?;
        if !venue_exists {
            return Err(DirectoryError::venue_not_found(venue_id));
        }

        tx.execute(
            INSERT_SHOW_SQL,
            params![artist_key, venue_key, start_time.to_string()],
        )
        .db_context("Failed to insert show")?;

        let id = inserted_id(tx.last_insert_rowid())?;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Show {
            id,
            artist_id,
            venue_id,
            start_time,
        })
    }

    /// Retrieves a show by its ID.
    pub fn get_show(&self, id: u64) -> Result<Option<Show>> {
        self.connection
            .query_row(SELECT_SHOW_SQL, params![sql_id(id)?], show_from_row)
            .optional()
            .db_context("Failed to query show")
    }

    /// Lists every show in the order it was scheduled.
    pub fn list_shows(&self) -> Result<Vec<Show>> {
        self.query_shows(SELECT_ALL_SHOWS_SQL, None)
    }

    pub fn get_shows_for_venue(&self, venue_id: u64) -> Result<Vec<Show>> {
        self.query_shows(SELECT_SHOWS_BY_VENUE_SQL, Some(venue_id))
    }

    pub fn get_shows_for_artist(&self, artist_id: u64) -> Result<Vec<Show>> {
        self.query_shows(SELECT_SHOWS_BY_ARTIST_SQL, Some(artist_id))
    }

    fn query_shows(&self, sql: &str, key: Option<u64>) -> Result<Vec<Show>> {
        let mut stmt = self
            .connection
            .prepare(sql)
            .db_context("Failed to prepare query")?;

        let rows = match key {
            Some(id) => stmt.query_map(params![sql_id(id)?], show_from_row),
            None => stmt.query_map([], show_from_row),
        };

        let shows = rows
            .db_context("Failed to query shows")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch shows")?;
        Ok(shows)
    }
}
