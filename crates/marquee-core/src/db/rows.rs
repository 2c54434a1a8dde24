//! Row decoding and column encoding shared by the query modules.

use jiff::Timestamp;
use rusqlite::{types::Type, Row};

use crate::{
    error::{DirectoryError, Result},
    models::{Artist, Show, Venue},
};

/// Bindable form of a record ID.
///
/// SQLite rowids are signed 64-bit, so an ID above `i64::MAX` cannot name
/// any row and is rejected instead of wrapping to a negative key.
pub(crate) fn sql_id(id: u64) -> Result<i64> {
    i64::try_from(id).map_err(|_| DirectoryError::InvalidInput {
        field: "id".to_string(),
        reason: format!("{id} is larger than the largest storable ID ({})", i64::MAX),
    })
}

/// Record ID for a freshly inserted rowid.
pub(crate) fn inserted_id(rowid: i64) -> Result<u64> {
    u64::try_from(rowid)
        .map_err(|_| DirectoryError::invariant(format!("SQLite assigned negative rowid {rowid}")))
}

/// Genres are kept as a JSON array in a TEXT column.
pub(crate) fn encode_genres(genres: &[String]) -> Result<String> {
    Ok(serde_json::to_string(genres)?)
}

fn genres_at(row: &Row, idx: usize) -> rusqlite::Result<Vec<String>> {
    let raw: String = row.get(idx)?;
    serde_json::from_str(&raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn id_at(row: &Row, idx: usize) -> rusqlite::Result<u64> {
    let raw: i64 = row.get(idx)?;
    u64::try_from(raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Integer, Box::new(e)))
}

fn timestamp_at(row: &Row, idx: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(idx)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Construct a Venue from a row with columns in table order.
pub(crate) fn venue_from_row(row: &Row) -> rusqlite::Result<Venue> {
    Ok(Venue {
        id: id_at(row, 0)?,
        name: row.get(1)?,
        city: row.get(2)?,
        state: row.get(3)?,
        address: row.get(4)?,
        phone: row.get(5)?,
        image_link: row.get(6)?,
        facebook_link: row.get(7)?,
        website_link: row.get(8)?,
        genres: genres_at(row, 9)?,
        seeking_talent: row.get(10)?,
        seeking_description: row.get(11)?,
    })
}

/// Construct an Artist from a row with columns in table order.
pub(crate) fn artist_from_row(row: &Row) -> rusqlite::Result<Artist> {
    Ok(Artist {
        id: id_at(row, 0)?,
        name: row.get(1)?,
        city: row.get(2)?,
        state: row.get(3)?,
        phone: row.get(4)?,
        genres: genres_at(row, 5)?,
        image_link: row.get(6)?,
        facebook_link: row.get(7)?,
        website_link: row.get(8)?,
        seeking_venue: row.get(9)?,
        seeking_description: row.get(10)?,
    })
}

/// Construct a Show from a row with columns in table order.
pub(crate) fn show_from_row(row: &Row) -> rusqlite::Result<Show> {
    Ok(Show {
        id: id_at(row, 0)?,
        artist_id: id_at(row, 1)?,
        venue_id: id_at(row, 2)?,
        start_time: timestamp_at(row, 3)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_id_rejects_ids_beyond_rowid_range() {
        assert_eq!(sql_id(42).unwrap(), 42);
        assert_eq!(sql_id(i64::MAX as u64).unwrap(), i64::MAX);

        let err = sql_id(u64::MAX).unwrap_err();
        assert!(matches!(err, DirectoryError::InvalidInput { ref field, .. } if field == "id"));
    }

    #[test]
    fn test_inserted_id_rejects_negative_rowids() {
        assert_eq!(inserted_id(7).unwrap(), 7);
        assert!(matches!(
            inserted_id(-1),
            Err(DirectoryError::InvariantViolation { .. })
        ));
    }
}
