//! SQLite-backed record storage for venues, artists and shows.
//!
//! This module owns the database connection, the schema, and the typed CRUD
//! queries. [`Database`] also implements
//! [`RecordStore`](crate::store::RecordStore), which is how the query layer
//! reads from it.

use std::path::Path;

use rusqlite::{functions::FunctionFlags, Connection};

use crate::{
    error::{DatabaseResultExt, Result},
    query::name_matches,
};

pub mod artist_queries;
pub mod migrations;
pub mod rows;
pub mod show_queries;
pub mod store;
pub mod venue_queries;

/// Name of the SQL function used for case-insensitive name search.
pub(crate) const NAME_MATCHES_FN: &str = "name_matches";

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.register_functions()?;
        db.initialize_schema()?;
        Ok(db)
    }

    /// Opens a private in-memory database, mostly useful in tests.
    pub fn in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;

        let db = Self { connection };
        db.register_functions()?;
        db.initialize_schema()?;
        Ok(db)
    }

    /// Makes `name_matches(name, term)` available to SQL so name search uses
    /// the same Unicode case folding as [`name_matches`].
    fn register_functions(&self) -> Result<()> {
        self.connection
            .create_scalar_function(
                NAME_MATCHES_FN,
                2,
                FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
                |ctx| {
                    let name: String = ctx.get(0)?;
                    let term: String = ctx.get(1)?;
                    Ok(name_matches(&name, &term))
                },
            )
            .db_context("Failed to register name_matches function")
    }
}
