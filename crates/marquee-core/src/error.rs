//! Error types for the directory library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::RecordKind;

/// Comprehensive error type for all directory operations.
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// No venue or artist exists for the given ID
    #[error("{kind} with ID {id} not found")]
    NotFound { kind: RecordKind, id: u64 },
    /// The store handed back data that breaks referential integrity, such as
    /// a show pointing at a venue that does not exist. Never retried.
    #[error("Invariant violation: {message}")]
    InvariantViolation { message: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> DirectoryError {
        DirectoryError::Database {
            message: self.message,
            source,
        }
    }
}

impl DirectoryError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Shorthand for a missing venue.
    pub fn venue_not_found(id: u64) -> Self {
        Self::NotFound {
            kind: RecordKind::Venue,
            id,
        }
    }

    /// Shorthand for a missing artist.
    pub fn artist_not_found(id: u64) -> Self {
        Self::NotFound {
            kind: RecordKind::Artist,
            id,
        }
    }

    /// Creates an invariant violation and logs it, since it points at store
    /// corruption rather than a bad request.
    pub fn invariant(message: impl Into<String>) -> Self {
        let message = message.into();
        log::warn!("invariant violation: {message}");
        Self::InvariantViolation { message }
    }

    /// Returns true when the error is a lookup failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| DirectoryError::database(message).with_source(e))
    }
}

/// Result type alias for directory operations
pub type Result<T> = std::result::Result<T, DirectoryError>;
