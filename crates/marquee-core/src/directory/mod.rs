//! High-level async API over the booking directory.
//!
//! [`Directory`] is the entry point used by the CLI and the MCP server. It
//! pairs a database location with a [`Clock`] and exposes every read view and
//! record operation as an async method.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  view_handlers  │    │  venue_ops,     │    │    Database     │
//! │  (query layer,  │───▶│  artist_ops,    │───▶│   (via db/)     │
//! │   wrappers)     │    │  show_ops       │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!      Derived views        Record CRUD           Data Persistence
//! ```
//!
//! Each call opens its own [`Database`] connection on the blocking thread
//! pool, so a `Directory` holds no connection state and concurrent calls do
//! not share anything in memory.
//!
//! # Usage
//!
//! ```rust
//! use marquee_core::{DirectoryBuilder, params::VenueFields};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let directory = DirectoryBuilder::new()
//!     .with_database_path(Some("/tmp/marquee-doc.db"))
//!     .build()
//!     .await?;
//!
//! let venue = directory
//!     .create_venue(&VenueFields {
//!         name: "The Musical Hop".to_string(),
//!         city: "San Francisco".to_string(),
//!         state: "CA".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let groups = directory.list_venues_grouped().await?;
//! println!("{groups}");
//! # Ok(())
//! # }
//! ```

use std::{path::PathBuf, sync::Arc};

use tokio::task;

use crate::{
    clock::Clock,
    db::Database,
    error::{DirectoryError, Result},
};

pub mod artist_ops;
pub mod builder;
pub mod show_ops;
pub mod venue_ops;
pub mod view_handlers;


pub use builder::DirectoryBuilder;

/// Main directory interface for venues, artists and shows.
pub struct Directory {
    pub(crate) db_path: PathBuf,
    pub(crate) clock: Arc<dyn Clock>,
}

impl Directory {
    pub(crate) fn new(db_path: PathBuf, clock: Arc<dyn Clock>) -> Self {
        Self { db_path, clock }
    }

    /// The reference instant used for past/upcoming classification.
    pub fn now(&self) -> jiff::Timestamp {
        self.clock.now()
    }

    /// Runs `op` against a fresh connection on the blocking pool.
    pub(crate) async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(|e| DirectoryError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
