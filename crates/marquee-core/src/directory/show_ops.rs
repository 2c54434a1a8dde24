//! Show scheduling for the Directory.

use super::Directory;
use crate::{error::Result, models::Show, params::CreateShow};

impl Directory {
    /// Schedules a show.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::InvalidInput` for an unparseable start time
    /// and `DirectoryError::NotFound` when the artist or venue is missing.
    pub async fn create_show(&self, params: &CreateShow) -> Result<Show> {
        let start_time = params.parsed_start_time()?;
        let (artist_id, venue_id) = (params.artist_id, params.venue_id);

        let show = self
            .with_database(move |db| db.create_show(artist_id, venue_id, start_time))
            .await?;
        log::debug!(
            "scheduled show {} (artist {artist_id} at venue {venue_id})",
            show.id
        );
        Ok(show)
    }
}
