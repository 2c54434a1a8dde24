//! Artist record operations for the Directory.

use super::Directory;
use crate::{
    error::{DirectoryError, Result},
    models::Artist,
    params::{ArtistFields, DeleteRecord, Id, UpdateArtist},
};

impl Directory {
    /// Creates a new artist.
    pub async fn create_artist(&self, params: &ArtistFields) -> Result<Artist> {
        let fields = params.clone();
        let artist = self
            .with_database(move |db| db.create_artist(&fields))
            .await?;
        log::debug!("created artist {} ({})", artist.id, artist.name);
        Ok(artist)
    }

    pub async fn get_artist(&self, params: &Id) -> Result<Option<Artist>> {
        let artist_id = params.id;
        self.with_database(move |db| db.get_artist(artist_id)).await
    }

    pub async fn require_artist(&self, params: &Id) -> Result<Artist> {
        self.get_artist(params)
            .await?
            .ok_or_else(|| DirectoryError::artist_not_found(params.id))
    }

    /// Replaces every field of an existing artist.
    pub async fn update_artist(&self, params: &UpdateArtist) -> Result<Artist> {
        let artist_id = params.id;
        let fields = params.fields.clone();
        self.with_database(move |db| db.update_artist(artist_id, &fields))
            .await
    }

    /// Permanently deletes an artist and every show they play.
    pub async fn delete_artist(&self, params: &DeleteRecord) -> Result<Artist> {
        params.ensure_confirmed()?;
        let artist_id = params.id;
        let artist = self
            .with_database(move |db| db.delete_artist(artist_id))
            .await?;
        log::debug!("deleted artist {artist_id}");
        Ok(artist)
    }
}
