//! Plain record indexes.

use crate::{error::Result, models::ArtistSummary, store::RecordStore};

/// Every artist as an `{id, name}` pair, in storage order.
pub fn list_artists<S>(store: &S) -> Result<Vec<ArtistSummary>>
where
    S: RecordStore + ?Sized,
{
    Ok(store
        .all_artists()?
        .into_iter()
        .map(|artist| ArtistSummary {
            id: artist.id,
            name: artist.name,
        })
        .collect())
}
