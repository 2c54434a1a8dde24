//! Derived views served by the Directory.
//!
//! Each handler reads one snapshot from the database and hands it to the
//! matching pure function in [`crate::query`], returning the display wrapper
//! the interfaces print.

use super::Directory;
use crate::{
    display::{ArtistIndex, Roster, SearchResults, VenueGroups},
    error::Result,
    models::{ArtistDetail, VenueDetail},
    params::{Id, ListShows, Search},
    query::{self, RosterOrder},
};

impl Directory {
    /// All venues grouped by city and state with their upcoming show counts.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use marquee_core::DirectoryBuilder;
    /// # async {
    /// let directory = DirectoryBuilder::new().build().await?;
    /// for group in directory.list_venues_grouped().await?.iter() {
    ///     println!("{}, {}: {} venues", group.city, group.state, group.venues.len());
    /// }
    /// # Result::<(), marquee_core::DirectoryError>::Ok(())
    /// # };
    /// ```
    pub async fn list_venues_grouped(&self) -> Result<VenueGroups> {
        let clock = self.clock.clone();
        let groups = self
            .with_database(move |db| query::list_venues_grouped(&*db, &clock))
            .await?;
        Ok(VenueGroups(groups))
    }

    /// Case-insensitive name search over venues or artists.
    pub async fn search(&self, params: &Search) -> Result<SearchResults> {
        let clock = self.clock.clone();
        let term = params.term.clone();
        let kind = params.kind;
        log::debug!("searching {} names for {term:?}", kind.as_str());

        let result = self
            .with_database(move |db| query::search(&*db, &clock, &term, kind))
            .await?;
        Ok(SearchResults::new(kind, params.term.clone(), result))
    }

    /// The venue page: static fields plus past and upcoming shows.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::NotFound` when the venue does not exist.
    pub async fn venue_detail(&self, params: &Id) -> Result<VenueDetail> {
        let clock = self.clock.clone();
        let venue_id = params.id;
        self.with_database(move |db| query::venue_detail(&*db, &clock, venue_id))
            .await
    }

    /// The artist page: static fields plus past and upcoming shows.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::NotFound` when the artist does not exist.
    pub async fn artist_detail(&self, params: &Id) -> Result<ArtistDetail> {
        let clock = self.clock.clone();
        let artist_id = params.id;
        self.with_database(move |db| query::artist_detail(&*db, &clock, artist_id))
            .await
    }

    /// Every show with venue and artist names attached.
    pub async fn list_shows(&self, params: &ListShows) -> Result<Roster> {
        let order = RosterOrder::from(params);
        let entries = self
            .with_database(move |db| query::list_shows(&*db, order))
            .await?;
        Ok(Roster(entries))
    }

    /// The artist index: every artist's ID and name.
    pub async fn list_artists(&self) -> Result<ArtistIndex> {
        let artists = self.with_database(|db| query::list_artists(&*db)).await?;
        Ok(ArtistIndex(artists))
    }
}
