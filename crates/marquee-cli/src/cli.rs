//! Command definitions and their handlers.
//!
//! Each subcommand is a clap `Args` struct converted into a core parameter
//! type with `From`, so the core stays free of clap derives:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Directory
//! ```
//!
//! [`Cli`] runs the converted parameters against a
//! [`Directory`] and prints the result as markdown or JSON.

use std::fmt::Display;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use marquee_core::{
    display::{CreateResult, DeleteResult, OperationStatus, UpdateResult},
    params::*,
    Directory, RecordKind,
};
use serde::Serialize;

use crate::renderer::TerminalRenderer;

// ============================================================================
// Shared arguments
// ============================================================================

/// Search records by name
///
/// Matches anywhere in the name, ignoring case. An empty term lists every
/// record.
#[derive(Args)]
pub struct SearchArgs {
    #[arg(help = "Text to look for in names", default_value = "")]
    pub term: String,
}

/// Show the full page of a record
#[derive(Args)]
pub struct ShowRecordArgs {
    #[arg(help = "Unique identifier of the record to show")]
    pub id: u64,
}

impl From<ShowRecordArgs> for Id {
    fn from(val: ShowRecordArgs) -> Self {
        Id { id: val.id }
    }
}

/// Permanently delete a record and every show it takes part in
#[derive(Args)]
pub struct DeleteArgs {
    #[arg(help = "Unique identifier of the record to delete")]
    pub id: u64,
    #[arg(long, help = "Confirm permanent deletion")]
    pub confirm: bool,
}

impl From<DeleteArgs> for DeleteRecord {
    fn from(val: DeleteArgs) -> Self {
        DeleteRecord {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

// ============================================================================
// Venue commands
// ============================================================================

/// List a new venue
#[derive(Args)]
pub struct CreateVenueArgs {
    #[arg(help = "Name of the venue")]
    pub name: String,
    #[arg(long, help = "City the venue is in")]
    pub city: String,
    #[arg(long, help = "State the venue is in")]
    pub state: String,
    #[arg(long, help = "Street address")]
    pub address: Option<String>,
    #[arg(long, help = "Contact phone number")]
    pub phone: Option<String>,
    #[arg(long, help = "Link to a representative image")]
    pub image_link: Option<String>,
    #[arg(long, help = "Facebook page")]
    pub facebook_link: Option<String>,
    #[arg(long, help = "Public website")]
    pub website_link: Option<String>,
    #[arg(long, value_delimiter = ',', help = "Genres as a comma-separated list")]
    pub genres: Vec<String>,
    #[arg(long, help = "The venue is looking for talent")]
    pub seeking_talent: bool,
    #[arg(long, help = "What kind of talent the venue is looking for")]
    pub seeking_description: Option<String>,
}

impl From<CreateVenueArgs> for VenueFields {
    fn from(val: CreateVenueArgs) -> Self {
        VenueFields {
            name: val.name,
            city: val.city,
            state: val.state,
            address: val.address,
            phone: val.phone,
            image_link: val.image_link,
            facebook_link: val.facebook_link,
            website_link: val.website_link,
            genres: val.genres,
            seeking_talent: val.seeking_talent,
            seeking_description: val.seeking_description,
        }
    }
}

/// Edit an existing venue
///
/// Only the given fields change; everything else keeps its current value.
#[derive(Args)]
pub struct EditVenueArgs {
    #[arg(help = "Unique identifier of the venue to edit")]
    pub id: u64,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub image_link: Option<String>,
    #[arg(long)]
    pub facebook_link: Option<String>,
    #[arg(long)]
    pub website_link: Option<String>,
    #[arg(long, value_delimiter = ',', help = "Replace genres with a comma-separated list")]
    pub genres: Option<Vec<String>>,
    #[arg(long, help = "Whether the venue is looking for talent (true/false)")]
    pub seeking_talent: Option<bool>,
    #[arg(long)]
    pub seeking_description: Option<String>,
}

impl EditVenueArgs {
    /// Overlay the given flags on the current fields, returning the names of
    /// the fields that were set.
    fn apply(self, fields: &mut VenueFields) -> Vec<String> {
        let mut changes = Vec::new();
        overlay(&mut fields.name, self.name, "name", &mut changes);
        overlay(&mut fields.city, self.city, "city", &mut changes);
        overlay(&mut fields.state, self.state, "state", &mut changes);
        overlay_some(&mut fields.address, self.address, "address", &mut changes);
        overlay_some(&mut fields.phone, self.phone, "phone", &mut changes);
        overlay_some(&mut fields.image_link, self.image_link, "image link", &mut changes);
        overlay_some(
            &mut fields.facebook_link,
            self.facebook_link,
            "facebook link",
            &mut changes,
        );
        overlay_some(
            &mut fields.website_link,
            self.website_link,
            "website link",
            &mut changes,
        );
        overlay(&mut fields.genres, self.genres, "genres", &mut changes);
        overlay(
            &mut fields.seeking_talent,
            self.seeking_talent,
            "seeking talent",
            &mut changes,
        );
        overlay_some(
            &mut fields.seeking_description,
            self.seeking_description,
            "seeking description",
            &mut changes,
        );
        changes
    }
}

#[derive(Subcommand)]
pub enum VenueCommands {
    /// List venues grouped by city and state
    #[command(alias = "l")]
    List,
    /// Search venues by name
    #[command(alias = "s")]
    Search(SearchArgs),
    /// Show a venue with its past and upcoming shows
    Show(ShowRecordArgs),
    /// List a new venue
    #[command(alias = "c")]
    Create(CreateVenueArgs),
    /// Edit an existing venue
    #[command(alias = "e")]
    Edit(EditVenueArgs),
    /// Delete a venue and its shows
    Delete(DeleteArgs),
}

// ============================================================================
// Artist commands
// ============================================================================

/// List a new artist
#[derive(Args)]
pub struct CreateArtistArgs {
    #[arg(help = "Name of the artist")]
    pub name: String,
    #[arg(long, help = "Home city")]
    pub city: String,
    #[arg(long, help = "Home state")]
    pub state: String,
    #[arg(long, help = "Contact phone number")]
    pub phone: Option<String>,
    #[arg(long, value_delimiter = ',', help = "Genres as a comma-separated list")]
    pub genres: Vec<String>,
    #[arg(long, help = "Link to a representative image")]
    pub image_link: Option<String>,
    #[arg(long, help = "Facebook page")]
    pub facebook_link: Option<String>,
    #[arg(long, help = "Public website")]
    pub website_link: Option<String>,
    #[arg(long, help = "The artist is looking for venues")]
    pub seeking_venue: bool,
    #[arg(long, help = "What kind of venue the artist is looking for")]
    pub seeking_description: Option<String>,
}

impl From<CreateArtistArgs> for ArtistFields {
    fn from(val: CreateArtistArgs) -> Self {
        ArtistFields {
            name: val.name,
            city: val.city,
            state: val.state,
            phone: val.phone,
            genres: val.genres,
            image_link: val.image_link,
            facebook_link: val.facebook_link,
            website_link: val.website_link,
            seeking_venue: val.seeking_venue,
            seeking_description: val.seeking_description,
        }
    }
}

/// Edit an existing artist
///
/// Only the given fields change; everything else keeps its current value.
#[derive(Args)]
pub struct EditArtistArgs {
    #[arg(help = "Unique identifier of the artist to edit")]
    pub id: u64,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long, value_delimiter = ',', help = "Replace genres with a comma-separated list")]
    pub genres: Option<Vec<String>>,
    #[arg(long)]
    pub image_link: Option<String>,
    #[arg(long)]
    pub facebook_link: Option<String>,
    #[arg(long)]
    pub website_link: Option<String>,
    #[arg(long, help = "Whether the artist is looking for venues (true/false)")]
    pub seeking_venue: Option<bool>,
    #[arg(long)]
    pub seeking_description: Option<String>,
}

impl EditArtistArgs {
    fn apply(self, fields: &mut ArtistFields) -> Vec<String> {
        let mut changes = Vec::new();
        overlay(&mut fields.name, self.name, "name", &mut changes);
        overlay(&mut fields.city, self.city, "city", &mut changes);
        overlay(&mut fields.state, self.state, "state", &mut changes);
        overlay_some(&mut fields.phone, self.phone, "phone", &mut changes);
        overlay(&mut fields.genres, self.genres, "genres", &mut changes);
        overlay_some(&mut fields.image_link, self.image_link, "image link", &mut changes);
        overlay_some(
            &mut fields.facebook_link,
            self.facebook_link,
            "facebook link",
            &mut changes,
        );
        overlay_some(
            &mut fields.website_link,
            self.website_link,
            "website link",
            &mut changes,
        );
        overlay(
            &mut fields.seeking_venue,
            self.seeking_venue,
            "seeking venue",
            &mut changes,
        );
        overlay_some(
            &mut fields.seeking_description,
            self.seeking_description,
            "seeking description",
            &mut changes,
        );
        changes
    }
}

#[derive(Subcommand)]
pub enum ArtistCommands {
    /// List every artist
    #[command(alias = "l")]
    List,
    /// Search artists by name
    #[command(alias = "s")]
    Search(SearchArgs),
    /// Show an artist with their past and upcoming shows
    Show(ShowRecordArgs),
    /// List a new artist
    #[command(alias = "c")]
    Create(CreateArtistArgs),
    /// Edit an existing artist
    #[command(alias = "e")]
    Edit(EditArtistArgs),
    /// Delete an artist and their shows
    Delete(DeleteArgs),
}

// ============================================================================
// Show commands
// ============================================================================

/// List every show
#[derive(Args)]
pub struct ListShowsArgs {
    #[arg(long, help = "Sort by start time instead of scheduling order")]
    pub chronological: bool,
}

impl From<ListShowsArgs> for ListShows {
    fn from(val: ListShowsArgs) -> Self {
        ListShows {
            chronological: val.chronological,
        }
    }
}

/// Schedule an artist to play a venue
#[derive(Args)]
pub struct CreateShowArgs {
    #[arg(help = "ID of the performing artist")]
    pub artist_id: u64,
    #[arg(help = "ID of the hosting venue")]
    pub venue_id: u64,
    #[arg(help = "Start time as an RFC 3339 timestamp, e.g. 2035-04-01T20:00:00Z")]
    pub start_time: String,
}

impl From<CreateShowArgs> for CreateShow {
    fn from(val: CreateShowArgs) -> Self {
        CreateShow {
            artist_id: val.artist_id,
            venue_id: val.venue_id,
            start_time: val.start_time,
        }
    }
}

#[derive(Subcommand)]
pub enum ShowCommands {
    /// List every show with venue and artist names
    #[command(alias = "l")]
    List(ListShowsArgs),
    /// Schedule a new show
    #[command(alias = "c")]
    Create(CreateShowArgs),
}

fn overlay<T>(field: &mut T, value: Option<T>, name: &str, changes: &mut Vec<String>) {
    if let Some(value) = value {
        *field = value;
        changes.push(format!("Updated {name}"));
    }
}

fn overlay_some<T>(
    field: &mut Option<T>,
    value: Option<T>,
    name: &str,
    changes: &mut Vec<String>,
) {
    overlay(field, value.map(Some), name, changes);
}

// ============================================================================
// Handlers
// ============================================================================

/// Runs parsed commands against a directory.
pub struct Cli {
    directory: Directory,
    renderer: TerminalRenderer,
    json: bool,
}

impl Cli {
    pub fn new(directory: Directory, renderer: TerminalRenderer, json: bool) -> Self {
        Self {
            directory,
            renderer,
            json,
        }
    }

    /// Print `markdown`, or `data` as pretty JSON when `--json` was given.
    fn emit<T: Serialize + ?Sized>(&self, markdown: impl Display, data: &T) -> Result<()> {
        if self.json {
            let json = serde_json::to_string_pretty(data).context("Failed to encode JSON")?;
            println!("{json}");
            Ok(())
        } else {
            self.renderer.render(&markdown.to_string())
        }
    }

    pub async fn list_venues(&self) -> Result<()> {
        let groups = self
            .directory
            .list_venues_grouped()
            .await
            .context("Failed to list venues")?;
        self.emit(&groups, &groups)
    }

    async fn search(&self, term: String, kind: RecordKind) -> Result<()> {
        let results = self
            .directory
            .search(&Search { term, kind })
            .await
            .with_context(|| format!("Failed to search {}s", kind.as_str()))?;
        self.emit(&results, &results)
    }

    pub async fn handle_venue_command(&self, command: VenueCommands) -> Result<()> {
        match command {
            VenueCommands::List => self.list_venues().await,
            VenueCommands::Search(args) => self.search(args.term, RecordKind::Venue).await,
            VenueCommands::Show(args) => {
                let detail = self
                    .directory
                    .venue_detail(&args.into())
                    .await
                    .context("Failed to show venue")?;
                self.emit(&detail, &detail)
            }
            VenueCommands::Create(args) => {
                let venue = self
                    .directory
                    .create_venue(&args.into())
                    .await
                    .context("Failed to create venue")?;
                self.emit(CreateResult::new(venue.clone()), &venue)
            }
            VenueCommands::Edit(args) => {
                let id = args.id;
                let current = self
                    .directory
                    .require_venue(&Id { id })
                    .await
                    .context("Failed to load venue")?;
                let mut fields = VenueFields::from(current);
                let changes = args.apply(&mut fields);

                let venue = self
                    .directory
                    .update_venue(&UpdateVenue { id, fields })
                    .await
                    .context("Failed to update venue")?;
                self.emit(UpdateResult::with_changes(venue.clone(), changes), &venue)
            }
            VenueCommands::Delete(args) => {
                if !args.confirm {
                    return self.unconfirmed_delete(RecordKind::Venue, args.id);
                }
                let venue = self
                    .directory
                    .delete_venue(&args.into())
                    .await
                    .context("Failed to delete venue")?;
                self.emit(DeleteResult::new(venue.clone()), &venue)
            }
        }
    }

    pub async fn handle_artist_command(&self, command: ArtistCommands) -> Result<()> {
        match command {
            ArtistCommands::List => {
                let index = self
                    .directory
                    .list_artists()
                    .await
                    .context("Failed to list artists")?;
                self.emit(&index, &index)
            }
            ArtistCommands::Search(args) => self.search(args.term, RecordKind::Artist).await,
            ArtistCommands::Show(args) => {
                let detail = self
                    .directory
                    .artist_detail(&args.into())
                    .await
                    .context("Failed to show artist")?;
                self.emit(&detail, &detail)
            }
            ArtistCommands::Create(args) => {
                let artist = self
                    .directory
                    .create_artist(&args.into())
                    .await
                    .context("Failed to create artist")?;
                self.emit(CreateResult::new(artist.clone()), &artist)
            }
            ArtistCommands::Edit(args) => {
                let id = args.id;
                let current = self
                    .directory
                    .require_artist(&Id { id })
                    .await
                    .context("Failed to load artist")?;
                let mut fields = ArtistFields::from(current);
                let changes = args.apply(&mut fields);

                let artist = self
                    .directory
                    .update_artist(&UpdateArtist { id, fields })
                    .await
                    .context("Failed to update artist")?;
                self.emit(UpdateResult::with_changes(artist.clone(), changes), &artist)
            }
            ArtistCommands::Delete(args) => {
                if !args.confirm {
                    return self.unconfirmed_delete(RecordKind::Artist, args.id);
                }
                let artist = self
                    .directory
                    .delete_artist(&args.into())
                    .await
                    .context("Failed to delete artist")?;
                self.emit(DeleteResult::new(artist.clone()), &artist)
            }
        }
    }

    pub async fn handle_show_command(&self, command: ShowCommands) -> Result<()> {
        match command {
            ShowCommands::List(args) => {
                let roster = self
                    .directory
                    .list_shows(&args.into())
                    .await
                    .context("Failed to list shows")?;
                self.emit(&roster, &roster)
            }
            ShowCommands::Create(args) => {
                let show = self
                    .directory
                    .create_show(&args.into())
                    .await
                    .context("Failed to create show")?;
                self.emit(CreateResult::new(show.clone()), &show)
            }
        }
    }

    fn unconfirmed_delete(&self, kind: RecordKind, id: u64) -> Result<()> {
        let status = OperationStatus::failure(format!(
            "Deleting {} {id} also deletes its shows. Re-run with --confirm to proceed.",
            kind.as_str()
        ));
        self.renderer.render(&status.to_string())
    }
}
