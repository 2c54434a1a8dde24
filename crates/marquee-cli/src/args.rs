use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jiff::Timestamp;

use crate::cli::{ArtistCommands, ShowCommands, VenueCommands};

/// Venue, artist and show booking directory
///
/// Marquee keeps track of venues, the artists who play them and the shows
/// that bring the two together. It lists venues by city, searches names,
/// shows past and upcoming bookings, and can serve the same views over MCP
/// (Model Context Protocol) for AI assistants.
#[derive(Parser)]
#[command(version, about, name = "marquee")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/marquee/marquee.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print results as JSON instead of markdown
    #[arg(long, global = true)]
    pub json: bool,

    /// Treat this RFC 3339 instant as the current time when splitting past
    /// and upcoming shows
    #[arg(long, global = true, value_name = "TIMESTAMP")]
    pub now: Option<Timestamp>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Marquee CLI
///
/// With no command, venues are listed grouped by city and state.
#[derive(Subcommand)]
pub enum Commands {
    /// Browse and manage venues
    #[command(alias = "v")]
    Venue {
        #[command(subcommand)]
        command: VenueCommands,
    },
    /// Browse and manage artists
    #[command(alias = "a")]
    Artist {
        #[command(subcommand)]
        command: ArtistCommands,
    },
    /// List and schedule shows
    #[command(alias = "s")]
    Show {
        #[command(subcommand)]
        command: ShowCommands,
    },
    /// Start the MCP server
    Serve,
}
