//! MCP server for Marquee
//!
//! Exposes the directory's read views, plus show scheduling, as Model
//! Context Protocol tools over stdio. Every tool answers with the same
//! markdown the CLI prints.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use log::{debug, error, info};
use marquee_core::Directory;
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;

pub use handlers::{CreateShow, Id, ListShows, McpResult, Search};

/// MCP server for Marquee
#[derive(Clone)]
pub struct MarqueeMcpServer {
    directory: Arc<Mutex<Directory>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl MarqueeMcpServer {
    /// Create a new Marquee MCP server
    pub fn new(directory: Directory) -> Self {
        Self {
            directory: Arc::new(Mutex::new(directory)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.directory.clone())
    }

    #[tool(
        name = "list_venues",
        description = "List every venue grouped by city and state, in ascending (city, state) order. Each venue shows its ID and its number of upcoming shows. Use the IDs with show_venue."
    )]
    async fn list_venues(&self) -> McpResult {
        self.handlers().list_venues().await
    }

    #[tool(
        name = "search",
        description = "Search venues or artists by name. kind is 'venue' (default) or 'artist'. Matching is case-insensitive and finds the term anywhere in the name; an empty term returns every record. Each hit includes its ID and number of upcoming shows."
    )]
    async fn search(&self, params: Parameters<Search>) -> McpResult {
        self.handlers().search(params).await
    }

    #[tool(
        name = "show_venue",
        description = "Show a venue's full page: address, contact links, genres, whether it is seeking talent, and its shows split into past and upcoming with the performing artist's name and image."
    )]
    async fn show_venue(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_venue(params).await
    }

    #[tool(
        name = "list_artists",
        description = "List every artist with their ID. Use the IDs with show_artist or create_show."
    )]
    async fn list_artists(&self) -> McpResult {
        self.handlers().list_artists().await
    }

    #[tool(
        name = "show_artist",
        description = "Show an artist's full page: home city, contact links, genres, whether they are seeking venues, and their shows split into past and upcoming with the venue's name and image."
    )]
    async fn show_artist(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_artist(params).await
    }

    #[tool(
        name = "list_shows",
        description = "List every show with venue and artist names and the start time. Set chronological=true to sort by start time; otherwise shows appear in the order they were scheduled."
    )]
    async fn list_shows(&self, params: Parameters<ListShows>) -> McpResult {
        self.handlers().list_shows(params).await
    }

    #[tool(
        name = "create_show",
        description = "Schedule an artist to play a venue. Requires artist_id, venue_id and start_time as an RFC 3339 timestamp such as 2035-04-01T20:00:00Z. Fails if either ID does not exist."
    )]
    async fn create_show(&self, params: Parameters<CreateShow>) -> McpResult {
        self.handlers().create_show(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for MarqueeMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "marquee".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"Marquee is a booking directory of music venues, artists and the shows that connect them.

## Core Concepts
- **Venues**: places to play, grouped by city and state, optionally seeking talent
- **Artists**: performers with a home city, optionally seeking venues
- **Shows**: one artist at one venue at one start time. Shows starting now or later are upcoming; earlier ones are past.

## Workflow Examples

### Finding a place to play
1. Use `list_venues` to browse by city, or `search` with kind='venue' to find by name
2. Use `show_venue` to see genres, contact links and what is already booked

### Booking
1. Find the artist with `search` (kind='artist') or `list_artists`
2. Schedule with `create_show`, giving both IDs and an RFC 3339 start time
3. Check the result with `list_shows` (chronological=true for calendar order)

## Tool Categories
- **Venues**: list_venues, show_venue
- **Artists**: list_artists, show_artist
- **Shows**: list_shows, create_show
- **Both**: search"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: MarqueeMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Marquee MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
