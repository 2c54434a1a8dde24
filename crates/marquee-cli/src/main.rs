//! Marquee CLI Application
//!
//! Command-line interface and MCP server for the Marquee booking directory.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use marquee_core::{clock::FixedClock, DirectoryBuilder};
use mcp::{run_stdio_server, MarqueeMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        json,
        now,
        command,
    } = Args::parse();

    let mut builder = DirectoryBuilder::new().with_database_path(database_file);
    if let Some(now) = now {
        info!("Pinning the clock at {now}");
        builder = builder.with_clock(FixedClock::new(now));
    }
    let directory = builder
        .build()
        .await
        .context("Failed to initialize directory")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Marquee started");

    match command {
        Some(Venue { command }) => {
            Cli::new(directory, renderer, json)
                .handle_venue_command(command)
                .await
        }
        Some(Artist { command }) => {
            Cli::new(directory, renderer, json)
                .handle_artist_command(command)
                .await
        }
        Some(Show { command }) => {
            Cli::new(directory, renderer, json)
                .handle_show_command(command)
                .await
        }
        Some(Serve) => {
            info!("Starting Marquee MCP server");
            run_stdio_server(MarqueeMcpServer::new(directory))
                .await
                .context("MCP server failed")
        }
        None => Cli::new(directory, renderer, json).list_venues().await,
    }
}
