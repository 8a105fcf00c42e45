//! Docket
//!
//! Serves a multi-list to-do tracker over HTTP, or prints the lists to the
//! terminal.

mod args;
mod config;
mod renderer;
mod server;

use anyhow::{Context, Result};
use args::{Args, Commands, ServeArgs};
use clap::Parser;
use config::ServerConfig;
use docket_core::{display::pages::EMPTY_INDEX_MESSAGE, IndexPage, TrackerBuilder};
use log::info;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is not an error; real environment variables win
    let _ = dotenvy::dotenv();
    env_logger::init();

    let Args {
        database_file,
        command,
    } = Args::parse();

    match command.unwrap_or_else(|| Commands::Serve(ServeArgs::default())) {
        Commands::Serve(ServeArgs { bind, port }) => {
            let config = ServerConfig::from_env(&bind, port)?;
            let tracker = TrackerBuilder::new()
                .with_database_path(database_file)
                .build()
                .await
                .context("Failed to initialize tracker")?;

            info!("Using database {}", tracker.database_path().display());
            server::run_server(tracker, config)
                .await
                .context("HTTP server failed")
        }
        Commands::List { no_color } => {
            let tracker = TrackerBuilder::new()
                .with_database_path(database_file)
                .build()
                .await
                .context("Failed to initialize tracker")?;

            let groups = tracker.index().await.context("Failed to load lists")?;
            let flashes = if groups.is_empty() {
                vec![EMPTY_INDEX_MESSAGE.to_string()]
            } else {
                Vec::new()
            };
            TerminalRenderer::new(!no_color).render(&IndexPage::new(&groups, &flashes).to_string())
        }
    }
}
