use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Minimal multi-list to-do tracker
///
/// Serves lists and their tasks over HTTP. Run without a subcommand to start
/// the server with default settings.
#[derive(Parser)]
#[command(version, about, name = "docket")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/docket/docket.db
    #[arg(long, global = true, env = "DOCKET_DATABASE_FILE")]
    pub database_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the docket CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server (requires SECRET_KEY)
    Serve(ServeArgs),
    /// Print all lists and their tasks
    #[command(alias = "ls")]
    List {
        /// Disable colored output and use plain text
        #[arg(long)]
        no_color: bool,
    },
}

#[derive(clap::Args, Debug, Clone)]
pub struct ServeArgs {
    /// Bind address
    #[arg(short, long, default_value = "127.0.0.1")]
    pub bind: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 5000)]
    pub port: u16,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}
