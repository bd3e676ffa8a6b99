//! CLI argument definitions using clap
//!
//! Commands:
//! - todokv serve [--config <path>] [--addr <addr>] [--verbose]
//! - todokv config [--config <path>] [--addr <addr>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// todokv - An in-memory todo record store served over HTTP
#[derive(Parser, Debug)]
#[command(name = "todokv")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Options that determine the server configuration
#[derive(Args, Debug, Clone, Default)]
pub struct ServerArgs {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// HTTP service address, e.g. ":8080" or "127.0.0.1:9000"
    #[arg(long)]
    pub addr: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        #[command(flatten)]
        server: ServerArgs,

        /// Log every store operation
        #[arg(long, short)]
        verbose: bool,
    },

    /// Print the resolved configuration as JSON and exit
    Config {
        #[command(flatten)]
        server: ServerArgs,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
