//! CLI module for todokv
//!
//! Provides command-line interface for:
//! - serve: Start the HTTP server with an empty store
//! - config: Print the resolved configuration

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, ServerArgs};
pub use commands::{print_config, resolve_config, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
