//! CLI command implementations

use std::io::{self, Write};

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{Logger, Severity};

use super::args::{Command, ServerArgs};
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { server, verbose } => serve(&server, verbose),
        Command::Config { server } => print_config(&server),
    }
}

/// Build the server configuration: defaults, then the config file, then `--addr`.
pub fn resolve_config(args: &ServerArgs) -> CliResult<HttpServerConfig> {
    let mut config = match &args.config {
        Some(path) => HttpServerConfig::load(path)?,
        None => HttpServerConfig::default(),
    };

    if let Some(addr) = &args.addr {
        config.apply_addr(addr)?;
    }

    Ok(config)
}

/// Start the HTTP server and block until it stops.
///
/// The store starts empty and is dropped with the process.
pub fn serve(args: &ServerArgs, verbose: bool) -> CliResult<()> {
    if verbose {
        Logger::set_min_severity(Severity::Trace);
    }

    let config = resolve_config(args)?;
    let addr = config.socket_addr();
    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server.start().await.map_err(|e| {
            let reason = e.to_string();
            Logger::fatal(
                "SERVER_BIND_FAILED",
                &[("addr", addr.as_str()), ("error", reason.as_str())],
            );
            CliError::boot_failed(format!("HTTP server on {} failed: {}", addr, reason))
        })
    })
}

/// Write the resolved configuration to stdout
pub fn print_config(args: &ServerArgs) -> CliResult<()> {
    let config = resolve_config(args)?;

    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, &config)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}
