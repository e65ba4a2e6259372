//! backend-resolver
//!
//! Picks one backend of the log-visualization service for this session and
//! prints the endpoint URLs consumers should call.
//!
//! ```text
//!   app config (TOML) ──▶ host list (JSON) ──▶ one random draw
//!                                                   │
//!                                                   ▼
//!                                         EndpointResolver
//!                                   ping / upload / sankey / chord URLs
//! ```

use std::io;
use std::process::ExitCode;

use clap::Parser;

use backend_resolver::cli::{self, Cli};
use backend_resolver::observability::logging::init_logging;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.app_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(&config.observability) {
        eprintln!("warning: logging unavailable: {}", e);
    }

    tracing::debug!(hosts = ?config.hosts.source(), "Configuration loaded");

    let mut source = cli.index_source();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli::run(cli.command.clone(), &config, source.as_mut(), &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
