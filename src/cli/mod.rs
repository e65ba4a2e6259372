//! Command-line front end.
//!
//! Loads the configuration, bootstraps a session and prints what the
//! resolver selected. It never contacts the backend.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;

use crate::config::loader::load_app_config;
use crate::config::{AppConfig, ConfigurationError};
use crate::lifecycle::Session;
use crate::resolver::{Endpoint, EndpointResolver, IndexSource, SeededRandom, ThreadRandom};

#[derive(Parser, Debug)]
#[command(name = "backend-resolver")]
#[command(about = "Select a visualization backend and print its endpoint URLs", long_about = None)]
pub struct Cli {
    /// Application config (TOML). Defaults apply when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// JSON host list; overrides the config's host source.
    #[arg(long)]
    pub hosts: Option<PathBuf>,

    /// Seed for a reproducible backend choice.
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the selected host and every endpoint URL (default)
    Show {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List every candidate host, marking the selected one
    Candidates,
    /// Print the URL of one endpoint (ping, upload, sankey, chord)
    Endpoint { name: Endpoint },
}

/// Errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigurationError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

impl Cli {
    /// Application config with command-line overrides applied.
    pub fn app_config(&self) -> Result<AppConfig, ConfigurationError> {
        let mut config = match &self.config {
            Some(path) => load_app_config(path)?,
            None => AppConfig::default(),
        };

        if let Some(hosts) = &self.hosts {
            config.hosts.path = hosts.clone();
            config.hosts.entries.clear();
        }
        Ok(config)
    }

    /// Index source implied by `--seed`.
    pub fn index_source(&self) -> Box<dyn IndexSource> {
        match self.seed {
            Some(seed) => Box::new(SeededRandom::new(seed)),
            None => Box::new(ThreadRandom::new()),
        }
    }
}

#[derive(Debug, Serialize)]
struct Resolution<'a> {
    protocol: &'a str,
    hostname: &'a str,
    base_url: String,
    ping: String,
    upload: String,
    sankey: String,
    chord: String,
}

impl<'a> From<&'a EndpointResolver> for Resolution<'a> {
    fn from(resolver: &'a EndpointResolver) -> Self {
        Self {
            protocol: resolver.protocol(),
            hostname: resolver.hostname(),
            base_url: resolver.base_url(),
            ping: resolver.ping_url(),
            upload: resolver.upload_url(),
            sankey: resolver.sankey_url(),
            chord: resolver.chord_url(),
        }
    }
}

/// Bootstrap a session from `config` and write the requested view to `out`.
pub fn run(
    command: Option<Commands>,
    config: &AppConfig,
    source: &mut dyn IndexSource,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let session = Session::bootstrap(config, source)?;
    let resolver = session.resolver();

    match command.unwrap_or(Commands::Show { json: false }) {
        Commands::Show { json: true } => {
            let body = serde_json::to_string_pretty(&Resolution::from(resolver))?;
            writeln!(out, "{}", body)?;
        }
        Commands::Show { json: false } => {
            writeln!(out, "{:<8} {}", "base", resolver.base_url())?;
            for (endpoint, url) in resolver.endpoints() {
                writeln!(out, "{:<8} {}", endpoint, url)?;
            }
        }
        Commands::Candidates => {
            for (index, host) in resolver.candidates().iter().enumerate() {
                let marker = if index == resolver.selected_index() { '*' } else { ' ' };
                writeln!(out, "{} {}://{}", marker, host.protocol, host.hostname)?;
            }
        }
        Commands::Endpoint { name } => {
            writeln!(out, "{}", resolver.endpoint_url(name))?;
        }
    }
    Ok(())
}
