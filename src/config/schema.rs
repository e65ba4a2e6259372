//! Configuration schema definitions.
//!
//! Two documents feed the resolver: the application config (TOML) and the
//! host list it points at (JSON array of [`HostEntry`]).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default location of the JSON host list, relative to the working directory.
pub const DEFAULT_HOSTS_PATH: &str = "assets/backend-hosts.json";

/// Root application configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Where the candidate host list comes from.
    pub hosts: HostsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// One candidate backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct HostEntry {
    /// URL scheme, e.g. "https".
    pub protocol: String,

    /// Host and optional port, e.g. "192.168.1.10:8080".
    pub hostname: String,
}

impl HostEntry {
    pub fn new(protocol: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            hostname: hostname.into(),
        }
    }
}

/// Host list configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HostsConfig {
    /// Path to the JSON host list.
    pub path: PathBuf,

    /// Inline entries. When non-empty these win over `path`.
    pub entries: Vec<HostEntry>,
}

impl Default for HostsConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_HOSTS_PATH),
            entries: Vec::new(),
        }
    }
}

impl HostsConfig {
    /// Resolve which source the candidates are read from.
    pub fn source(&self) -> HostSource {
        if self.entries.is_empty() {
            HostSource::File(self.path.clone())
        } else {
            HostSource::Inline(self.entries.clone())
        }
    }
}

/// Static origin of the candidate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostSource {
    /// JSON array on disk.
    File(PathBuf),
    /// Entries already in memory (inline config, tests).
    Inline(Vec<HostEntry>),
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
