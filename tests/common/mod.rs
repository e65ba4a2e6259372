//! Shared fixtures for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use backend_resolver::config::HostEntry;

/// Write a JSON host list into `dir` and return its path.
pub fn write_hosts(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("backend-hosts.json");
    fs::write(&path, content).unwrap();
    path
}

/// Serialize `entries` as a host list into `dir`.
#[allow(dead_code)]
pub fn write_entries(dir: &Path, entries: &[HostEntry]) -> PathBuf {
    write_hosts(dir, &serde_json::to_string(entries).unwrap())
}

/// Write an application config into `dir` and return its path.
#[allow(dead_code)]
pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("resolver.toml");
    fs::write(&path, content).unwrap();
    path
}
