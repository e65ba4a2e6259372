//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::{AppConfig, HostEntry, HostSource};
use crate::config::validation::{validate_host_list, ValidationError};

/// Error type for configuration loading and backend selection.
///
/// Every variant is fatal to the session: there is no backend to talk to.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("host list is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config is not valid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("host list validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    #[error("no candidate backend hosts configured")]
    NoCandidates,
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load the application configuration from a TOML file.
pub fn load_app_config(path: &Path) -> Result<AppConfig, ConfigurationError> {
    let content = read(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Read the candidate list from its configured source.
pub fn load_candidates(source: &HostSource) -> Result<Vec<HostEntry>, ConfigurationError> {
    match source {
        HostSource::File(path) => load_candidates_from_path(path),
        HostSource::Inline(entries) => {
            if entries.is_empty() {
                return Err(ConfigurationError::NoCandidates);
            }
            Ok(entries.clone())
        }
    }
}

/// Read and parse a JSON host list file.
pub fn load_candidates_from_path(path: &Path) -> Result<Vec<HostEntry>, ConfigurationError> {
    let content = read(path)?;
    let candidates = parse_candidates(&content)?;
    tracing::debug!(path = %path.display(), count = candidates.len(), "Host list loaded");
    Ok(candidates)
}

/// Parse a JSON host list document.
pub fn parse_candidates(content: &str) -> Result<Vec<HostEntry>, ConfigurationError> {
    let doc: serde_json::Value = serde_json::from_str(content)?;
    validate_host_list(&doc).map_err(ConfigurationError::Validation)?;

    let candidates: Vec<HostEntry> = serde_json::from_value(doc)?;
    if candidates.is_empty() {
        return Err(ConfigurationError::NoCandidates);
    }
    Ok(candidates)
}

fn read(path: &Path) -> Result<String, ConfigurationError> {
    fs::read_to_string(path).map_err(|source| ConfigurationError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_candidates_keeps_order() {
        let candidates = parse_candidates(
            r#"[
                { "protocol": "https", "hostname": "backend1.example.com" },
                { "protocol": "http",  "hostname": "192.168.1.10:8080" }
            ]"#,
        )
        .unwrap();
        assert_eq!(
            candidates,
            vec![
                HostEntry::new("https", "backend1.example.com"),
                HostEntry::new("http", "192.168.1.10:8080"),
            ]
        );
    }

    #[test]
    fn test_empty_list_is_error() {
        let err = parse_candidates("[]").unwrap_err();
        assert!(matches!(err, ConfigurationError::NoCandidates));
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_candidates("[{ \"protocol\": ").unwrap_err();
        assert!(matches!(err, ConfigurationError::Json(_)));
    }

    #[test]
    fn test_missing_field_reported() {
        let err = parse_candidates(r#"[{ "hostname": "a.test" }]"#).unwrap_err();
        match err {
            ConfigurationError::Validation(errors) => assert_eq!(
                errors,
                vec![ValidationError::MissingField { index: 0, field: "protocol" }]
            ),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = load_candidates(&HostSource::File(path.clone())).unwrap_err();
        match err {
            ConfigurationError::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_inline_source() {
        let entries = vec![HostEntry::new("https", "a.test")];
        assert_eq!(load_candidates(&HostSource::Inline(entries.clone())).unwrap(), entries);
        assert!(matches!(
            load_candidates(&HostSource::Inline(Vec::new())),
            Err(ConfigurationError::NoCandidates)
        ));
    }

    #[test]
    fn test_load_app_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [hosts]
            path = "hosts/prod.json"
            "#
        )
        .unwrap();

        let config = load_app_config(file.path()).unwrap();
        assert_eq!(config.hosts.path, PathBuf::from("hosts/prod.json"));
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_load_app_config_bad_toml() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[hosts\npath = ").unwrap();
        assert!(matches!(
            load_app_config(file.path()),
            Err(ConfigurationError::Toml(_))
        ));
    }

    #[test]
    fn test_validation_display_lists_all() {
        let err = parse_candidates(r#"[{}]"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "host list validation failed: entry 0 is missing field `protocol`, \
             entry 0 is missing field `hostname`"
        );
    }
}
