//! Startup orchestration.
//!
//! # Responsibilities
//! - Load the candidate host list named by the configuration
//! - Select the session's backend exactly once
//! - Hand the resolver to consumers explicitly
//!
//! # Design Decisions
//! - Fail fast: any configuration error is fatal to the session
//! - One resolver per session, owned by `Session`, never global

use crate::config::{AppConfig, ConfigurationError};
use crate::resolver::{EndpointResolver, IndexSource};

/// A hosting session and the backend it talks to.
#[derive(Debug)]
pub struct Session {
    resolver: EndpointResolver,
}

impl Session {
    /// Build the session's resolver from `config`.
    pub fn bootstrap(
        config: &AppConfig,
        source: &mut dyn IndexSource,
    ) -> Result<Self, ConfigurationError> {
        let hosts = config.hosts.source();
        let resolver = match EndpointResolver::from_source(&hosts, source) {
            Ok(resolver) => resolver,
            Err(e) => {
                tracing::error!(error = %e, "Backend selection failed");
                return Err(e);
            }
        };

        tracing::info!(
            protocol = %resolver.protocol(),
            hostname = %resolver.hostname(),
            candidates = resolver.candidates().len(),
            "Backend selected"
        );

        Ok(Self { resolver })
    }

    /// Wrap an already-constructed resolver.
    pub fn with_resolver(resolver: EndpointResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &EndpointResolver {
        &self.resolver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HostEntry;
    use crate::resolver::FixedSequence;

    #[test]
    fn test_bootstrap_from_inline_entries() {
        let mut config = AppConfig::default();
        config.hosts.entries = vec![
            HostEntry::new("https", "a.test"),
            HostEntry::new("https", "b.test"),
        ];

        let session = Session::bootstrap(&config, &mut FixedSequence::new(vec![1])).unwrap();
        assert_eq!(session.resolver().hostname(), "b.test");
        assert_eq!(session.resolver().ping_url(), "https://b.test/ping");
    }

    #[test]
    fn test_bootstrap_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.hosts.path = dir.path().join("backend-hosts.json");

        let err = Session::bootstrap(&config, &mut FixedSequence::new(vec![0])).unwrap_err();
        assert!(matches!(err, ConfigurationError::Io { .. }));
    }
}
