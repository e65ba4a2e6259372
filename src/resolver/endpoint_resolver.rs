//! Endpoint resolver.
//!
//! # Responsibilities
//! - Own the candidate backend hosts
//! - Select one host at construction
//! - Derive fully-qualified endpoint URLs from the selected host

use crate::config::loader::load_candidates;
use crate::config::{ConfigurationError, HostEntry, HostSource};
use crate::resolver::select::select_index;
use crate::resolver::{Endpoint, IndexSource, ThreadRandom};

/// Resolves backend endpoint URLs against one selected candidate host.
#[derive(Debug, Clone)]
pub struct EndpointResolver {
    candidates: Vec<HostEntry>,
    /// Index into `candidates`, fixed for the resolver's lifetime.
    selected: usize,
}

impl EndpointResolver {
    /// Select a host with the thread-local RNG.
    pub fn new(candidates: Vec<HostEntry>) -> Result<Self, ConfigurationError> {
        Self::with_source(candidates, &mut ThreadRandom::new())
    }

    /// Select a host with the given index source.
    pub fn with_source(
        candidates: Vec<HostEntry>,
        source: &mut dyn IndexSource,
    ) -> Result<Self, ConfigurationError> {
        let selected = select_index(candidates.len(), source)?;
        Ok(Self {
            candidates,
            selected,
        })
    }

    /// Load the candidates from `hosts`, then select one.
    pub fn from_source(
        hosts: &HostSource,
        source: &mut dyn IndexSource,
    ) -> Result<Self, ConfigurationError> {
        let candidates = load_candidates(hosts)?;
        Self::with_source(candidates, source)
    }

    /// All configured candidates, in configuration order.
    pub fn candidates(&self) -> &[HostEntry] {
        &self.candidates
    }

    pub fn selected(&self) -> &HostEntry {
        &self.candidates[self.selected]
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn hostname(&self) -> &str {
        &self.selected().hostname
    }

    pub fn protocol(&self) -> &str {
        &self.selected().protocol
    }

    /// `protocol://hostname`, without a trailing slash.
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.protocol(), self.hostname())
    }

    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        self.base_url() + endpoint.path()
    }

    pub fn ping_url(&self) -> String {
        self.endpoint_url(Endpoint::Ping)
    }

    pub fn upload_url(&self) -> String {
        self.endpoint_url(Endpoint::Upload)
    }

    pub fn sankey_url(&self) -> String {
        self.endpoint_url(Endpoint::Sankey)
    }

    pub fn chord_url(&self) -> String {
        self.endpoint_url(Endpoint::Chord)
    }

    /// Every endpoint paired with its URL.
    pub fn endpoints(&self) -> impl Iterator<Item = (Endpoint, String)> + '_ {
        Endpoint::ALL.into_iter().map(move |e| (e, self.endpoint_url(e)))
    }
}
