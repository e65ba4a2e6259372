//! Backend endpoints exposed to consumers.

use std::fmt;
use std::str::FromStr;

/// Operations the visualization backend serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Liveness probe.
    Ping,
    /// Event-log upload.
    Upload,
    /// Sankey diagram generation.
    Sankey,
    /// Chord diagram generation.
    Chord,
}

impl Endpoint {
    pub const ALL: [Endpoint; 4] = [
        Endpoint::Ping,
        Endpoint::Upload,
        Endpoint::Sankey,
        Endpoint::Chord,
    ];

    /// Path suffix appended to the base URL.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Ping => "/ping",
            Endpoint::Upload => "/upload",
            Endpoint::Sankey => "/createSankey",
            Endpoint::Chord => "/createChord",
        }
    }

    /// Short lowercase name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Endpoint::Ping => "ping",
            Endpoint::Upload => "upload",
            Endpoint::Sankey => "sankey",
            Endpoint::Chord => "chord",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Endpoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Endpoint::ALL
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown endpoint `{s}` (expected ping, upload, sankey or chord)"))
    }
}
