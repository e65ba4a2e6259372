//! Backend endpoint resolution subsystem.
//!
//! # Data Flow
//! ```text
//! Vec<HostEntry> (from config loader)
//!     → select.rs (one draw from an IndexSource)
//!         - random.rs: ThreadRandom (default), SeededRandom, FixedSequence
//!     → endpoint_resolver.rs (owns candidates + selected index)
//!     → endpoint.rs (fixed path suffixes appended to the base URL)
//! ```
//!
//! # Design Decisions
//! - Selection happens exactly once, inside construction; no re-roll
//! - A resolver value only exists in the "ready" state
//! - URL getters are plain string concatenation, no normalization
//! - The random source is injected so callers can pin the selection

pub mod endpoint;
pub mod endpoint_resolver;
pub mod random;
pub mod select;

pub use endpoint::Endpoint;
pub use endpoint_resolver::EndpointResolver;
pub use random::{FixedSequence, SeededRandom, ThreadRandom};
pub use select::select_random;

/// Source of candidate indices for backend selection.
pub trait IndexSource {
    /// Return an index in `0..len`. `len` is never zero.
    ///
    /// Out-of-range values are reduced modulo `len` by the caller.
    fn next_index(&mut self, len: usize) -> usize;
}
