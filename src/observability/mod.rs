//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config loader, resolver, session bootstrap
//!     → tracing macros (structured fields)
//!     → logging.rs subscriber (EnvFilter + fmt layer)
//!     → stderr
//! ```

pub mod logging;
