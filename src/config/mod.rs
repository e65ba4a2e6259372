//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! app config (TOML)
//!     → loader.rs (parse & deserialize)
//!     → AppConfig (immutable)
//!     → HostsConfig::source() picks file or inline entries
//!
//! host list (JSON array)
//!     → validation.rs (shape checks, all errors collected)
//!     → loader.rs (deserialize into Vec<HostEntry>, reject empty)
//!     → handed to the resolver once, never mutated
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; there is no reload path
//! - All app config fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from shape checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::ConfigurationError;
pub use schema::AppConfig;
pub use schema::HostEntry;
pub use schema::HostSource;
pub use validation::ValidationError;
