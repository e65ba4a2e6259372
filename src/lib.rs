//! Backend endpoint resolution for the log-visualization client.

pub mod cli;
pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod resolver;

pub use config::{AppConfig, ConfigurationError, HostEntry};
pub use lifecycle::Session;
pub use resolver::{Endpoint, EndpointResolver};
