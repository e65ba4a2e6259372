//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Load host list → Select backend → Session ready
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then host list, then selection
//! - No shutdown phase: the session holds no resources beyond memory

pub mod startup;

pub use startup::Session;
