//! Error types for the QuickStay web client.
//!
//! Nothing in the client surfaces these errors to the user. They are logged through
//! `tracing` and the affected view degrades instead (for example the header stays blank
//! while the session status is unknown).

pub mod config;
pub mod identity;

pub use config::ConfigError;
pub use identity::IdentityError;
