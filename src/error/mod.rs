//! Error types for the marketplace client.
//!
//! Requests fail with [`ApiError`], whose variants keep "the server refused"
//! apart from "the server could not be reached" so views can word their
//! notifications accordingly. Storage and configuration problems have their
//! own types; neither aborts a request on its own.

pub mod api;
pub mod auth;
pub mod config;
pub mod session;

pub use api::{ApiError, TransportError};
pub use auth::AuthError;
pub use config::ConfigError;
pub use session::SessionError;
