//! Layered error types for the client.
//!
//! Transport failures are split by layer so callers can act on them:
//! - [`ApiError`] - aggregate of every non-route failure
//! - [`ClientError`] - HTTP, network and rate-limit errors
//! - [`ValidationError`] - response bodies that could not be parsed
//! - [`AuthError`] - missing, rejected or under-scoped credentials
//! - [`ConfigError`] - invalid client configuration
//!
//! Route calls return [`CallError`], which adds the structured route error
//! (see [`crate::taxonomy`]) and the generic fallback for unknown subtypes.

mod api_error;
mod auth_error;
mod call_error;
mod client_error;
mod config_error;
mod validation_error;

pub use api_error::ApiError;
pub use auth_error::AuthError;
pub use call_error::CallError;
pub use client_error::ClientError;
pub use config_error::ConfigError;
pub use validation_error::ValidationError;
