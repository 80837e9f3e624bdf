//! Typed client for the Dropbox API v2.
//!
//! Failed route calls come back as structured errors rather than strings: the
//! tag in a 409 body is resolved through the route's frozen subtype table
//! (see [`taxonomy`]) into a typed value such as
//! `CopyReferenceGetError::Path(LookupError::NotFound)`.
//!
//! ## Features
//!
//! - **Error taxonomies**: per-route [`taxonomy::ErrorSubtypeMap`] tables and a
//!   generic decoder
//! - **Typed routes**: argument and result types for each route in [`routes`]
//! - **Async-first HTTP client**: Built on `reqwest` with `tokio`
//! - **Layered transport errors**: [`ApiError`] split by client, auth,
//!   validation and configuration failures
//!
//! ## Example
//!
//! ```rust
//! use dropbox_api::taxonomy::{
//!     decode_basic_error, CopyReferenceGetError, ErrorCategory, LookupError,
//!     COPY_REFERENCE_GET_SUBTYPES,
//! };
//!
//! assert_eq!(COPY_REFERENCE_GET_SUBTYPES.get("path"), Some(ErrorCategory::Lookup));
//!
//! let body = br#"{"error_summary": "path/locked/.", "error": {".tag": "path", "path": {".tag": "locked"}}}"#;
//! let err = decode_basic_error::<CopyReferenceGetError>(body).unwrap();
//! assert_eq!(err.error, CopyReferenceGetError::Path(LookupError::Locked));
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod method;
pub mod response;
pub mod routes;
pub mod taxonomy;

// Re-exports for convenience
pub use auth::ApiAuthMethod;
pub use client::{ApiClient, ApiClientBuilder};
pub use config::ClientConfig;
pub use endpoint::{Endpoint, EndpointBuilder};
pub use error::{ApiError, AuthError, CallError, ClientError, ConfigError, ValidationError};
pub use method::RestMethod;
pub use response::ResponseFormat;
pub use taxonomy::{BasicError, ErrorCategory, ErrorSubtypeMap, LookupError, TaggedError};
