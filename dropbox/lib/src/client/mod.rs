//! HTTP client module.
//!
//! This module provides the async client for calling Dropbox routes with
//! bearer authentication and tracing instrumentation.
//!
//! ## Examples
//!
//! ```rust,ignore
//! use dropbox_api::{ApiAuthMethod, ApiClient, CallError};
//! use dropbox_api::taxonomy::{CopyReferenceGetError, LookupError};
//! use url::Url;
//!
//! let client = ApiClient::builder(Url::parse("https://api.dropboxapi.com/")?)
//!     .auth(ApiAuthMethod::BearerToken, "sl.xxx")
//!     .build()?;
//!
//! match client.copy_reference_get("/Homework/math.pdf").await {
//!     Ok(result) => println!("{}", result.copy_reference),
//!     Err(CallError::Route(err)) if matches!(
//!         err.error,
//!         CopyReferenceGetError::Path(LookupError::NotFound)
//!     ) => println!("no such file"),
//!     Err(other) => return Err(other.into()),
//! }
//! ```

mod executor;

pub use executor::{ApiClient, ApiClientBuilder};
