//! Response handling.
//!
//! The [`ResponseFormat`] trait turns a successful response body into a typed
//! value. Dropbox RPC routes answer with JSON, parsed by [`JsonFormat`].

mod format;

pub use format::{JsonFormat, ResponseFormat};
