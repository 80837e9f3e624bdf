//! Structured route errors.
//!
//! Dropbox reports a failed route call as HTTP 409 with a JSON body whose
//! `error` member is a tagged union:
//!
//! ```text
//! {"error_summary": "path/not_found/..", "error": {".tag": "path", "path": {".tag": "not_found"}}}
//! ```
//!
//! Every route error type owns a frozen [`ErrorSubtypeMap`] naming the tags it
//! recognizes and the [`ErrorCategory`] each resolves to. [`decode_tagged`]
//! walks that table to build the typed value; [`BasicError`] carries it along
//! with the summary fields. Tags missing from the table fail with
//! [`DecodeError::UnknownErrorSubtype`] and are left to the caller.

mod basic;
mod copy_reference;
mod decode;
mod lookup;
mod metadata;
mod subtypes;

pub use basic::{BasicError, ErrorEnvelope, UserMessage, decode_basic_error};
pub use copy_reference::{COPY_REFERENCE_GET_SUBTYPES, CopyReferenceGetError};
pub use decode::{DecodeError, Subtype, TAG_FIELD, TaggedError, decode_tagged};
pub use lookup::LookupError;
pub use metadata::{GET_METADATA_SUBTYPES, GetMetadataError};
pub use subtypes::{ErrorCategory, ErrorSubtypeMap};
