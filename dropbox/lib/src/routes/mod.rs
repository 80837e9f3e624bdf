//! Typed Dropbox routes.
//!
//! Each namespace module defines its argument and result types, a
//! constructor returning the route's [`Endpoint`](crate::Endpoint), and a
//! convenience method on [`ApiClient`](crate::ApiClient).
//!
//! | Route | Method | Error taxonomy |
//! |---|---|---|
//! | `files/copy_reference/get` | [`copy_reference_get`](crate::ApiClient::copy_reference_get) | [`CopyReferenceGetError`](crate::taxonomy::CopyReferenceGetError) |
//! | `files/get_metadata` | [`get_metadata`](crate::ApiClient::get_metadata) | [`GetMetadataError`](crate::taxonomy::GetMetadataError) |

pub mod files;
