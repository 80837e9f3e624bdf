//! Routes in the `files` namespace.

mod types;

pub use types::{
    CopyReferenceGetArg, DeletedMetadata, FileMetadata, FolderMetadata, GetCopyReferenceResult,
    GetMetadataArg, Metadata,
};

use crate::client::ApiClient;
use crate::endpoint::Endpoint;
use crate::error::CallError;
use crate::method::RestMethod;
use crate::response::JsonFormat;
use crate::taxonomy::{CopyReferenceGetError, GetMetadataError};

/// `files/copy_reference/get`: creates a copy reference to a file or folder.
///
/// The reference can be handed to another account and saved there with
/// `files/copy_reference/save`.
pub fn copy_reference_get() -> Endpoint<JsonFormat<GetCopyReferenceResult>, CopyReferenceGetError> {
    Endpoint::builder()
        .id("copy_reference_get")
        .method(RestMethod::Post)
        .path("2/files/copy_reference/get")
        .description("Get a copy reference to a file or folder")
        .build()
}

/// `files/get_metadata`: returns the metadata for a file or folder.
pub fn get_metadata() -> Endpoint<JsonFormat<Metadata>, GetMetadataError> {
    Endpoint::builder()
        .id("get_metadata")
        .method(RestMethod::Post)
        .path("2/files/get_metadata")
        .description("Get the metadata for a file or folder")
        .build()
}

impl ApiClient {
    /// Creates a copy reference for the entry at `path`.
    ///
    /// ## Errors
    ///
    /// A missing or malformed path yields
    /// `CallError::Route` with [`CopyReferenceGetError::Path`].
    pub async fn copy_reference_get(
        &self,
        path: impl Into<String>,
    ) -> Result<GetCopyReferenceResult, CallError<CopyReferenceGetError>> {
        self.call(&copy_reference_get(), &CopyReferenceGetArg::new(path))
            .await
    }

    /// Fetches metadata for the entry described by `arg`.
    ///
    /// ## Errors
    ///
    /// A missing or malformed path yields
    /// `CallError::Route` with [`GetMetadataError::Path`].
    pub async fn get_metadata(
        &self,
        arg: &GetMetadataArg,
    ) -> Result<Metadata, CallError<GetMetadataError>> {
        self.call(&get_metadata(), arg).await
    }
}
