//! Argument and result types for the `files` namespace.

use serde::{Deserialize, Serialize};

/// Argument of `files/copy_reference/get`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyReferenceGetArg {
    /// Path of the file or folder to reference, e.g. `/Homework/math.pdf`.
    pub path: String,
}

impl CopyReferenceGetArg {
    /// Creates the argument for `path`.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// Result of `files/copy_reference/get`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetCopyReferenceResult {
    /// Metadata of the referenced entry.
    pub metadata: Metadata,
    /// Token usable with `files/copy_reference/save` in another account.
    pub copy_reference: String,
    /// Expiry of the reference, ISO 8601 as sent by the server.
    pub expires: String,
}

/// Argument of `files/get_metadata`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetMetadataArg {
    /// Path or `id:` of the entry.
    pub path: String,
    /// Include media info for photos and videos.
    #[serde(default)]
    pub include_media_info: bool,
    /// Return [`Metadata::Deleted`] for deleted entries instead of `not_found`.
    #[serde(default)]
    pub include_deleted: bool,
    /// Report whether a folder has explicit shared members.
    #[serde(default)]
    pub include_has_explicit_shared_members: bool,
}

impl GetMetadataArg {
    /// Creates the argument for `path` with every option off.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            include_media_info: false,
            include_deleted: false,
            include_has_explicit_shared_members: false,
        }
    }

    /// Sets `include_deleted`.
    pub fn include_deleted(mut self, include: bool) -> Self {
        self.include_deleted = include;
        self
    }
}

/// Metadata of a file, folder or deleted entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum Metadata {
    /// A file.
    File(FileMetadata),
    /// A folder.
    Folder(FolderMetadata),
    /// An entry that has been deleted.
    Deleted(DeletedMetadata),
}

impl Metadata {
    /// The last path component.
    pub fn name(&self) -> &str {
        match self {
            Self::File(m) => &m.name,
            Self::Folder(m) => &m.name,
            Self::Deleted(m) => &m.name,
        }
    }

    /// The path with the user's casing, when the caller may see it.
    pub fn path_display(&self) -> Option<&str> {
        match self {
            Self::File(m) => m.path_display.as_deref(),
            Self::Folder(m) => m.path_display.as_deref(),
            Self::Deleted(m) => m.path_display.as_deref(),
        }
    }

    /// The wire tag: `file`, `folder` or `deleted`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::File(_) => "file",
            Self::Folder(_) => "folder",
            Self::Deleted(_) => "deleted",
        }
    }
}

/// Metadata of a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    /// The last path component.
    pub name: String,
    /// Unique identifier, `id:...`.
    pub id: String,
    /// Modification time set by the desktop client.
    pub client_modified: String,
    /// Last time the file changed on Dropbox.
    pub server_modified: String,
    /// Revision identifier.
    pub rev: String,
    /// Size in bytes.
    pub size: u64,
    /// Lowercased full path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_lower: Option<String>,
    /// Full path with the user's casing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_display: Option<String>,
    /// Dropbox content hash of the file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<String>,
}

/// Metadata of a folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderMetadata {
    /// The last path component.
    pub name: String,
    /// Unique identifier, `id:...`.
    pub id: String,
    /// Lowercased full path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_lower: Option<String>,
    /// Full path with the user's casing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_display: Option<String>,
}

/// Metadata of a deleted entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedMetadata {
    /// The last path component.
    pub name: String,
    /// Lowercased full path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_lower: Option<String>,
    /// Full path with the user's casing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_display: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_copy_reference_result() {
        let result: GetCopyReferenceResult = serde_json::from_value(json!({
            "metadata": {
                ".tag": "file",
                "name": "Prime_Numbers.txt",
                "id": "id:a4ayc_80_OEAAAAAAAAAXw",
                "client_modified": "2015-05-12T15:50:38Z",
                "server_modified": "2015-05-12T15:50:38Z",
                "rev": "a1c10ce0dd78",
                "size": 7212,
                "path_lower": "/homework/math/prime_numbers.txt",
                "path_display": "/Homework/math/Prime_Numbers.txt",
                "is_downloadable": true,
                "content_hash": "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
            },
            "copy_reference": "z1X6ATl6aWtzOGq0c3g5Ng",
            "expires": "2045-05-12T15:50:38Z"
        }))
        .unwrap();

        assert_eq!(result.copy_reference, "z1X6ATl6aWtzOGq0c3g5Ng");
        assert_eq!(result.metadata.kind(), "file");
        assert_eq!(result.metadata.name(), "Prime_Numbers.txt");
        assert_eq!(
            result.metadata.path_display(),
            Some("/Homework/math/Prime_Numbers.txt")
        );
        let Metadata::File(file) = result.metadata else {
            panic!("expected file metadata");
        };
        assert_eq!(file.size, 7212);
    }

    #[test]
    fn test_folder_and_deleted() {
        let folder: Metadata = serde_json::from_value(json!({
            ".tag": "folder", "name": "math", "id": "id:a4ayc_80_OEAAAAAAAAAXz"
        }))
        .unwrap();
        assert_eq!(folder.kind(), "folder");
        assert_eq!(folder.path_display(), None);

        let deleted: Metadata = serde_json::from_value(json!({
            ".tag": "deleted", "name": "old.txt", "path_display": "/old.txt"
        }))
        .unwrap();
        assert_eq!(deleted.kind(), "deleted");
        assert_eq!(deleted.path_display(), Some("/old.txt"));
    }

    #[test]
    fn test_get_metadata_arg_serializes_all_flags() {
        let arg = GetMetadataArg::new("/a.txt").include_deleted(true);
        assert_eq!(
            serde_json::to_value(&arg).unwrap(),
            json!({
                "path": "/a.txt",
                "include_media_info": false,
                "include_deleted": true,
                "include_has_explicit_shared_members": false
            })
        );
    }
}
