//! Namespace Types
//!
//! Core types for the per-user virtual namespace: the error taxonomy,
//! opaque blob references, and directory listings.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Namespace errors.
///
/// Every variant is a recoverable user-input problem; the command layer
/// renders them 1:1 as reply text. Nothing in the core is fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("missing argument: {what}")]
    MissingArgument { what: String },

    #[error("no such file or directory: '{name}'")]
    NotFound { name: String },

    #[error("name already in use: '{name}'")]
    AlreadyExists { name: String },

    #[error("already at the root directory")]
    AtRoot,

    #[error("expected a document upload, but none arrived")]
    InvalidUpload,
}

/// Result type alias for namespace operations.
pub type Result<T> = std::result::Result<T, FsError>;

/// Opaque reference to file content held by the external blob store.
///
/// The namespace stores it and hands it back for forwarding; it never
/// inspects or dereferences the bytes behind it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlobRef(String);

impl BlobRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlobRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlobRef {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for BlobRef {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Contents of one directory, split the way listings are rendered:
/// subdirectories first, then files, each in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub dirs: Vec<String>,
    pub files: Vec<String>,
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty() && self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = FsError::NotFound { name: "docs".to_string() };
        assert_eq!(err.to_string(), "no such file or directory: 'docs'");

        let err = FsError::AlreadyExists { name: "docs".to_string() };
        assert_eq!(err.to_string(), "name already in use: 'docs'");

        assert_eq!(FsError::AtRoot.to_string(), "already at the root directory");
    }

    #[test]
    fn test_blob_ref() {
        let blob = BlobRef::from("tg-file-123");
        assert_eq!(blob.as_str(), "tg-file-123");
        assert_eq!(blob.to_string(), "tg-file-123");
        assert_eq!(blob, BlobRef::new("tg-file-123".to_string()));
    }

    #[test]
    fn test_listing_empty() {
        let listing = Listing::default();
        assert!(listing.is_empty());

        let listing = Listing { dirs: vec!["a".to_string()], files: vec![] };
        assert!(!listing.is_empty());
    }
}
