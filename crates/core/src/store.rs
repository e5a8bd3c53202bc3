// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File store seam and file value types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A storage location: a directory plus a filename within it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilePath {
    pub directory: String,
    pub filename: String,
}

impl FilePath {
    pub fn new(directory: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            filename: filename.into(),
        }
    }
}

impl std::fmt::Display for FilePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.directory, self.filename)
    }
}

/// File content: raw bytes plus the filename they were produced under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileItem {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl FileItem {
    pub fn new(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            bytes: bytes.into(),
        }
    }
}

/// Errors from file store operations
#[derive(Debug, Error)]
pub enum FileStoreError {
    #[error("file not found: {0}")]
    NotFound(FilePath),
    #[error("operation rejected: {0}")]
    Rejected(String),
    #[error(transparent)]
    Transaction(#[from] crate::resource::TransactionError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Seam for object storage.
///
/// Writes and deletes are the mutating operations a transaction buffers;
/// reads always go straight to the backing store.
pub trait FileStore: Send + Sync + 'static {
    /// Write an item at the given path, replacing any existing content
    fn write(&self, path: &FilePath, item: &FileItem) -> Result<(), FileStoreError>;

    /// Delete the item at the given path
    fn delete(&self, path: &FilePath) -> Result<(), FileStoreError>;

    /// Read the item at the given path
    fn read(&self, path: &FilePath) -> Result<FileItem, FileStoreError>;

    /// List the paths stored under a directory
    fn list(&self, directory: &str) -> Result<Vec<FilePath>, FileStoreError>;
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
