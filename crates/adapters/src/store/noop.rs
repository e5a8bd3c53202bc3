// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op file store for when storage is disabled.

use satchel_core::{FileItem, FilePath, FileStore, FileStoreError};

/// File store that accepts every mutation and holds nothing.
///
/// Used when storage is disabled or in minimal deployments.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpFileStore;

impl NoOpFileStore {
    pub fn new() -> Self {
        Self
    }
}

impl FileStore for NoOpFileStore {
    fn write(&self, _path: &FilePath, _item: &FileItem) -> Result<(), FileStoreError> {
        Ok(())
    }

    fn delete(&self, _path: &FilePath) -> Result<(), FileStoreError> {
        Ok(())
    }

    fn read(&self, path: &FilePath) -> Result<FileItem, FileStoreError> {
        Err(FileStoreError::NotFound(path.clone()))
    }

    fn list(&self, _directory: &str) -> Result<Vec<FilePath>, FileStoreError> {
        Ok(Vec::new())
    }
}
