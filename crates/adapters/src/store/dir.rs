// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Directory-backed file store
//!
//! Keeps each item as a plain file under `root/<directory>/<filename>`.

use crate::config::FileStoreConfig;
use satchel_core::{FileItem, FilePath, FileStore, FileStoreError};
use std::fs;
use std::path::PathBuf;

/// File store backed by a directory tree on the local filesystem
#[derive(Clone)]
pub struct DirFileStore {
    root: PathBuf,
}

impl DirFileStore {
    /// Open a store rooted at the given directory, creating it if needed
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, FileStoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Open a store under a fresh temporary directory, for testing
    pub fn open_temp() -> Result<Self, FileStoreError> {
        let root = std::env::temp_dir().join(format!("satchel-test-{}", uuid::Uuid::new_v4()));
        Self::open(root)
    }

    pub fn from_config(config: &FileStoreConfig) -> Result<Self, FileStoreError> {
        Self::open(config.root.clone())
    }

    fn disk_path(&self, path: &FilePath) -> PathBuf {
        self.root.join(&path.directory).join(&path.filename)
    }
}

impl FileStore for DirFileStore {
    fn write(&self, path: &FilePath, item: &FileItem) -> Result<(), FileStoreError> {
        let disk_path = self.disk_path(path);
        if let Some(parent) = disk_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&disk_path, &item.bytes)?;
        Ok(())
    }

    fn delete(&self, path: &FilePath) -> Result<(), FileStoreError> {
        let disk_path = self.disk_path(path);
        if !disk_path.exists() {
            return Err(FileStoreError::NotFound(path.clone()));
        }
        fs::remove_file(&disk_path)?;
        Ok(())
    }

    fn read(&self, path: &FilePath) -> Result<FileItem, FileStoreError> {
        let disk_path = self.disk_path(path);
        if !disk_path.exists() {
            return Err(FileStoreError::NotFound(path.clone()));
        }
        let bytes = fs::read(&disk_path)?;
        Ok(FileItem::new(path.filename.clone(), bytes))
    }

    fn list(&self, directory: &str) -> Result<Vec<FilePath>, FileStoreError> {
        let dir = self.root.join(directory);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut paths = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                paths.push(FilePath::new(
                    directory,
                    entry.file_name().to_string_lossy().to_string(),
                ));
            }
        }
        paths.sort_by(|a, b| a.filename.cmp(&b.filename));
        Ok(paths)
    }
}

#[cfg(test)]
#[path = "dir_tests.rs"]
mod tests;
