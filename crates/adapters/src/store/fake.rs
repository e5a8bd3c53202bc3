// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake file store for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use satchel_core::{FileItem, FilePath, FileStore, FileStoreError};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Recorded call to a store method
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    Write { path: FilePath, item: FileItem },
    Delete { path: FilePath },
    Read { path: FilePath },
    List { directory: String },
}

#[derive(Default)]
struct FakeState {
    calls: Vec<StoreCall>,
    contents: HashMap<FilePath, FileItem>,
    // Configurable failure mode
    write_fails: bool,
}

/// Fake file store with call recording for testing
#[derive(Clone, Default)]
pub struct FakeFileStore {
    state: Arc<Mutex<FakeState>>,
}

impl FakeFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<StoreCall> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .clone()
    }

    /// Clear recorded calls
    pub fn clear_calls(&self) {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .clear();
    }

    /// Put an item in the store without recording a call
    pub fn seed(&self, path: FilePath, item: FileItem) {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contents
            .insert(path, item);
    }

    /// Configure writes to fail for testing error paths
    pub fn set_write_fails(&self, fails: bool) {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .write_fails = fails;
    }
}

impl FileStore for FakeFileStore {
    fn write(&self, path: &FilePath, item: &FileItem) -> Result<(), FileStoreError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if state.write_fails {
            return Err(FileStoreError::Rejected("fake write failure".to_string()));
        }
        state.calls.push(StoreCall::Write {
            path: path.clone(),
            item: item.clone(),
        });
        state.contents.insert(path.clone(), item.clone());
        Ok(())
    }

    fn delete(&self, path: &FilePath) -> Result<(), FileStoreError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.calls.push(StoreCall::Delete { path: path.clone() });
        state
            .contents
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| FileStoreError::NotFound(path.clone()))
    }

    fn read(&self, path: &FilePath) -> Result<FileItem, FileStoreError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.calls.push(StoreCall::Read { path: path.clone() });
        state
            .contents
            .get(path)
            .cloned()
            .ok_or_else(|| FileStoreError::NotFound(path.clone()))
    }

    fn list(&self, directory: &str) -> Result<Vec<FilePath>, FileStoreError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.calls.push(StoreCall::List {
            directory: directory.to_string(),
        });
        let mut paths: Vec<_> = state
            .contents
            .keys()
            .filter(|p| p.directory == directory)
            .cloned()
            .collect();
        paths.sort_by(|a, b| a.filename.cmp(&b.filename));
        Ok(paths)
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
