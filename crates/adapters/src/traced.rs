// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced target wrappers for consistent observability

use satchel_core::{
    FileItem, FilePath, FileStore, FileStoreError, MessageSender, SendError, TypedMessage,
};
use std::time::Duration;

/// Wrapper that adds tracing to any MessageSender
#[derive(Clone)]
pub struct TracedSender<S> {
    inner: S,
}

impl<S> TracedSender<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: MessageSender> MessageSender for TracedSender<S> {
    fn send(&self, message: TypedMessage) -> Result<(), SendError> {
        let span = tracing::info_span!("sender.send", kind = %message.kind);
        let _guard = span.enter();

        let start = std::time::Instant::now();
        let result = self.inner.send(message);
        let elapsed = start.elapsed();

        match &result {
            Ok(()) => tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "sent"),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "send failed"
            ),
        }

        result
    }

    fn send_delayed(&self, message: TypedMessage, delay: Duration) -> Result<(), SendError> {
        let span = tracing::info_span!("sender.send_delayed", kind = %message.kind, ?delay);
        let _guard = span.enter();

        let result = self.inner.send_delayed(message, delay);
        match &result {
            Ok(()) => tracing::info!("sent"),
            Err(e) => tracing::error!(error = %e, "send failed"),
        }

        result
    }
}

/// Wrapper that adds tracing to any FileStore
#[derive(Clone)]
pub struct TracedFileStore<F> {
    inner: F,
}

impl<F> TracedFileStore<F> {
    pub fn new(inner: F) -> Self {
        Self { inner }
    }
}

impl<F: FileStore> FileStore for TracedFileStore<F> {
    fn write(&self, path: &FilePath, item: &FileItem) -> Result<(), FileStoreError> {
        let span = tracing::info_span!("store.write", path = %path);
        let _guard = span.enter();

        let start = std::time::Instant::now();
        let result = self.inner.write(path, item);
        let elapsed = start.elapsed();

        match &result {
            Ok(()) => tracing::info!(
                bytes = item.bytes.len(),
                elapsed_ms = elapsed.as_millis() as u64,
                "written"
            ),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "write failed"
            ),
        }

        result
    }

    fn delete(&self, path: &FilePath) -> Result<(), FileStoreError> {
        let span = tracing::info_span!("store.delete", path = %path);
        let _guard = span.enter();

        let result = self.inner.delete(path);
        // deleting an already-gone file is often acceptable
        match &result {
            Ok(()) => tracing::info!("deleted"),
            Err(e) => tracing::warn!(error = %e, "delete failed (may be expected)"),
        }

        result
    }

    fn read(&self, path: &FilePath) -> Result<FileItem, FileStoreError> {
        let result = self.inner.read(path);
        tracing::trace!(
            path = %path,
            bytes = result.as_ref().map(|i| i.bytes.len()).ok(),
            "read"
        );
        result
    }

    fn list(&self, directory: &str) -> Result<Vec<FilePath>, FileStoreError> {
        let result = self.inner.list(directory);
        tracing::trace!(
            directory,
            count = result.as_ref().map(|v| v.len()).ok(),
            "listed"
        );
        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
