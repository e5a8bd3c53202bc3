// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Transactional wrapper for file stores
//!
//! Writes and deletes are buffered on the calling thread's transaction and
//! applied to the delegate on commit. Reads are never transactional: they
//! go straight to the delegate and observe the backing store, not the
//! buffer.

use crate::action::FileStoreAction;
use crate::id::{IdGen, TransactionId, UuidIdGen};
use crate::resource::{CommitError, ThreadBindings, TransactionalResource};
use crate::store::{FileItem, FilePath, FileStore, FileStoreError};

/// A file store that defers mutations to commit time.
///
/// One instance is shared process-wide; each thread drives its own
/// transaction lifecycle against it independently.
pub struct TransactionalFileStore<F, G = UuidIdGen> {
    delegate: F,
    bindings: ThreadBindings<FileStoreAction>,
    id_gen: G,
}

impl<F> TransactionalFileStore<F> {
    pub fn new(delegate: F) -> Self {
        Self::with_id_gen(delegate, UuidIdGen)
    }
}

impl<F, G> TransactionalFileStore<F, G> {
    /// Use a specific id generator (deterministic ids in tests)
    pub fn with_id_gen(delegate: F, id_gen: G) -> Self {
        Self {
            delegate,
            bindings: ThreadBindings::new(),
            id_gen,
        }
    }

    /// The id of the calling thread's live transaction, if any
    pub fn transaction_id(&self) -> Option<TransactionId> {
        self.bindings.current_id()
    }
}

impl<F, G> FileStore for TransactionalFileStore<F, G>
where
    F: FileStore,
    G: IdGen + 'static,
{
    fn write(&self, path: &FilePath, item: &FileItem) -> Result<(), FileStoreError> {
        let id = self.bindings.append(FileStoreAction::Write {
            path: path.clone(),
            item: item.clone(),
        })?;
        tracing::debug!(transaction = %id, path = %path, "write buffered");
        Ok(())
    }

    fn delete(&self, path: &FilePath) -> Result<(), FileStoreError> {
        let id = self
            .bindings
            .append(FileStoreAction::Delete { path: path.clone() })?;
        tracing::debug!(transaction = %id, path = %path, "delete buffered");
        Ok(())
    }

    fn read(&self, path: &FilePath) -> Result<FileItem, FileStoreError> {
        self.delegate.read(path)
    }

    fn list(&self, directory: &str) -> Result<Vec<FilePath>, FileStoreError> {
        self.delegate.list(directory)
    }
}

impl<F, G> TransactionalResource for TransactionalFileStore<F, G>
where
    F: FileStore,
    G: IdGen + 'static,
{
    fn begin(&self) -> Result<(), crate::resource::TransactionError> {
        let id = self.id_gen.next();
        self.bindings.begin(id.clone())?;
        tracing::debug!(transaction = %id, "file transaction began");
        Ok(())
    }

    fn commit(&self) -> Result<(), CommitError> {
        let (id, count) = self
            .bindings
            .commit(&self.delegate)
            .map_err(CommitError::FileStore)?;
        tracing::info!(transaction = %id, actions = count, "file transaction committed");
        Ok(())
    }

    fn abort(&self) {
        match self.bindings.abort() {
            Some((id, discarded)) if discarded > 0 => {
                tracing::warn!(transaction = %id, discarded, "file transaction aborted");
            }
            Some((id, _)) => {
                tracing::debug!(transaction = %id, "file transaction aborted");
            }
            None => {}
        }
    }
}

#[cfg(test)]
#[path = "filestore_tests.rs"]
mod tests;
