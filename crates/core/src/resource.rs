// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-thread transaction binding and the begin/commit/abort seam
//!
//! A transactional resource instance is shared process-wide; each thread
//! independently begins, commits, and aborts its own transaction against
//! it. The binding from thread to live transaction is the only shared
//! mutable state, held in a map keyed by thread id so that unrelated
//! threads never contend on one lock.

use crate::action::Action;
use crate::id::TransactionId;
use crate::sender::SendError;
use crate::store::FileStoreError;
use crate::transaction::Transaction;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::thread::{self, ThreadId};
use thiserror::Error;

/// Transaction lifecycle errors. Both variants indicate a programming
/// error at the unit-of-work boundary, not a retryable condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
    /// begin() was called while transaction `existing` was already active
    /// on the calling thread
    #[error("nested transaction: {existing} is already active on this thread")]
    Nested { existing: TransactionId },
    /// An operation that requires an active transaction found none on the
    /// calling thread
    #[error("no active transaction on this thread")]
    NonExistent,
}

/// Errors surfaced by committing a resource, one variant per target kind
#[derive(Debug, Error)]
pub enum CommitError {
    #[error("message sender: {0}")]
    Sender(#[from] SendError),
    #[error("file store: {0}")]
    FileStore(#[from] FileStoreError),
}

/// The begin/commit/abort control surface of one buffered resource.
///
/// Object safe so a manager can fan out over heterogeneous resources.
pub trait TransactionalResource: Send + Sync {
    /// Bind a fresh transaction to the calling thread.
    ///
    /// Fails with [`TransactionError::Nested`] if one is already active.
    fn begin(&self) -> Result<(), TransactionError>;

    /// Apply the calling thread's buffered actions in FIFO order and
    /// unbind its transaction.
    ///
    /// Fails with [`TransactionError::NonExistent`] if no transaction is
    /// active. On a downstream failure the remaining actions stay bound to
    /// the thread; the caller is expected to abort as cleanup.
    fn commit(&self) -> Result<(), CommitError>;

    /// Discard the calling thread's transaction, buffered actions and all.
    ///
    /// Never fails; a no-op when no transaction is active.
    fn abort(&self);
}

/// Thread-keyed storage of live transactions for one resource instance.
///
/// At most one live transaction per thread. A transaction is only ever
/// touched by the thread it is bound to, so entries never contend; the map
/// exists to let many threads hold independent transactions concurrently.
pub(crate) struct ThreadBindings<A> {
    bindings: DashMap<ThreadId, Transaction<A>>,
}

impl<A> ThreadBindings<A> {
    pub(crate) fn new() -> Self {
        Self {
            bindings: DashMap::new(),
        }
    }

    /// Bind a fresh transaction with the given id to the calling thread
    pub(crate) fn begin(&self, id: TransactionId) -> Result<(), TransactionError> {
        match self.bindings.entry(thread::current().id()) {
            Entry::Occupied(occupied) => Err(TransactionError::Nested {
                existing: occupied.get().id().clone(),
            }),
            Entry::Vacant(vacant) => {
                vacant.insert(Transaction::new(id));
                Ok(())
            }
        }
    }

    /// Append an action to the calling thread's transaction
    pub(crate) fn append(&self, action: A) -> Result<TransactionId, TransactionError> {
        match self.bindings.get_mut(&thread::current().id()) {
            Some(mut transaction) => {
                transaction.push(action);
                Ok(transaction.id().clone())
            }
            None => Err(TransactionError::NonExistent),
        }
    }

    /// Apply the calling thread's transaction against `target` and unbind
    /// it on success. Returns the transaction id and how many actions were
    /// applied.
    ///
    /// The transaction is taken out of the map before applying so that a
    /// slow downstream target never blocks other threads. On failure the
    /// remainder is re-bound; only the owning thread can observe the gap,
    /// and it is busy in here.
    pub(crate) fn commit<T: ?Sized>(
        &self,
        target: &T,
    ) -> Result<(TransactionId, usize), A::Error>
    where
        A: Action<T>,
        A::Error: From<TransactionError>,
    {
        let thread = thread::current().id();
        let (_, mut transaction) = self
            .bindings
            .remove(&thread)
            .ok_or(TransactionError::NonExistent)?;

        let id = transaction.id().clone();
        let count = transaction.len();
        match transaction.apply_actions(target) {
            Ok(()) => Ok((id, count)),
            Err(e) => {
                self.bindings.insert(thread, transaction);
                Err(e)
            }
        }
    }

    /// Unbind and discard the calling thread's transaction, if any.
    /// Returns the discarded id and how many actions it still held.
    pub(crate) fn abort(&self) -> Option<(TransactionId, usize)> {
        self.bindings
            .remove(&thread::current().id())
            .map(|(_, transaction)| (transaction.id().clone(), transaction.len()))
    }

    /// The id of the calling thread's live transaction, if any
    pub(crate) fn current_id(&self) -> Option<TransactionId> {
        self.bindings
            .get(&thread::current().id())
            .map(|transaction| transaction.id().clone())
    }
}

#[cfg(test)]
#[path = "resource_tests.rs"]
mod tests;
