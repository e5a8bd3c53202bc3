// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fan-out of begin/commit/abort across registered resources
//!
//! One manager wraps one logical unit of work that may touch several
//! buffered resources (a message sender and a file store, say). It calls
//! begin and commit on every resource in registration order and abort on
//! all of them as cleanup after any failure.

use crate::resource::{CommitError, TransactionError, TransactionalResource};
use std::sync::Arc;
use thiserror::Error;

/// Coordinates the transaction lifecycle across a fixed set of resources
#[derive(Clone, Default)]
pub struct TransactionalResourceManager {
    resources: Vec<Arc<dyn TransactionalResource>>,
}

impl TransactionalResourceManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource. Registration order is the order begin and
    /// commit run in.
    pub fn register(mut self, resource: Arc<dyn TransactionalResource>) -> Self {
        self.resources.push(resource);
        self
    }

    /// Begin a transaction on every resource, in registration order.
    /// The first failure surfaces; the unit of work must not proceed.
    pub fn begin(&self) -> Result<(), TransactionError> {
        for resource in &self.resources {
            resource.begin()?;
        }
        Ok(())
    }

    /// Commit every resource, in registration order. The first failure
    /// surfaces; already-committed resources are not undone.
    pub fn commit(&self) -> Result<(), CommitError> {
        for resource in &self.resources {
            resource.commit()?;
        }
        Ok(())
    }

    /// Abort every resource. Always safe: abort never fails, whether or
    /// not a transaction is active on any given resource.
    pub fn abort(&self) {
        for resource in &self.resources {
            resource.abort();
        }
    }
}

/// Failure of a wrapped unit of work, by phase
#[derive(Debug, Error)]
pub enum UnitOfWorkError<E> {
    #[error("begin failed: {0}")]
    Begin(TransactionError),
    #[error("unit of work failed")]
    Task(E),
    #[error("commit failed: {0}")]
    Commit(CommitError),
}

/// Run `task` inside one transaction over every resource `manager` holds.
///
/// Begins on all resources, runs the task, commits on normal completion.
/// Any failure, from begin, the task, or commit, aborts every resource and
/// surfaces as the corresponding [`UnitOfWorkError`] variant. Actions a
/// resource already applied before a commit failure are not undone.
pub fn unit_of_work<T, E>(
    manager: &TransactionalResourceManager,
    task: impl FnOnce() -> Result<T, E>,
) -> Result<T, UnitOfWorkError<E>> {
    if let Err(e) = manager.begin() {
        manager.abort();
        return Err(UnitOfWorkError::Begin(e));
    }

    match task() {
        Ok(value) => match manager.commit() {
            Ok(()) => Ok(value),
            Err(e) => {
                tracing::debug!(error = %e, "unit of work aborted at commit");
                manager.abort();
                Err(UnitOfWorkError::Commit(e))
            }
        },
        Err(e) => {
            tracing::debug!("unit of work aborted");
            manager.abort();
            Err(UnitOfWorkError::Task(e))
        }
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;
