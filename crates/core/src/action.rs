// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Buffered side effects, one variant per kind
//!
//! An action describes a single deferred operation against a downstream
//! target. It is appended to a transaction log when requested and consumed
//! when the log is applied on commit.

use crate::sender::{MessageSender, SendError, TypedMessage};
use crate::store::{FileItem, FilePath, FileStore, FileStoreError};
use std::time::Duration;

/// One deferred side effect against a target of type `T`.
///
/// `apply` performs the real operation and consumes the action. There is no
/// retry or recovery at this layer; failures propagate to the committer.
pub trait Action<T: ?Sized>: Send {
    type Error;

    fn apply(self, target: &T) -> Result<(), Self::Error>;
}

/// A deferred message send
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageAction {
    /// Send a message, immediately when `delay` is zero, otherwise via the
    /// delayed-delivery path
    Send {
        message: TypedMessage,
        delay: Duration,
    },
}

impl<S: MessageSender + ?Sized> Action<S> for MessageAction {
    type Error = SendError;

    fn apply(self, target: &S) -> Result<(), SendError> {
        match self {
            MessageAction::Send { message, delay } => {
                if delay.is_zero() {
                    target.send(message)
                } else {
                    target.send_delayed(message, delay)
                }
            }
        }
    }
}

/// A deferred file store mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStoreAction {
    /// Write an item at a path
    Write { path: FilePath, item: FileItem },
    /// Delete the item at a path
    Delete { path: FilePath },
}

impl<F: FileStore + ?Sized> Action<F> for FileStoreAction {
    type Error = FileStoreError;

    fn apply(self, target: &F) -> Result<(), FileStoreError> {
        match self {
            FileStoreAction::Write { path, item } => target.write(&path, &item),
            FileStoreAction::Delete { path } => target.delete(&path),
        }
    }
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
