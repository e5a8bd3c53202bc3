//! satchel-core: thread-scoped transactional buffering of side effects
//!
//! This crate provides:
//! - Action sum types describing deferred message sends and file mutations
//! - A per-thread transaction log applied in FIFO order on commit
//! - begin/commit/abort state machines wrapping a message sender and a
//!   file store
//! - A resource manager and an explicit unit-of-work wrapper for the
//!   transaction boundary
//!
//! Buffered actions give all-or-nothing, at-least-once semantics over
//! targets that are not themselves transactional: nothing reaches the
//! downstream target before commit, and an abort discards the buffer. A
//! commit that fails partway is not rolled back, and nothing survives a
//! process restart.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod id;

// Downstream seams
pub mod sender;
pub mod store;

// The transaction core (order matters for dependencies)
pub mod action;
pub mod transaction;
pub mod resource;
pub mod messaging;
pub mod filestore;
pub mod manager;

// Re-exports
pub use action::{Action, FileStoreAction, MessageAction};
pub use filestore::TransactionalFileStore;
pub use id::{IdGen, SequentialIdGen, TransactionId, UuidIdGen};
pub use manager::{unit_of_work, TransactionalResourceManager, UnitOfWorkError};
pub use messaging::TransactionalMessageSender;
pub use resource::{CommitError, TransactionError, TransactionalResource};
pub use sender::{MessageSender, SendError, TypedMessage};
pub use store::{FileItem, FilePath, FileStore, FileStoreError};
pub use transaction::Transaction;
