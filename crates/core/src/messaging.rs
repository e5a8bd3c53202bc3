// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Transactional wrapper for message senders
//!
//! Stands in for a real sender wherever application code publishes
//! messages. Sends are buffered on the calling thread's transaction and
//! only reach the delegate when that transaction commits.

use crate::action::MessageAction;
use crate::id::{IdGen, TransactionId, UuidIdGen};
use crate::resource::{CommitError, ThreadBindings, TransactionalResource};
use crate::sender::{MessageSender, SendError, TypedMessage};
use std::time::Duration;

/// A message sender that defers every send to commit time.
///
/// One instance is shared process-wide; each thread drives its own
/// transaction lifecycle against it independently.
pub struct TransactionalMessageSender<S, G = UuidIdGen> {
    delegate: S,
    bindings: ThreadBindings<MessageAction>,
    id_gen: G,
}

impl<S> TransactionalMessageSender<S> {
    pub fn new(delegate: S) -> Self {
        Self::with_id_gen(delegate, UuidIdGen)
    }
}

impl<S, G> TransactionalMessageSender<S, G> {
    /// Use a specific id generator (deterministic ids in tests)
    pub fn with_id_gen(delegate: S, id_gen: G) -> Self {
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

impl<S, G> MessageSender for TransactionalMessageSender<S, G>
where
    S: MessageSender,
    G: IdGen + 'static,
{
    fn send(&self, message: TypedMessage) -> Result<(), SendError> {
        self.send_delayed(message, Duration::ZERO)
    }

    fn send_delayed(&self, message: TypedMessage, delay: Duration) -> Result<(), SendError> {
        let id = self.bindings.append(MessageAction::Send { message, delay })?;
        tracing::debug!(transaction = %id, ?delay, "send buffered");
        Ok(())
    }
}

impl<S, G> TransactionalResource for TransactionalMessageSender<S, G>
where
    S: MessageSender,
    G: IdGen + 'static,
{
    fn begin(&self) -> Result<(), crate::resource::TransactionError> {
        let id = self.id_gen.next();
        self.bindings.begin(id.clone())?;
        tracing::debug!(transaction = %id, "message transaction began");
        Ok(())
    }

    fn commit(&self) -> Result<(), CommitError> {
        let (id, count) = self
            .bindings
            .commit(&self.delegate)
            .map_err(CommitError::Sender)?;
        tracing::info!(transaction = %id, actions = count, "message transaction committed");
        Ok(())
    }

    fn abort(&self) {
        match self.bindings.abort() {
            Some((id, discarded)) if discarded > 0 => {
                tracing::warn!(transaction = %id, discarded, "message transaction aborted");
            }
            Some((id, _)) => {
                tracing::debug!(transaction = %id, "message transaction aborted");
            }
            None => {}
        }
    }
}

#[cfg(test)]
#[path = "messaging_tests.rs"]
mod tests;
