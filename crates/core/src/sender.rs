// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Message sender seam and message value types

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// A message with a string type discriminator and an opaque body.
///
/// The discriminator is what collaborating routers dispatch on; this crate
/// never inspects the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedMessage {
    pub kind: String,
    pub body: String,
}

impl TypedMessage {
    pub fn new(kind: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            body: body.into(),
        }
    }
}

impl std::fmt::Display for TypedMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}

/// Errors from send operations
#[derive(Debug, Error)]
pub enum SendError {
    #[error("message rejected: {0}")]
    Rejected(String),
    #[error("delay too long: requested {requested:?}, max {max:?}")]
    DelayTooLong { requested: Duration, max: Duration },
    #[error(transparent)]
    Transaction(#[from] crate::resource::TransactionError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Seam for message delivery.
///
/// Implementations deliver immediately; delivery-with-delay hands the
/// message to the transport with a visibility delay. Neither path retries.
pub trait MessageSender: Send + Sync + 'static {
    /// Send a message immediately
    fn send(&self, message: TypedMessage) -> Result<(), SendError>;

    /// Send a message that becomes deliverable after `delay`
    fn send_delayed(&self, message: TypedMessage, delay: Duration) -> Result<(), SendError>;
}

#[cfg(test)]
#[path = "sender_tests.rs"]
mod tests;
