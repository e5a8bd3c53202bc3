// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-process message sender
//!
//! Delivers into a shared in-memory buffer that a consumer drains. The
//! local and development stand-in for a real queue transport.

use crate::config::SenderConfig;
use chrono::{DateTime, Utc};
use satchel_core::{MessageSender, SendError, TypedMessage};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A message as it arrived at the sender
#[derive(Debug, Clone)]
pub struct Delivered {
    pub message: TypedMessage,
    /// The visibility delay the message was sent with; zero for the
    /// immediate path
    pub delay: Duration,
    pub sent_at: DateTime<Utc>,
}

/// Sender backed by an in-process buffer
#[derive(Clone)]
pub struct InMemorySender {
    delivered: Arc<Mutex<Vec<Delivered>>>,
    max_delay: Duration,
}

impl InMemorySender {
    pub fn new() -> Self {
        Self::from_config(&SenderConfig::default())
    }

    pub fn from_config(config: &SenderConfig) -> Self {
        Self {
            delivered: Arc::new(Mutex::new(Vec::new())),
            max_delay: config.max_delay,
        }
    }

    /// Take every delivered message out of the buffer
    pub fn drain(&self) -> Vec<Delivered> {
        std::mem::take(
            &mut *self
                .delivered
                .lock()
                .unwrap_or_else(|e| e.into_inner()),
        )
    }

    /// How many messages are waiting in the buffer
    pub fn len(&self) -> usize {
        self.delivered
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn deliver(&self, message: TypedMessage, delay: Duration) {
        self.delivered
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(Delivered {
                message,
                delay,
                sent_at: Utc::now(),
            });
    }
}

impl Default for InMemorySender {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageSender for InMemorySender {
    fn send(&self, message: TypedMessage) -> Result<(), SendError> {
        tracing::trace!(kind = %message.kind, "delivered");
        self.deliver(message, Duration::ZERO);
        Ok(())
    }

    fn send_delayed(&self, message: TypedMessage, delay: Duration) -> Result<(), SendError> {
        if delay > self.max_delay {
            return Err(SendError::DelayTooLong {
                requested: delay,
                max: self.max_delay,
            });
        }
        tracing::trace!(kind = %message.kind, ?delay, "delivered with delay");
        self.deliver(message, delay);
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
