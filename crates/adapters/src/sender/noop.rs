// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op sender for when message delivery is disabled.

use satchel_core::{MessageSender, SendError, TypedMessage};
use std::time::Duration;

/// Sender that discards every message.
///
/// Used when delivery is disabled or in minimal deployments.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpSender;

impl NoOpSender {
    pub fn new() -> Self {
        Self
    }
}

impl MessageSender for NoOpSender {
    fn send(&self, _message: TypedMessage) -> Result<(), SendError> {
        Ok(())
    }

    fn send_delayed(&self, _message: TypedMessage, _delay: Duration) -> Result<(), SendError> {
        Ok(())
    }
}
