// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake message sender for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use satchel_core::{MessageSender, SendError, TypedMessage};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Recorded call to a sender method
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SenderCall {
    Send { message: TypedMessage },
    SendDelayed { message: TypedMessage, delay: Duration },
}

#[derive(Default)]
struct FakeState {
    calls: Vec<SenderCall>,
    // Configurable failure mode
    send_fails: bool,
}

/// Fake sender with call recording for testing
#[derive(Clone, Default)]
pub struct FakeSender {
    state: Arc<Mutex<FakeState>>,
}

impl FakeSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<SenderCall> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .clone()
    }

    /// Clear recorded calls
    pub fn clear_calls(&self) {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .clear();
    }

    /// Configure sends to fail for testing error paths
    pub fn set_send_fails(&self, fails: bool) {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .send_fails = fails;
    }
}

impl MessageSender for FakeSender {
    fn send(&self, message: TypedMessage) -> Result<(), SendError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if state.send_fails {
            return Err(SendError::Rejected("fake send failure".to_string()));
        }
        state.calls.push(SenderCall::Send { message });
        Ok(())
    }

    fn send_delayed(&self, message: TypedMessage, delay: Duration) -> Result<(), SendError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if state.send_fails {
            return Err(SendError::Rejected("fake send failure".to_string()));
        }
        state.calls.push(SenderCall::SendDelayed { message, delay });
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
