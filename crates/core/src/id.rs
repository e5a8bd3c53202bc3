// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Transaction id generation

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Identifies one live transaction, for diagnostics and tracing only.
///
/// Ids are unique among transactions alive at the same time; nothing
/// downstream correlates on them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(pub String);

impl TransactionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Generates transaction ids
pub trait IdGen: Clone + Send + Sync {
    fn next(&self) -> TransactionId;
}

/// UUID-based id generator for production use
#[derive(Clone, Default)]
pub struct UuidIdGen;

impl IdGen for UuidIdGen {
    fn next(&self) -> TransactionId {
        TransactionId::new(uuid::Uuid::new_v4().to_string())
    }
}

/// Sequential id generator for testing
#[derive(Clone)]
pub struct SequentialIdGen {
    prefix: String,
    counter: Arc<AtomicU64>,
}

impl SequentialIdGen {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: Arc::new(AtomicU64::new(1)),
        }
    }
}

impl Default for SequentialIdGen {
    fn default() -> Self {
        Self::new("tx")
    }
}

impl IdGen for SequentialIdGen {
    fn next(&self) -> TransactionId {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        TransactionId::new(format!("{}-{}", self.prefix, n))
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
