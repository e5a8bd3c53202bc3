// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Downstream targets for satchel transactions: message senders and file
//! stores, real and fake

pub mod config;
pub mod sender;
pub mod store;
pub mod traced;

pub use config::{AdapterConfig, ConfigError, FileStoreConfig, SenderConfig};
pub use sender::{Delivered, InMemorySender, NoOpSender};
pub use store::{DirFileStore, NoOpFileStore};
pub use traced::{TracedFileStore, TracedSender};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use sender::{FakeSender, SenderCall};
#[cfg(any(test, feature = "test-support"))]
pub use store::{FakeFileStore, StoreCall};
