//! Muse Store - dual persistence for brief-runs
//!
//! Two independent sinks with different trust levels:
//! - local durable key-value store (username key, whole user record):
//!   primary, its deletion failures are surfaced
//! - remote networked store (brief id key): additive backup, best-effort
//!
//! The [`Coordinator`] formalizes the "try both, swallow independently"
//! pattern as a two-sink write with separate result channels.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod coordinator;
pub mod error;
pub mod local;
pub mod remote;
pub mod retry;

pub use coordinator::{Coordinator, SaveOutcome};
pub use error::StoreError;
pub use local::{JsonFileStore, LocalStore, MemoryStore};
pub use remote::{BriefRecord, RemoteStore};
pub use retry::{with_retry, RetryPolicy};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
