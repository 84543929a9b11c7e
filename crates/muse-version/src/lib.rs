//! Muse Version - pure logic for proposal version threads
//!
//! Clones a live proposal into a new version, appends frozen snapshots to a
//! flat history, promotes historical snapshots back to the live slot, and
//! resolves which version a viewer sees.
//!
//! Everything here is pure: no IO, no logging, no retries. The orchestrating
//! layer decides how failures surface; this crate only returns typed errors
//! and never leaves a proposal half-mutated (operations build a new value or
//! fail without touching the input).

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod engine;
pub mod error;

pub use engine::{freeze, finalize, optimize, promote, resolve_display, DisplayedVersion, ReplacementContent};
pub use error::VersionError;
