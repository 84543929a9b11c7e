//! Muse Session - workflow orchestration
//!
//! The stateful layer that ties everything together: the stage machine
//! that gates which operations are legal, the session controller that
//! drives collaborator calls through retry and merges results into the
//! user's in-memory state, and the error surface with short user-facing
//! messages. Every mutation is handed to the persistence coordinator;
//! every failure lands in a dismissible overlay with the stage restored
//! to somewhere safe.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod controller;
pub mod error;
pub mod stage;

pub use controller::{ProjectSelector, SessionController};
pub use error::SessionError;
pub use stage::{validate_transition, Stage, StageError};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
