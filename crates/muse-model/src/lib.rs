//! Muse Model - entity types for the creative-ideation core
//!
//! Defines the durable entities shared by every other crate:
//! - [`Proposal`] and its flattened version [`history`](Proposal::history)
//! - [`Refinement`] (the v1/v2 expression layer)
//! - [`BriefRun`], [`Project`], [`User`]
//!
//! Types here carry data and invariant *checks*; the mutation rules live in
//! `muse-version` and `muse-refine`, which stay pure over these structs.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod brief_run;
pub mod ids;
pub mod project;
pub mod proposal;
pub mod refinement;

pub use brief_run::{BriefRun, CreativeType, InitialBrief, InspirationCase};
pub use ids::{BriefId, ProjectId, ProposalId};
pub use project::{Language, Project, User};
pub use proposal::{ExecutionPlan, Proposal, ProposalContent, ProposalSnapshot};
pub use refinement::Refinement;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
