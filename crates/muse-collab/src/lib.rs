//! Muse Collab - the AI collaborator boundary
//!
//! Treats generative calls as an opaque async capability: structured input
//! in, structured JSON out, fallible and retryable. This crate owns:
//! - the [`Collaborator`] trait (one method per call type)
//! - the error taxonomy with retryable/non-retryable classification
//! - the retry/timeout wrapper every call goes through
//! - the single coercion step that turns untrusted AI JSON into typed values
//! - per-creative-type guidance text and the inspiration relevance filter
//!
//! Transport (HTTP, auth, prompt assembly) lives in implementations outside
//! this workspace; tests use scripted fakes.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod coerce;
pub mod error;
pub mod guidance;
pub mod inspiration;
pub mod retry;
pub mod types;

pub use error::CollabError;
pub use retry::{call_with_retry, RetryPolicy};
pub use types::{BriefRefinement, RawProposal};

use async_trait::async_trait;
use muse_model::{CreativeType, ExecutionPlan, InspirationCase, Proposal, Refinement};

/// The generative-AI collaborator contract
///
/// One method per call type (wire shapes in [`types`]). All methods:
/// - validate input before calling (malformed input is
///   [`CollabError::Validation`], never sent)
/// - run their own coercion step on output (see [`coerce`])
/// - are driven through [`retry::call_with_retry`] by the session layer
#[async_trait]
pub trait Collaborator: Send + Sync {
    /// Clarify a raw brief into a summary plus follow-up questions
    async fn refine_brief(
        &self,
        text: &str,
        creative_type: CreativeType,
        project_hint: Option<&str>,
    ) -> Result<BriefRefinement, CollabError>;

    /// Fetch reference cases for a refined brief
    async fn inspirations(
        &self,
        refined_brief: &str,
        creative_type: CreativeType,
    ) -> Result<Vec<InspirationCase>, CollabError>;

    /// Generate the initial proposals (exactly three)
    async fn generate_proposals(
        &self,
        refined_brief: &str,
        inspirations: &[InspirationCase],
        project_context: &str,
    ) -> Result<Vec<RawProposal>, CollabError>;

    /// Regenerate a proposal's content from user feedback
    ///
    /// The concept title is held constant by the version engine regardless
    /// of what comes back.
    async fn optimize_proposal(
        &self,
        proposal: &Proposal,
        feedback: &str,
        context_brief: &str,
    ) -> Result<RawProposal, CollabError>;

    /// Produce the execution plan for a finalizing proposal
    async fn execution_plan(
        &self,
        proposal: &Proposal,
        creative_type: CreativeType,
        context_brief: &str,
    ) -> Result<ExecutionPlan, CollabError>;

    /// Produce a concrete expression (refinement) of a proposal's idea
    ///
    /// Arrives with `is_user_modified = false` and no version label
    /// (implicitly v1).
    async fn refine_expression(
        &self,
        proposal: &Proposal,
        creative_type: CreativeType,
        context_brief: &str,
    ) -> Result<Refinement, CollabError>;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
