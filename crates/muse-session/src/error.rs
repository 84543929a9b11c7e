//! Session errors and their user-visible messages
//!
//! The controller surfaces failures as short, actionable messages (never a
//! raw error chain) and always leaves the prior state intact.

use crate::stage::StageError;
use muse_collab::CollabError;
use muse_store::StoreError;
use muse_version::VersionError;

/// Failure of a session operation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Another mutating operation is already in flight for this run
    #[error("a task is already running for this brief")]
    Busy,

    #[error("not logged in")]
    NotLoggedIn,

    #[error(transparent)]
    Stage(#[from] StageError),

    #[error("no such project")]
    NoSuchProject,

    #[error("no such proposal")]
    NoSuchProposal,

    #[error("no such brief")]
    NoSuchBrief,

    /// The run has no refined brief text to work against
    #[error("brief context missing")]
    MissingBrief,

    /// Bad user input; no state mutation occurred
    #[error("invalid input: {0}")]
    Validation(String),

    #[error(transparent)]
    Collab(#[from] CollabError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Version(#[from] VersionError),
}

impl SessionError {
    /// Short, actionable message for the error overlay
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Busy => "Please wait for the current task to finish.",
            Self::NotLoggedIn => "Please sign in to continue.",
            Self::Stage(_) => "That action is not available right now.",
            Self::NoSuchProject => "That project no longer exists.",
            Self::NoSuchProposal => "That proposal no longer exists.",
            Self::NoSuchBrief => "That creative task no longer exists.",
            Self::MissingBrief | Self::Version(VersionError::MissingBriefContext) => {
                "The brief needs to be refined before this step."
            }
            Self::Validation(_) => "Please check your input and try again.",
            Self::Collab(CollabError::Configuration(_)) => {
                "The AI service is not configured. Contact support."
            }
            Self::Collab(CollabError::RateLimit { .. }) => {
                "The AI service is busy. Try again in a moment."
            }
            Self::Collab(_) => "Generation failed. Please try again.",
            Self::Store(_) => "Saving failed. Your work is kept in this session.",
            Self::Version(_) => "This proposal can no longer be changed.",
        }
    }
}
