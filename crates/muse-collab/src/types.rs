//! Structured collaborator results
//!
//! Raw shapes as the AI returns them, before the version engine fills in
//! identity, version, and history.

use muse_model::{Proposal, ProposalContent};
use serde::{Deserialize, Serialize};

/// Result of the brief clarification call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefRefinement {
    /// Clarified summary of the brief
    pub summary: String,
    /// Follow-up questions for the user
    pub questions: Vec<String>,
}

/// A generated proposal before versioning
///
/// Carries only content: id, version, history, finalization, and execution
/// details are filled in by the version engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawProposal {
    pub concept_title: String,
    pub core_idea: String,
    pub detailed_description: String,
    pub example: String,
    pub why_it_works: String,
}

impl RawProposal {
    /// Install this content as a fresh version-1 proposal thread
    #[inline]
    #[must_use]
    pub fn into_thread(self) -> Proposal {
        Proposal::new_thread(ProposalContent {
            concept_title: self.concept_title,
            core_idea: self.core_idea,
            detailed_description: self.detailed_description,
            example: self.example,
            why_it_works: self.why_it_works,
        })
    }
}
