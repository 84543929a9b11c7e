//! Proposal and its flattened version history
//!
//! A proposal thread is one stable [`ProposalId`] with exactly one live
//! [`Proposal`] and a flat, append-only list of [`ProposalSnapshot`]s.
//! Snapshots never carry nested history, are never finalized, and never
//! hold execution details.

use crate::ids::ProposalId;
use crate::refinement::Refinement;
use serde::{Deserialize, Serialize};

/// The five content fields of a creative concept
///
/// Shared by the live proposal and its snapshots; flattened into both so the
/// persisted JSON stays a single object per version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalContent {
    /// Held constant across optimization of the same thread
    pub concept_title: String,
    pub core_idea: String,
    pub detailed_description: String,
    pub example: String,
    pub why_it_works: String,
}

/// Execution plan attached to a finalized proposal version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionPlan {
    pub title: String,
    pub content: String,
}

/// A frozen record of a past live version
///
/// # Invariants
/// - never nested: a snapshot has no history of its own
/// - always un-finalized, never carries execution details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalSnapshot {
    pub id: ProposalId,
    pub version: u32,
    #[serde(flatten)]
    pub content: ProposalContent,
    /// Refinement pair frozen with the version it belonged to
    pub refinement: Option<Refinement>,
    pub refinement_v1: Option<Refinement>,
}

/// A single creative concept at its current live version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    pub id: ProposalId,
    /// Positive, strictly increasing per thread
    pub version: u32,
    #[serde(flatten)]
    pub content: ProposalContent,
    pub is_finalized: bool,
    /// Present iff finalized
    pub execution_details: Option<ExecutionPlan>,
    /// Live expression for this version
    pub refinement: Option<Refinement>,
    /// Original pre-edit expression, captured at most once per version lineage
    pub refinement_v1: Option<Refinement>,
    /// Flat, append-only list of prior live snapshots
    pub history: Vec<ProposalSnapshot>,
}

impl Proposal {
    /// Create the initial (version 1) proposal of a new thread
    #[inline]
    #[must_use]
    pub fn new_thread(content: ProposalContent) -> Self {
        Self {
            id: ProposalId::new(),
            version: 1,
            content,
            is_finalized: false,
            execution_details: None,
            refinement: None,
            refinement_v1: None,
            history: Vec::new(),
        }
    }

    /// Highest version number in the thread (live or historical)
    #[must_use]
    pub fn max_version(&self) -> u32 {
        self.history
            .iter()
            .map(|s| s.version)
            .chain(std::iter::once(self.version))
            .max()
            .unwrap_or(self.version)
    }

    /// Look up a historical snapshot by version number
    #[must_use]
    pub fn snapshot_at(&self, version: u32) -> Option<&ProposalSnapshot> {
        self.history.iter().find(|s| s.version == version)
    }

    /// Check the contiguity invariant: history versions plus the live
    /// version form exactly `{1, ..., version}` with no duplicates.
    #[must_use]
    pub fn version_set_is_contiguous(&self) -> bool {
        let mut versions: Vec<u32> = self.history.iter().map(|s| s.version).collect();
        versions.push(self.version);
        versions.sort_unstable();
        versions.len() as u32 == self.version
            && versions.iter().copied().eq(1..=self.version)
    }
}
