//! Attach, edit, and select refinements
//!
//! The `refinement_v1` backfill rule is "is the slot empty", not "is this
//! AI-generated": it fires on the first attach *and* on a first user edit
//! that happens before any generated refinement exists. After an optimize
//! or promote drops both slots, the next refinement becomes the new v1 for
//! that lineage.

use chrono::{DateTime, Utc};
use muse_model::{Proposal, Refinement};

/// User-edited refinement content, before labeling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefinementEdit {
    pub title: String,
    pub refined_core_idea: String,
    /// Resolved editor output; may carry embedded markup
    pub refined_example: String,
    pub alternatives: Vec<String>,
    pub reasoning: String,
    pub visual_guidance: Option<String>,
    pub tone_guidance: Option<String>,
}

/// Attach a refinement to the live proposal version
///
/// Sets the live `refinement`, and backfills `refinement_v1` iff it is
/// currently unset. This is the only path that ever writes `refinement_v1`.
#[must_use]
pub fn attach_first(proposal: &Proposal, refinement: Refinement) -> Proposal {
    let mut next = proposal.clone();
    if next.refinement_v1.is_none() {
        next.refinement_v1 = Some(refinement.clone());
    }
    next.refinement = Some(refinement);
    next
}

/// Save a user edit as the live (v2) refinement
///
/// Labels the copy `v2-<date>-<time>`, marks it user-modified, and applies
/// the same v1 backfill rule as [`attach_first`]. Never touches the
/// proposal's `version` or `history`.
#[must_use]
pub fn save_user_edit(proposal: &Proposal, edit: RefinementEdit, at: DateTime<Utc>) -> Proposal {
    let edited = Refinement {
        title: edit.title,
        refined_core_idea: edit.refined_core_idea,
        refined_example: edit.refined_example,
        alternatives: edit.alternatives,
        reasoning: edit.reasoning,
        visual_guidance: edit.visual_guidance,
        tone_guidance: edit.tone_guidance,
        is_user_modified: true,
        version_label: Some(version_label(at)),
    };
    attach_first(proposal, edited)
}

/// Label for a user-edited refinement, e.g. `v2-20260830-142501`
#[inline]
#[must_use]
pub fn version_label(at: DateTime<Utc>) -> String {
    at.format("v2-%Y%m%d-%H%M%S").to_string()
}

/// Viewer-local toggle between the original and the edited expression
///
/// Read-only state, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefinementView {
    V1,
    V2,
}

/// Resolve which refinement copy a view shows
///
/// V1 shows `refinement_v1` when present, otherwise the live copy; V2 shows
/// the live copy (callers should only offer it when [`v2_available`]).
#[must_use]
pub fn select_view(proposal: &Proposal, view: RefinementView) -> Option<&Refinement> {
    match view {
        RefinementView::V1 => proposal.refinement_v1.as_ref().or(proposal.refinement.as_ref()),
        RefinementView::V2 => proposal.refinement.as_ref(),
    }
}

/// True when the V2 toggle should be offered: the live refinement carries a
/// label starting with `"v2"`.
#[must_use]
pub fn v2_available(proposal: &Proposal) -> bool {
    proposal.refinement.as_ref().is_some_and(Refinement::is_v2)
}
