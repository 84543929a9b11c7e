//! Version-thread operations
//!
//! The version counter only ever moves forward: optimizing bumps it,
//! promoting an old snapshot bumps it again rather than rewinding, so the
//! thread keeps a total order and a full audit trail.

use crate::error::VersionError;
use muse_model::{ExecutionPlan, Proposal, ProposalSnapshot};

/// Freshly generated replacement content for an optimization round
///
/// The concept title is deliberately absent: it is held constant across
/// optimization of a thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementContent {
    pub core_idea: String,
    pub detailed_description: String,
    pub example: String,
    pub why_it_works: String,
}

/// Freeze the live proposal into a flat history record
///
/// The snapshot keeps the content and the refinement pair of the version it
/// records, but never nested history, finalization, or execution details
/// (the snapshot type cannot express them).
#[must_use]
pub fn freeze(proposal: &Proposal) -> ProposalSnapshot {
    ProposalSnapshot {
        id: proposal.id,
        version: proposal.version,
        content: proposal.content.clone(),
        refinement: proposal.refinement.clone(),
        refinement_v1: proposal.refinement_v1.clone(),
    }
}

/// Produce the next version of a thread from regenerated content
///
/// The old live copy is frozen and appended to history; the new version
/// starts without a refinement (refining must be re-triggered explicitly).
///
/// # Errors
/// - [`VersionError::AlreadyFinalized`] if the live version is finalized
/// - [`VersionError::MissingBriefContext`] if `context_brief` is absent or
///   empty; the caller must abort and leave prior state untouched
/// - [`VersionError::VersionOverflow`] if the counter cannot advance
pub fn optimize(
    proposal: &Proposal,
    replacement: ReplacementContent,
    context_brief: Option<&str>,
) -> Result<Proposal, VersionError> {
    require_context(context_brief)?;
    if proposal.is_finalized {
        return Err(VersionError::AlreadyFinalized);
    }
    let next_version = proposal
        .version
        .checked_add(1)
        .ok_or(VersionError::VersionOverflow)?;

    let mut history = proposal.history.clone();
    history.push(freeze(proposal));

    let mut content = proposal.content.clone();
    content.core_idea = replacement.core_idea;
    content.detailed_description = replacement.detailed_description;
    content.example = replacement.example;
    content.why_it_works = replacement.why_it_works;

    Ok(Proposal {
        id: proposal.id,
        version: next_version,
        content,
        is_finalized: false,
        execution_details: None,
        refinement: None,
        refinement_v1: None,
        history,
    })
}

/// Lock a version and attach its execution plan
///
/// Leaves `version` and `history` untouched.
///
/// # Errors
/// [`VersionError::AlreadyFinalized`] if this version already carries a plan.
pub fn finalize(proposal: &Proposal, plan: ExecutionPlan) -> Result<Proposal, VersionError> {
    if proposal.is_finalized {
        return Err(VersionError::AlreadyFinalized);
    }
    let mut finalized = proposal.clone();
    finalized.is_finalized = true;
    finalized.execution_details = Some(plan);
    Ok(finalized)
}

/// Re-activate a historical snapshot as the new live version
///
/// The counter strictly increases even when "going back": promoting v2 while
/// live is v5 yields v6 with v2's content. The previous live copy (finalized
/// or not) is frozen into history; the promoted version starts un-finalized
/// so the caller can run a fresh finalization.
///
/// # Errors
/// - [`VersionError::ForeignSnapshot`] if the snapshot is not an entry of
///   this thread's history
/// - [`VersionError::MissingBriefContext`] / [`VersionError::VersionOverflow`]
///   as for [`optimize`]
pub fn promote(
    live: &Proposal,
    snapshot: &ProposalSnapshot,
    context_brief: Option<&str>,
) -> Result<Proposal, VersionError> {
    require_context(context_brief)?;
    if snapshot.id != live.id || live.snapshot_at(snapshot.version).is_none() {
        return Err(VersionError::ForeignSnapshot);
    }
    let next_version = live
        .version
        .checked_add(1)
        .ok_or(VersionError::VersionOverflow)?;

    let mut history = live.history.clone();
    history.push(freeze(live));

    Ok(Proposal {
        id: live.id,
        version: next_version,
        content: snapshot.content.clone(),
        is_finalized: false,
        execution_details: None,
        refinement: None,
        refinement_v1: None,
        history,
    })
}

/// A resolved view of one version of a thread
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayedVersion<'a> {
    /// The live proposal
    Live(&'a Proposal),
    /// A frozen history entry
    Historical(&'a ProposalSnapshot),
}

impl DisplayedVersion<'_> {
    /// Version number of the displayed copy
    #[inline]
    #[must_use]
    pub fn version(&self) -> u32 {
        match self {
            Self::Live(p) => p.version,
            Self::Historical(s) => s.version,
        }
    }

    /// Content of the displayed copy
    #[inline]
    #[must_use]
    pub fn content(&self) -> &muse_model::ProposalContent {
        match self {
            Self::Live(p) => &p.content,
            Self::Historical(s) => &s.content,
        }
    }
}

/// Resolve which copy a viewer sees for a selected version number
///
/// Pure read: live if the number matches the live version, the matching
/// history entry otherwise, falling back to live when nothing matches
/// (cannot occur while the contiguity invariant holds). Selection never
/// mutates stored data.
#[must_use]
pub fn resolve_display(proposal: &Proposal, selected: u32) -> DisplayedVersion<'_> {
    if selected == proposal.version {
        return DisplayedVersion::Live(proposal);
    }
    match proposal.snapshot_at(selected) {
        Some(snapshot) => DisplayedVersion::Historical(snapshot),
        None => DisplayedVersion::Live(proposal),
    }
}

fn require_context(context_brief: Option<&str>) -> Result<(), VersionError> {
    match context_brief {
        Some(text) if !text.trim().is_empty() => Ok(()),
        _ => Err(VersionError::MissingBriefContext),
    }
}
