//! Brief-run: one end-to-end creative task
//!
//! From initial brief text through clarification, inspiration, and the
//! ordered list of live proposals. Persisted after every mutation.

use crate::ids::{BriefId, ProposalId};
use crate::proposal::Proposal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Creative task categories, each with its own generation guidance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreativeType {
    Slogan,
    SocialCopy,
    GraphicDesign,
    Video,
    PrEvent,
    BrandNaming,
}

impl std::fmt::Display for CreativeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Slogan => "slogan",
            Self::SocialCopy => "social copy",
            Self::GraphicDesign => "graphic design",
            Self::Video => "video",
            Self::PrEvent => "PR event",
            Self::BrandNaming => "brand naming",
        };
        f.write_str(name)
    }
}

/// The brief as the user first submitted it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialBrief {
    pub text: String,
    pub creative_type: CreativeType,
}

/// A reference case fetched during inspiration search (read-only once fetched)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspirationCase {
    pub title: String,
    pub highlight: String,
    /// Relevance score, 0-100
    pub relevance: u8,
    pub category: String,
    /// Present only when it starts with `http://` or `https://`
    pub source_url: Option<String>,
}

/// One full creative task instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefRun {
    pub id: BriefId,
    pub created_at: DateTime<Utc>,
    pub initial_brief: InitialBrief,
    /// Clarified brief after the Q&A round
    pub refined_brief_text: Option<String>,
    pub inspirations: Vec<InspirationCase>,
    /// Live proposals in generation order; non-empty only after generation
    /// succeeds. Each proposal id is unique within the run.
    pub proposals: Vec<Proposal>,
}

impl BriefRun {
    /// Create a fresh run for a submitted brief
    #[inline]
    #[must_use]
    pub fn new(initial_brief: InitialBrief) -> Self {
        Self {
            id: BriefId::new(),
            created_at: Utc::now(),
            initial_brief,
            refined_brief_text: None,
            inspirations: Vec::new(),
            proposals: Vec::new(),
        }
    }

    /// Find a live proposal by thread id
    #[must_use]
    pub fn proposal(&self, id: ProposalId) -> Option<&Proposal> {
        self.proposals.iter().find(|p| p.id == id)
    }

    /// Mutable lookup by thread id
    pub fn proposal_mut(&mut self, id: ProposalId) -> Option<&mut Proposal> {
        self.proposals.iter_mut().find(|p| p.id == id)
    }
}
