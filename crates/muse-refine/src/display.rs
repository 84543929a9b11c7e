//! Dual-mode display resolution for a refinement
//!
//! See [`crate::markup`] for why one field needs two renderings.

use crate::markup::looks_like_markup;
use muse_model::Refinement;

/// Structured sub-fields shown when the example is plain text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuredView<'a> {
    pub title: &'a str,
    pub core_idea: &'a str,
    pub example: &'a str,
    pub alternatives: &'a [String],
    pub reasoning: &'a str,
}

/// How a consumer should render a refinement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefinementDisplay<'a> {
    /// `refined_example` carries markup: render it as rich content verbatim
    Rich(&'a str),
    /// Plain text: render the structured sub-fields
    Structured(StructuredView<'a>),
}

impl<'a> RefinementDisplay<'a> {
    /// Pick the rendering mode for a refinement
    #[must_use]
    pub fn resolve(refinement: &'a Refinement) -> Self {
        if looks_like_markup(&refinement.refined_example) {
            Self::Rich(&refinement.refined_example)
        } else {
            Self::Structured(StructuredView {
                title: &refinement.title,
                core_idea: &refinement.refined_core_idea,
                example: &refinement.refined_example,
                alternatives: &refinement.alternatives,
                reasoning: &refinement.reasoning,
            })
        }
    }
}
