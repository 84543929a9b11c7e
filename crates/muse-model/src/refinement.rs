//! Refinement (expression layer)
//!
//! A secondary, more concrete rendering of a proposal's idea, versioned
//! independently of the proposal itself: the first refinement for a version
//! is retained as `refinement_v1` on the proposal, user edits replace only
//! the live copy and carry a `v2-...` label.

use serde::{Deserialize, Serialize};

/// A concrete expression of a proposal's idea
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Refinement {
    pub title: String,
    pub refined_core_idea: String,
    /// May hold embedded markup when produced by the rich editor; see
    /// `muse-refine` for the detection heuristic.
    pub refined_example: String,
    /// Ordered alternative expressions
    pub alternatives: Vec<String>,
    pub reasoning: String,
    pub visual_guidance: Option<String>,
    pub tone_guidance: Option<String>,
    /// True once a user edit produced this copy
    pub is_user_modified: bool,
    /// Unset for the original (implicitly v1); `v2-<date>-<time>` after an edit
    pub version_label: Option<String>,
}

impl Refinement {
    /// True when this copy is a user-edited (v2) expression
    #[inline]
    #[must_use]
    pub fn is_v2(&self) -> bool {
        self.version_label
            .as_deref()
            .is_some_and(|label| label.starts_with("v2"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Refinement {
        Refinement {
            title: "Spark".to_string(),
            refined_core_idea: "idea".to_string(),
            refined_example: "example".to_string(),
            alternatives: vec!["alt".to_string()],
            reasoning: "because".to_string(),
            visual_guidance: None,
            tone_guidance: None,
            is_user_modified: false,
            version_label: None,
        }
    }

    #[test]
    fn unset_label_is_not_v2() {
        assert!(!sample().is_v2());
    }

    #[test]
    fn v2_label_detected_by_prefix() {
        let mut r = sample();
        r.version_label = Some("v2-20260830-120000".to_string());
        assert!(r.is_v2());

        r.version_label = Some("v1".to_string());
        assert!(!r.is_v2());
    }
}
