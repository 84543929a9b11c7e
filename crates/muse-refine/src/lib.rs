//! Muse Refine - pure logic for the expression layer
//!
//! A refinement is a side-channel on a proposal version: attaching or
//! editing one never touches the proposal's `version` or `history`. The
//! first refinement a version ever sees is captured once as
//! `refinement_v1`; user edits replace only the live copy under a
//! `v2-<timestamp>` label.
//!
//! Pure like `muse-version`: no IO, no logging, inputs are never mutated.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod display;
pub mod engine;
pub mod markup;

pub use display::{RefinementDisplay, StructuredView};
pub use engine::{attach_first, save_user_edit, select_view, v2_available, RefinementEdit, RefinementView};
pub use markup::looks_like_markup;
