//! Per-creative-type guidance for expression refinement
//!
//! Each creative type gets distinct guidance text appended to the
//! expression-refinement prompt. Implementations of
//! [`Collaborator`](crate::Collaborator) are expected to include this
//! verbatim when building the call.

use muse_model::CreativeType;

/// Guidance text for refining a proposal into a concrete expression
#[must_use]
pub fn expression_guidance(creative_type: CreativeType) -> &'static str {
    match creative_type {
        CreativeType::Slogan => {
            "Deliver one polished slogan line plus shorter and longer variants. \
             Keep it speakable, rhythmic, and free of brand-name puns unless the \
             brief asks for them."
        }
        CreativeType::SocialCopy => {
            "Write platform-ready copy: a hook line, body under 120 words, and a \
             closing call to action. Offer alternatives with different tones."
        }
        CreativeType::GraphicDesign => {
            "Describe the key visual: composition, palette, focal element, and \
             typography direction. Include visual guidance a designer can execute \
             without further questions."
        }
        CreativeType::Video => {
            "Outline a shot-by-shot treatment: opening hook, three beats, closing \
             frame. Note pacing, voiceover tone, and where the product appears."
        }
        CreativeType::PrEvent => {
            "Shape the event moment: venue concept, headline activity, press hook, \
             and the single photo the coverage should produce."
        }
        CreativeType::BrandNaming => {
            "Propose the primary name with pronunciation and meaning, plus ranked \
             alternatives. Flag trademark-adjacent risks in the reasoning."
        }
    }
}
