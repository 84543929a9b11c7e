//! Markup detection heuristic
//!
//! `refined_example` has two producers: structured AI JSON (plain
//! multi-line text) and a free-form rich editor (HTML). Both land in the
//! same field, so consumers branch on this heuristic: render rich when a
//! tag-like substring is present, otherwise split the plain text into the
//! structured sub-fields.

/// True when the text contains a tag-like substring
///
/// A tag-like substring is `<` immediately followed by an ASCII letter or
/// `/`, with a closing `>` somewhere after it. Covers `<p>`, `</div>`,
/// `<br/>`; plain comparisons like `a < b` or `x <= 3 > y` do not fire
/// because no letter follows the `<` directly.
#[must_use]
pub fn looks_like_markup(text: &str) -> bool {
    let bytes = text.as_bytes();
    for (i, window) in bytes.windows(2).enumerate() {
        if window[0] == b'<' && (window[1].is_ascii_alphabetic() || window[1] == b'/') {
            if bytes[i + 2..].contains(&b'>') {
                return true;
            }
        }
    }
    false
}
