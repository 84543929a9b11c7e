//! Coercion and validation of untrusted collaborator output
//!
//! The collaborator's JSON schema is not trusted: fields documented as
//! strings sometimes arrive as objects, numbers, or arrays. All coercion
//! happens here, in one step immediately after each call, so nothing
//! downstream carries defensive checks. Anything that cannot be coerced is
//! a [`CollabError::Validation`].

use crate::error::CollabError;
use crate::types::RawProposal;
use muse_model::InspirationCase;
use serde_json::Value;

/// Number of proposals a generation call must return
pub const EXPECTED_PROPOSALS: usize = 3;

/// Coerce any JSON value into a display string
///
/// Strings pass through; numbers and booleans format; objects and arrays
/// are re-stringified; null becomes empty.
#[must_use]
pub fn coerce_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}

fn coerce_field(object: &Value, field: &str) -> Result<String, CollabError> {
    let text = object
        .get(field)
        .map(coerce_string)
        .unwrap_or_default();
    if text.trim().is_empty() {
        return Err(CollabError::Validation(format!(
            "collaborator output missing field `{field}`"
        )));
    }
    Ok(text)
}

/// Parse one raw proposal out of a JSON object
///
/// # Errors
/// [`CollabError::Validation`] when any of the five content fields is
/// missing or empty after coercion.
pub fn raw_proposal_from_value(value: &Value) -> Result<RawProposal, CollabError> {
    Ok(RawProposal {
        concept_title: coerce_field(value, "concept_title")?,
        core_idea: coerce_field(value, "core_idea")?,
        detailed_description: coerce_field(value, "detailed_description")?,
        example: coerce_field(value, "example")?,
        why_it_works: coerce_field(value, "why_it_works")?,
    })
}

/// Check the proposal-count contract of the generation call
///
/// # Errors
/// [`CollabError::Validation`] unless exactly [`EXPECTED_PROPOSALS`] came back.
pub fn expect_proposal_count(proposals: &[RawProposal]) -> Result<(), CollabError> {
    if proposals.len() == EXPECTED_PROPOSALS {
        Ok(())
    } else {
        Err(CollabError::Validation(format!(
            "expected {EXPECTED_PROPOSALS} proposals, collaborator returned {}",
            proposals.len()
        )))
    }
}

/// Keep a source url only when it carries an http(s) scheme
#[must_use]
pub fn validate_source_url(url: Option<String>) -> Option<String> {
    url.filter(|u| u.starts_with("http://") || u.starts_with("https://"))
}

/// Parse one inspiration case out of a JSON object
///
/// Relevance is clamped to 0-100; a malformed source url is dropped rather
/// than failing the whole case.
///
/// # Errors
/// [`CollabError::Validation`] when title or highlight is missing.
pub fn inspiration_from_value(value: &Value) -> Result<InspirationCase, CollabError> {
    let relevance = value
        .get("relevance")
        .and_then(Value::as_f64)
        .unwrap_or(0.0)
        .clamp(0.0, 100.0) as u8;

    let source_url = validate_source_url(
        value
            .get("source_url")
            .and_then(Value::as_str)
            .map(str::to_string),
    );

    Ok(InspirationCase {
        title: coerce_field(value, "title")?,
        highlight: coerce_field(value, "highlight")?,
        relevance,
        category: value.get("category").map(coerce_string).unwrap_or_default(),
        source_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strings_pass_through() {
        assert_eq!(coerce_string(&json!("hello")), "hello");
    }

    #[test]
    fn objects_are_restringified() {
        let v = json!({"nested": {"text": "idea"}});
        assert_eq!(coerce_string(&v["nested"]), r#"{"text":"idea"}"#);
        assert_eq!(coerce_string(&json!(42)), "42");
        assert_eq!(coerce_string(&json!(null)), "");
    }

    #[test]
    fn raw_proposal_accepts_object_valued_fields() {
        let v = json!({
            "concept_title": "Title",
            "core_idea": {"text": "wrapped"},
            "detailed_description": "desc",
            "example": "ex",
            "why_it_works": "works",
        });
        let raw = raw_proposal_from_value(&v).unwrap();
        assert_eq!(raw.core_idea, r#"{"text":"wrapped"}"#);
    }

    #[test]
    fn raw_proposal_rejects_missing_field() {
        let v = json!({"concept_title": "Title"});
        assert!(matches!(
            raw_proposal_from_value(&v),
            Err(CollabError::Validation(_))
        ));
    }

    #[test]
    fn proposal_count_contract() {
        let raw = RawProposal {
            concept_title: "t".to_string(),
            core_idea: "c".to_string(),
            detailed_description: "d".to_string(),
            example: "e".to_string(),
            why_it_works: "w".to_string(),
        };
        assert!(expect_proposal_count(&vec![raw.clone(); 3]).is_ok());
        assert!(expect_proposal_count(&vec![raw; 2]).is_err());
    }

    #[test]
    fn source_url_scheme_validation() {
        assert_eq!(
            validate_source_url(Some("https://example.com".to_string())),
            Some("https://example.com".to_string())
        );
        assert_eq!(validate_source_url(Some("ftp://x".to_string())), None);
        assert_eq!(validate_source_url(Some("example.com".to_string())), None);
        assert_eq!(validate_source_url(None), None);
    }

    #[test]
    fn inspiration_relevance_clamped() {
        let v = json!({
            "title": "Case",
            "highlight": "bold colors",
            "relevance": 250,
            "category": "ad",
            "source_url": "notaurl",
        });
        let case = inspiration_from_value(&v).unwrap();
        assert_eq!(case.relevance, 100);
        assert_eq!(case.source_url, None);
    }
}
