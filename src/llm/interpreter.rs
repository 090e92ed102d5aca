//! Turns the raw text of a model reply into a tagged modification result.
//!
//! The remote model is asked for bare JSON but cannot be trusted to comply, so
//! interpretation is an ordered list of parsing strategies over one string:
//! parse the whole text, then the contents of a ``` fence, then the first
//! `{`..`}` span. First success wins; if every strategy fails the raw text is
//! surfaced to the user as a failure.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Diagnostic attached to replies that contained no interpretable JSON.
const NO_JSON_ERROR: &str = "No JSON format found in response";

/// Stand-in description when the model omits the `description` field.
const FALLBACK_DESCRIPTION: &str = "Component modified as requested.";

static FENCED_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(?:json)?\s*(.*?)```").unwrap());

/// Outcome of one modification exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModificationResult {
    Success {
        updated_code: String,
        description: String,
    },
    Failure {
        description: String,
        error: String,
    },
}

impl ModificationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ModificationResult::Success { .. })
    }
}

/// Interpret a raw model reply. `fallback_source` is the component source that
/// was sent out; it stands in for `updatedCode` when the reply omits it.
pub fn interpret(raw: &str, fallback_source: &str) -> ModificationResult {
    let strategies: [fn(&str) -> Option<Value>; 3] =
        [parse_direct, parse_fenced, parse_braced];

    for parse in strategies {
        if let Some(value) = parse(raw) {
            let updated_code = value
                .get("updatedCode")
                .and_then(Value::as_str)
                .unwrap_or(fallback_source)
                .to_string();
            let description = value
                .get("description")
                .and_then(Value::as_str)
                .unwrap_or(FALLBACK_DESCRIPTION)
                .to_string();
            return ModificationResult::Success {
                updated_code,
                description,
            };
        }
    }

    debug!("model reply contained no parseable JSON ({} bytes)", raw.len());
    ModificationResult::Failure {
        description: raw.to_string(),
        error: NO_JSON_ERROR.to_string(),
    }
}

fn parse_direct(text: &str) -> Option<Value> {
    serde_json::from_str(text.trim()).ok()
}

fn parse_fenced(text: &str) -> Option<Value> {
    let captures = FENCED_BLOCK.captures(text)?;
    serde_json::from_str(captures[1].trim()).ok()
}

fn parse_braced(text: &str) -> Option<Value> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn success(result: ModificationResult) -> (String, String) {
        match result {
            ModificationResult::Success {
                updated_code,
                description,
            } => (updated_code, description),
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[test]
    fn parses_bare_json() {
        let raw = r#"{"updatedCode":"const X = 1;","description":"set X"}"#;
        let (code, description) = success(interpret(raw, "orig"));
        assert_eq!(code, "const X = 1;");
        assert_eq!(description, "set X");
    }

    #[test]
    fn parses_json_fenced_block() {
        let raw = "Sure thing!\n```json\n{\"updatedCode\":\"y\",\"description\":\"z\"}\n```";
        let (code, description) = success(interpret(raw, "orig"));
        assert_eq!(code, "y");
        assert_eq!(description, "z");
    }

    #[test]
    fn parses_bare_fenced_block() {
        let raw = "```\n{\"updatedCode\":\"y\",\"description\":\"z\"}\n```";
        let (code, description) = success(interpret(raw, "orig"));
        assert_eq!(code, "y");
        assert_eq!(description, "z");
    }

    #[test]
    fn scans_for_braces_in_prose() {
        let raw = "Here you go: {\"updatedCode\":\"a\",\"description\":\"b\"} hope that helps";
        let (code, description) = success(interpret(raw, "orig"));
        assert_eq!(code, "a");
        assert_eq!(description, "b");
    }

    #[test]
    fn missing_code_falls_back_to_original_source() {
        let raw = r#"{"description":"trimmed the padding"}"#;
        let (code, description) = success(interpret(raw, "<div/>"));
        assert_eq!(code, "<div/>");
        assert_eq!(description, "trimmed the padding");
    }

    #[test]
    fn missing_description_falls_back_to_generic_message() {
        let raw = r#"{"updatedCode":"<span/>"}"#;
        let (code, description) = success(interpret(raw, "orig"));
        assert_eq!(code, "<span/>");
        assert_eq!(description, FALLBACK_DESCRIPTION);
    }

    #[test]
    fn empty_object_still_reports_success() {
        // Known quirk carried over from the source system: a valid but
        // field-less reply is not treated as a failure.
        let (code, description) = success(interpret("{}", "orig"));
        assert_eq!(code, "orig");
        assert_eq!(description, FALLBACK_DESCRIPTION);
    }

    #[test]
    fn plain_refusal_becomes_failure_with_verbatim_text() {
        let raw = "I cannot comply with that request.";
        match interpret(raw, "orig") {
            ModificationResult::Failure { description, error } => {
                assert_eq!(description, raw);
                assert_eq!(error, NO_JSON_ERROR);
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn malformed_braced_text_becomes_failure() {
        let raw = "look at {this} it is not json";
        match interpret(raw, "orig") {
            ModificationResult::Failure { description, .. } => {
                assert_eq!(description, raw);
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let raw = "  \n{\"updatedCode\":\"w\",\"description\":\"x\"}\n  ";
        let (code, _) = success(interpret(raw, "orig"));
        assert_eq!(code, "w");
    }
}
