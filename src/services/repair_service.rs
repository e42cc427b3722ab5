use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::errors::{AppError, AppResult};
use crate::models::domain::structured::StructuredItem;

static TRAILING_COMMA: Lazy<Regex> = Lazy::new(|| Regex::new(r",\s*([\]}])").unwrap());
static SINGLE_QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r"'([^'\\]*)'").unwrap());
static BARE_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([{,]\s*)([A-Za-z_][A-Za-z0-9_]*)\s*:").unwrap());

/// A quiz candidate as parsed from repaired model output, before any
/// trimming or validation. Options stay raw JSON values so non-string
/// entries are detectable downstream.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawCandidate {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub options: Vec<serde_json::Value>,
    #[serde(default)]
    pub answer: Option<String>,
}

/// Layout/structure payload of the visualization prompt. Every field is
/// optional; the caller falls back heuristically for whatever is missing.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct StructuredPayload {
    #[serde(default)]
    pub layout: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<StructuredItem>>,
    #[serde(default)]
    pub topics: Option<Vec<String>>,
}

/// Drops a leading ```/```json fence and its closing counterpart.
pub fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    let stripped = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text);
    let stripped = stripped.trim_start();
    stripped
        .strip_suffix("```")
        .map(|s| s.trim_end())
        .unwrap_or(stripped)
}

/// Locates a JSON array: a depth-balanced scan from the first `[`, or,
/// when the payload is truncated or unbalanced, the span from the first
/// `[` to the last `]`.
pub fn extract_json_array(text: &str) -> Option<&str> {
    extract_balanced(text, '[', ']')
}

/// Object variant of [`extract_json_array`], used by the visualization path.
pub fn extract_json_object(text: &str) -> Option<&str> {
    extract_balanced(text, '{', '}')
}

fn extract_balanced(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (idx, c) in text[start..].char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + idx + c.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    // Unbalanced: fall back to the widest plausible span.
    let end = text.rfind(close)?;
    (end > start).then(|| &text[start..=end])
}

/// Removes commas dangling before a closing bracket or brace.
pub fn remove_trailing_commas(text: &str) -> String {
    TRAILING_COMMA.replace_all(text, "${1}").into_owned()
}

/// Best-effort conversion of single-quoted tokens to double-quoted ones.
pub fn normalize_quotes(text: &str) -> String {
    SINGLE_QUOTED.replace_all(text, "\"${1}\"").into_owned()
}

/// Quotes bare object keys (`{question: ...}` becomes `{"question": ...}`).
pub fn quote_bare_keys(text: &str) -> String {
    BARE_KEY.replace_all(text, "${1}\"${2}\":").into_owned()
}

/// Strips one enclosing pair of stray quotes when the whole payload arrived
/// quoted.
pub fn unwrap_redundant_quotes(text: &str) -> &str {
    let trimmed = text.trim();
    if trimmed.len() >= 2
        && ((trimmed.starts_with('"') && trimmed.ends_with('"'))
            || (trimmed.starts_with('\'') && trimmed.ends_with('\'')))
    {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    }
}

/// Full repair pipeline for the quiz prompt response: fence strip, array
/// extraction, then the textual repairs, then parsing. Each step is pure;
/// any unrecoverable shape maps to [`AppError::MalformedResponse`].
pub fn parse_question_candidates(response: &str) -> AppResult<Vec<RawCandidate>> {
    let payload = prepare_payload(response, extract_json_array)?;
    let candidates: Vec<RawCandidate> = serde_json::from_str(&payload)?;
    Ok(candidates)
}

/// Repair pipeline for the visualization prompt response.
pub fn parse_structured_payload(response: &str) -> AppResult<StructuredPayload> {
    let payload = prepare_payload(response, extract_json_object)?;
    let parsed: StructuredPayload = serde_json::from_str(&payload)?;
    Ok(parsed)
}

fn prepare_payload(
    response: &str,
    extract: for<'a> fn(&'a str) -> Option<&'a str>,
) -> AppResult<String> {
    let unfenced = strip_code_fences(response);
    let body = extract(unfenced).ok_or_else(|| {
        AppError::MalformedResponse("no JSON payload found in model response".to_string())
    })?;
    let repaired = remove_trailing_commas(body);
    let repaired = normalize_quotes(&repaired);
    let repaired = quote_bare_keys(&repaired);
    Ok(unwrap_redundant_quotes(&repaired).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_json_fences_with_and_without_language_tag() {
        assert_eq!(strip_code_fences("```json\n[1]\n```"), "[1]");
        assert_eq!(strip_code_fences("```\n[1]\n```"), "[1]");
        assert_eq!(strip_code_fences("[1]"), "[1]");
    }

    #[test]
    fn extracts_balanced_array_with_surrounding_prose() {
        let raw = "Here you go: [1, [2, 3], 4] and good luck!";
        assert_eq!(extract_json_array(raw), Some("[1, [2, 3], 4]"));
    }

    #[test]
    fn extracts_widest_span_when_unbalanced() {
        let raw = "[ [1, 2 ]";
        assert_eq!(extract_json_array(raw), Some("[ [1, 2 ]"));
    }

    #[test]
    fn array_extraction_ignores_brackets_inside_strings() {
        let raw = r#"[{"question": "pick [a] or [b]"}]"#;
        assert_eq!(extract_json_array(raw), Some(raw));
    }

    #[test]
    fn removes_trailing_commas() {
        assert_eq!(remove_trailing_commas(r#"[1, 2, ]"#), "[1, 2]");
        assert_eq!(remove_trailing_commas(r#"{"a": 1, }"#), r#"{"a": 1}"#);
    }

    #[test]
    fn normalizes_single_quotes() {
        assert_eq!(normalize_quotes("['1943','1944']"), r#"["1943","1944"]"#);
    }

    #[test]
    fn quotes_bare_keys() {
        assert_eq!(
            quote_bare_keys(r#"{question: "q", answer: "a"}"#),
            r#"{"question": "q", "answer": "a"}"#
        );
    }

    #[test]
    fn unwraps_redundant_enclosing_quotes() {
        assert_eq!(unwrap_redundant_quotes("\"[1]\""), "[1]");
        assert_eq!(unwrap_redundant_quotes("[1]"), "[1]");
    }

    #[test]
    fn repairs_and_parses_a_sloppy_model_response() {
        let raw = concat!(
            "```json\n",
            "[{question:\"W ended in _____.\",",
            "options:['1943','1944','1945','1946'],answer:'1945'}]\n",
            "```"
        );
        let candidates = parse_question_candidates(raw).expect("response should repair");
        assert_eq!(candidates.len(), 1);
        let candidate = &candidates[0];
        assert_eq!(candidate.answer.as_deref(), Some("1945"));
        assert_eq!(candidate.options.len(), 4);
        assert_eq!(candidate.options[2], serde_json::json!("1945"));
    }

    #[test]
    fn missing_array_is_a_malformed_response() {
        let err = parse_question_candidates("Sorry, I cannot help with that.").unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[test]
    fn parses_structured_layout_payload() {
        let raw = "```json\n{\"layout\": \"timeline\", \"items\": [{\"label\": \"It began.\", \"date\": \"1914\"}]}\n```";
        let payload = parse_structured_payload(raw).expect("payload should parse");
        assert_eq!(payload.layout.as_deref(), Some("timeline"));
        let items = payload.items.expect("items should be present");
        assert_eq!(items[0].date.as_deref(), Some("1914"));
    }

    #[test]
    fn structured_payload_tolerates_missing_fields() {
        let payload = parse_structured_payload("{\"layout\": \"map\"}").expect("should parse");
        assert_eq!(payload.layout.as_deref(), Some("map"));
        assert!(payload.items.is_none());
        assert!(payload.topics.is_none());
    }
}
