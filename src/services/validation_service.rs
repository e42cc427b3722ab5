use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::question::{Question, BLANK_MARKER};
use crate::services::repair_service::RawCandidate;

/// Filler words that betray UI debris rather than article facts.
const OPTION_BLACKLIST: [&str; 7] = [
    "updated",
    "posted",
    "share",
    "subscribe",
    "follow",
    "views",
    "comments",
];

static DEGENERATE_OPTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(none|all)\s+of\s+the\s+above$").unwrap());
static NUMERIC_OPTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\d+(\.\d+)?\s*(million|billion|thousand|%|percent)?$").unwrap());

/// Coarse semantic class of one option. All four options of a valid
/// question share a single non-invalid class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OptionType {
    Number,
    Text,
    Unknown,
    Invalid,
}

pub fn detect_type(option: &str) -> OptionType {
    let trimmed = option.trim();
    if trimmed.is_empty() || DEGENERATE_OPTION.is_match(trimmed) {
        return OptionType::Invalid;
    }
    if NUMERIC_OPTION.is_match(trimmed) {
        return OptionType::Number;
    }
    if trimmed.chars().next().is_some_and(|c| c.is_uppercase()) {
        return OptionType::Text;
    }
    OptionType::Unknown
}

/// The quiz-quality contract. Returns false on the first violated rule;
/// never mutates the candidate.
pub fn validate_question(question: &Question) -> bool {
    let stem = question.question.trim();
    if stem.is_empty() {
        log::debug!("rejecting candidate: empty question stem");
        return false;
    }
    if stem.matches(BLANK_MARKER).count() != 1 {
        log::debug!("rejecting candidate: stem must contain exactly one blank");
        return false;
    }
    if question.options.len() != 4 {
        log::debug!(
            "rejecting candidate: expected 4 options, got {}",
            question.options.len()
        );
        return false;
    }
    if question
        .options
        .iter()
        .any(|option| option.trim().is_empty())
    {
        log::debug!("rejecting candidate: blank option");
        return false;
    }
    if question
        .options
        .iter()
        .any(|option| option.trim().chars().count() < 2)
    {
        log::debug!("rejecting candidate: single-character option");
        return false;
    }
    let distinct: HashSet<String> = question
        .options
        .iter()
        .map(|option| option.trim().to_lowercase())
        .collect();
    if distinct.len() != 4 {
        log::debug!("rejecting candidate: duplicate options");
        return false;
    }
    if !question.options.iter().any(|option| option == &question.answer) {
        log::debug!("rejecting candidate: answer missing from options");
        return false;
    }
    if question.options.iter().any(|option| {
        let lowered = option.trim().to_lowercase();
        OPTION_BLACKLIST.contains(&lowered.as_str())
    }) {
        log::debug!("rejecting candidate: blacklisted filler option");
        return false;
    }

    let types: Vec<OptionType> = question
        .options
        .iter()
        .map(|option| detect_type(option))
        .collect();
    if types.contains(&OptionType::Invalid) {
        log::debug!("rejecting candidate: degenerate option");
        return false;
    }
    let distinct_types: HashSet<OptionType> = types.into_iter().collect();
    if distinct_types.len() != 1 {
        log::debug!("rejecting candidate: mixed option types");
        return false;
    }

    true
}

/// Bridges a parsed model candidate to a typed question: every field must be
/// present, every option must be a JSON string, and all fields are trimmed.
/// Returns None when the shape alone disqualifies the candidate; the result
/// still has to pass [`validate_question`].
pub fn sanitize_candidate(raw: &RawCandidate) -> Option<Question> {
    let question = raw.question.as_deref()?.trim().to_string();
    let answer = raw.answer.as_deref()?.trim().to_string();
    let mut options = Vec::with_capacity(raw.options.len());
    for value in &raw.options {
        options.push(value.as_str()?.trim().to_string());
    }
    Some(Question::new(question, options, answer))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_question() -> Question {
        Question::new(
            "The armistice was signed in ____.",
            vec![
                "1943".to_string(),
                "1944".to_string(),
                "1945".to_string(),
                "1946".to_string(),
            ],
            "1945",
        )
    }

    #[test]
    fn detect_type_classifies_numbers() {
        assert_eq!(detect_type("1945"), OptionType::Number);
        assert_eq!(detect_type("3.5"), OptionType::Number);
        assert_eq!(detect_type("40 percent"), OptionType::Number);
        assert_eq!(detect_type("2 million"), OptionType::Number);
        assert_eq!(detect_type("85%"), OptionType::Number);
    }

    #[test]
    fn detect_type_classifies_capitalized_text() {
        assert_eq!(detect_type("Napoleon"), OptionType::Text);
        assert_eq!(detect_type("New York City"), OptionType::Text);
    }

    #[test]
    fn detect_type_flags_degenerate_options() {
        assert_eq!(detect_type(""), OptionType::Invalid);
        assert_eq!(detect_type("none of the above"), OptionType::Invalid);
        assert_eq!(detect_type("All of the Above"), OptionType::Invalid);
    }

    #[test]
    fn detect_type_leaves_lowercase_words_unknown() {
        assert_eq!(detect_type("treaty"), OptionType::Unknown);
    }

    #[test]
    fn accepts_a_well_formed_question() {
        assert!(validate_question(&valid_question()));
    }

    #[test]
    fn rejects_wrong_option_count() {
        let mut question = valid_question();
        question.options.pop();
        assert!(!validate_question(&question));
    }

    #[test]
    fn rejects_missing_blank_marker() {
        let mut question = valid_question();
        question.question = "When was the armistice signed?".to_string();
        assert!(!validate_question(&question));
    }

    #[test]
    fn rejects_answer_not_in_options() {
        let mut question = valid_question();
        question.answer = "1940".to_string();
        assert!(!validate_question(&question));
    }

    #[test]
    fn rejects_case_insensitive_duplicate_options() {
        let question = Question::new(
            "The capital is ____.",
            vec![
                "Paris".to_string(),
                "paris".to_string(),
                "Berlin".to_string(),
                "Rome".to_string(),
            ],
            "Paris",
        );
        assert!(!validate_question(&question));
    }

    #[test]
    fn rejects_blacklisted_filler_options() {
        let question = Question::new(
            "The page said ____.",
            vec![
                "Subscribe".to_string(),
                "Napoleon".to_string(),
                "Wellington".to_string(),
                "Blucher".to_string(),
            ],
            "Napoleon",
        );
        assert!(!validate_question(&question));
    }

    #[test]
    fn rejects_mixed_option_types() {
        let question = Question::new(
            "The war ended in ____.",
            vec![
                "1945".to_string(),
                "Napoleon".to_string(),
                "1946".to_string(),
                "1947".to_string(),
            ],
            "1945",
        );
        assert!(!validate_question(&question));
    }

    #[test]
    fn rejects_short_options() {
        let question = Question::new(
            "The grade was ____.",
            vec![
                "A".to_string(),
                "B".to_string(),
                "C".to_string(),
                "D".to_string(),
            ],
            "A",
        );
        assert!(!validate_question(&question));
    }

    #[test]
    fn sanitize_rejects_missing_fields_and_non_string_options() {
        let missing_answer = RawCandidate {
            question: Some("The war ended in ____.".to_string()),
            options: vec![serde_json::json!("1945"); 4],
            answer: None,
        };
        assert!(sanitize_candidate(&missing_answer).is_none());

        let numeric_option = RawCandidate {
            question: Some("The war ended in ____.".to_string()),
            options: vec![
                serde_json::json!(1945),
                serde_json::json!("1946"),
                serde_json::json!("1947"),
                serde_json::json!("1948"),
            ],
            answer: Some("1946".to_string()),
        };
        assert!(sanitize_candidate(&numeric_option).is_none());
    }

    #[test]
    fn sanitize_trims_every_field() {
        let raw = RawCandidate {
            question: Some("  The war ended in ____.  ".to_string()),
            options: vec![
                serde_json::json!(" 1943 "),
                serde_json::json!("1944"),
                serde_json::json!("1945"),
                serde_json::json!("1946"),
            ],
            answer: Some(" 1945 ".to_string()),
        };
        let question = sanitize_candidate(&raw).expect("candidate should sanitize");
        assert_eq!(question.question, "The war ended in ____.");
        assert_eq!(question.options[0], "1943");
        assert_eq!(question.answer, "1945");
        assert!(validate_question(&question));
    }
}
