use once_cell::sync::Lazy;
use regex::Regex;

// Story-site chrome that survives article extraction. Longest alternative
// first so "Member-only story" wins over "Member".
static NOISE_PHRASES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(Member-only story|Member|Listen|Share)\b").unwrap());
static BARE_NUMBER_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*\d+\s*$").unwrap());
static BARE_LETTER_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*[A-Z]$").unwrap());
static REPEATED_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

/// Strips known UI debris (site labels, bare line-number or single-letter
/// artifacts) and collapses repeated whitespace. Pure and idempotent:
/// already-clean text is a fixed point.
pub fn clean_noise(text: &str) -> String {
    let text = NOISE_PHRASES.replace_all(text, "");
    let text = BARE_NUMBER_LINE.replace_all(&text, "");
    let text = BARE_LETTER_LINE.replace_all(&text, "");
    let text = REPEATED_WHITESPACE.replace_all(&text, " ");
    text.trim().to_string()
}

/// Splits text into sentences bounded by terminal punctuation followed by
/// whitespace. A scan instead of a regex split: the regex crate has no
/// lookbehind, and the terminator must stay attached to its sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        if matches!(c, '.' | '!' | '?') && chars.peek().map_or(true, |n| n.is_whitespace()) {
            while chars.peek().is_some_and(|n| n.is_whitespace()) {
                chars.next();
            }
            let sentence = current.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            current.clear();
        }
    }

    let tail = current.trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }
    sentences
}
