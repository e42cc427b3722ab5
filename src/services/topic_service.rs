use std::collections::HashMap;
use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

pub const DEFAULT_TOPIC_COUNT: usize = 10;

static NON_ALPHANUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\s]").unwrap());

static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "and", "or", "of", "to", "in", "for", "on", "with", "by", "is", "are",
        "was", "were", "this", "that", "as", "from", "it", "be", "at",
    ]
    .into_iter()
    .collect()
});

/// Frequency-ranked keyword extraction. Tokens shorter than 3 characters and
/// stopwords are dropped; ties rank in first-seen order.
pub fn extract_topics(text: &str, count: usize) -> Vec<String> {
    let lowered = text.to_lowercase();
    let stripped = NON_ALPHANUMERIC.replace_all(&lowered, " ");

    let mut frequency: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();
    for token in stripped.split_whitespace() {
        if token.len() < 3 || STOPWORDS.contains(token) {
            continue;
        }
        match frequency.get_mut(token) {
            Some(n) => *n += 1,
            None => {
                frequency.insert(token, 1);
                first_seen.push(token);
            }
        }
    }

    let mut ranked: Vec<(&str, usize)> = first_seen
        .into_iter()
        .map(|token| (token, frequency[token]))
        .collect();
    // Stable sort keeps first-seen order among equal counts.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(count)
        .map(|(token, _)| token.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_topics_ranks_by_frequency_then_first_seen() {
        let topics = extract_topics("The cat sat on the mat. The cat ran.", DEFAULT_TOPIC_COUNT);
        assert_eq!(topics, vec!["cat", "sat", "mat", "ran"]);
    }

    #[test]
    fn extract_topics_respects_count() {
        let topics = extract_topics("alpha beta gamma delta", 2);
        assert_eq!(topics.len(), 2);
        assert_eq!(topics, vec!["alpha", "beta"]);
    }

    #[test]
    fn extract_topics_on_empty_input_is_empty() {
        assert!(extract_topics("", DEFAULT_TOPIC_COUNT).is_empty());
        assert!(extract_topics("a an to", DEFAULT_TOPIC_COUNT).is_empty());
    }

    #[test]
    fn extract_topics_strips_punctuation() {
        let topics = extract_topics("well-known, well-known; facts!", 5);
        assert_eq!(topics, vec!["well", "known", "facts"]);
    }
}
