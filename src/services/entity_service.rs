use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::entity::{Entity, EntityKind, EntityPool};
use crate::services::text_service;

static DATES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(\d{4}|January|February|March|April|May|June|July|August|September|October|November|December)\b",
    )
    .unwrap()
});
static CAPITALIZED_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([A-Z][a-z]+(?:\s+[A-Z][a-z]+){0,3})\b").unwrap());
static NUMBER_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+[\w-]*\b").unwrap());

// Capitalized function words that start sentences but are not entities.
const FUNCTION_WORDS: [&str; 12] = [
    "The", "A", "An", "In", "On", "At", "For", "With", "By", "And", "Of", "To",
];

fn is_function_word(candidate: &str) -> bool {
    FUNCTION_WORDS.contains(&candidate)
}

/// Typed candidate spans found in one sentence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SentenceEntities {
    pub dates: Vec<String>,
    pub proper_nouns: Vec<String>,
    pub numbers: Vec<String>,
}

impl SentenceEntities {
    /// The span to mask when turning this sentence into a question.
    /// Capitalized phrases are preferred; sentences without one fall back to
    /// dates, then numeric tokens.
    pub fn first_answer(&self) -> Option<Entity> {
        if let Some(value) = self.proper_nouns.first() {
            return Some(Entity::new(value.clone(), EntityKind::ProperNounPhrase));
        }
        if let Some(value) = self.dates.first() {
            return Some(Entity::new(value.clone(), EntityKind::Date));
        }
        self.numbers
            .first()
            .map(|value| Entity::new(value.clone(), EntityKind::Number))
    }
}

pub fn extract_entities(sentence: &str) -> SentenceEntities {
    SentenceEntities {
        dates: DATES
            .find_iter(sentence)
            .map(|m| m.as_str().to_string())
            .collect(),
        proper_nouns: CAPITALIZED_RUN
            .find_iter(sentence)
            .map(|m| m.as_str().to_string())
            .filter(|candidate| !is_function_word(candidate))
            .collect(),
        numbers: NUMBER_TOKEN
            .find_iter(sentence)
            .map(|m| m.as_str().to_string())
            .collect(),
    }
}

/// Scans the whole normalized article and collects every entity value by
/// kind, deduplicated in first-seen order. Distractor source for the
/// deterministic generator.
pub fn build_entity_pool(text: &str) -> EntityPool {
    let mut pool = EntityPool::default();
    for sentence in text_service::split_sentences(text) {
        let entities = extract_entities(&sentence);
        for value in &entities.dates {
            pool.insert(value, EntityKind::Date);
        }
        for value in &entities.proper_nouns {
            pool.insert(value, EntityKind::ProperNounPhrase);
        }
        for value in &entities.numbers {
            pool.insert(value, EntityKind::Number);
        }
    }
    pool
}
