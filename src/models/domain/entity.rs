use serde::{Deserialize, Serialize};

/// Coarse class of a text span usable as a quiz answer or distractor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityKind {
    Date,
    ProperNounPhrase,
    Number,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    pub value: String,
    pub kind: EntityKind,
}

impl Entity {
    pub fn new(value: impl Into<String>, kind: EntityKind) -> Self {
        Entity {
            value: value.into(),
            kind,
        }
    }
}

/// All entity values found across one article, grouped by kind, deduplicated,
/// in first-seen order. Built once per quiz-generation call and used as the
/// distractor source.
#[derive(Clone, Debug, Default)]
pub struct EntityPool {
    dates: Vec<String>,
    proper_nouns: Vec<String>,
    numbers: Vec<String>,
}

impl EntityPool {
    pub fn insert(&mut self, value: &str, kind: EntityKind) {
        let bucket = self.bucket_mut(kind);
        if !bucket.iter().any(|v| v == value) {
            bucket.push(value.to_string());
        }
    }

    pub fn values(&self, kind: EntityKind) -> &[String] {
        match kind {
            EntityKind::Date => &self.dates,
            EntityKind::ProperNounPhrase => &self.proper_nouns,
            EntityKind::Number => &self.numbers,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty() && self.proper_nouns.is_empty() && self.numbers.is_empty()
    }

    fn bucket_mut(&mut self, kind: EntityKind) -> &mut Vec<String> {
        match kind {
            EntityKind::Date => &mut self.dates,
            EntityKind::ProperNounPhrase => &mut self.proper_nouns,
            EntityKind::Number => &mut self.numbers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_deduplicates_and_preserves_first_seen_order() {
        let mut pool = EntityPool::default();
        pool.insert("Paris", EntityKind::ProperNounPhrase);
        pool.insert("Berlin", EntityKind::ProperNounPhrase);
        pool.insert("Paris", EntityKind::ProperNounPhrase);
        pool.insert("Madrid", EntityKind::ProperNounPhrase);

        assert_eq!(
            pool.values(EntityKind::ProperNounPhrase),
            &["Paris", "Berlin", "Madrid"]
        );
    }

    #[test]
    fn pool_keeps_kinds_separate() {
        let mut pool = EntityPool::default();
        pool.insert("1945", EntityKind::Date);
        pool.insert("1945", EntityKind::Number);

        assert_eq!(pool.values(EntityKind::Date), &["1945"]);
        assert_eq!(pool.values(EntityKind::Number), &["1945"]);
        assert!(pool.values(EntityKind::ProperNounPhrase).is_empty());
    }
}
