use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::question::Question;

/// Which tier of the generation engine produced the quiz.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizSource {
    Model,
    Extractive,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub questions: Vec<Question>,
    pub source: QuizSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
}

impl Quiz {
    pub fn new(questions: Vec<Question>, source: QuizSource) -> Self {
        Quiz {
            questions,
            source,
            generated_at: Some(Utc::now()),
        }
    }

    /// The result of a generation call that found nothing to ask about.
    pub fn empty() -> Self {
        Quiz::new(Vec::new(), QuizSource::Extractive)
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }
}
