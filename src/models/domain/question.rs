use serde::{Deserialize, Serialize};

/// Placeholder standing in for the masked fact in a question stem.
pub const BLANK_MARKER: &str = "____";

/// A fill-in-the-blank multiple-choice question. Valid instances hold
/// exactly one blank marker in `question`, exactly four pairwise-distinct
/// `options`, and an `answer` present verbatim among them; the validation
/// service enforces that contract.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl Question {
    pub fn new(question: impl Into<String>, options: Vec<String>, answer: impl Into<String>) -> Self {
        Question {
            question: question.into(),
            options,
            answer: answer.into(),
        }
    }
}
