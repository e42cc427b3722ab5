use std::env;

use crate::models::domain::structured::Layout;

/// Tuning knobs for the pipeline. Every field has a working default so the
/// crate is usable with `PipelineConfig::default()` and no environment.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// Layout chosen when the classifier finds no date or step evidence.
    pub default_layout: Layout,
    /// Sampling temperature passed to the model session.
    pub temperature: f32,
    /// Top-k passed to the model session (adapters may ignore it).
    pub top_k: u32,
    /// Upper bound on questions per quiz.
    pub max_questions: usize,
    /// Minimum count of validator-passing model questions required before a
    /// model batch is accepted.
    pub quality_gate: usize,
    /// Articles shorter than this produce an empty quiz immediately.
    pub min_quiz_text_len: usize,
    /// Seed for option shuffling; None draws from entropy.
    pub shuffle_seed: Option<u64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            default_layout: Layout::Process,
            temperature: 0.7,
            top_k: 3,
            max_questions: 5,
            quality_gate: 3,
            min_quiz_text_len: 100,
            shuffle_seed: None,
        }
    }
}

impl PipelineConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_layout: env::var("ILX_DEFAULT_LAYOUT")
                .ok()
                .and_then(|v| Layout::parse(&v))
                .unwrap_or(defaults.default_layout),
            temperature: env::var("ILX_TEMPERATURE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.temperature),
            top_k: env::var("ILX_TOP_K")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.top_k),
            max_questions: env::var("ILX_MAX_QUESTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_questions),
            quality_gate: env::var("ILX_QUALITY_GATE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.quality_gate),
            min_quiz_text_len: env::var("ILX_MIN_QUIZ_TEXT_LEN")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.min_quiz_text_len),
            shuffle_seed: env::var("ILX_SHUFFLE_SEED")
                .ok()
                .and_then(|v| v.parse().ok()),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            shuffle_seed: Some(7),
            ..Self::default()
        }
    }
}
