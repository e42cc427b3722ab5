use std::sync::Arc;

use futures::StreamExt;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::ai::{Availability, LanguageModelCapability, ModelSession, SessionConfig};
use crate::config::PipelineConfig;
use crate::constants::prompts;
use crate::errors::{AppError, AppResult};
use crate::models::domain::question::{Question, BLANK_MARKER};
use crate::models::domain::quiz::{Quiz, QuizSource};
use crate::services::{
    distractor_service, entity_service, repair_service, text_service, validation_service,
};

const MAX_FALLBACK_CANDIDATES: usize = 30;
const MIN_SENTENCE_WORDS: usize = 8;
const MAX_SENTENCE_WORDS: usize = 40;
const MIN_SENTENCE_CHARS: usize = 40;
const MAX_SENTENCE_CHARS: usize = 300;

/// Two-tier quiz generation: one attempt against the injected model
/// capability, validated and gated, with a deterministic entity-masking
/// generator behind it. Never returns an error; a quiz (possibly empty) is
/// the only outcome the caller observes.
pub struct QuizService {
    capability: Arc<dyn LanguageModelCapability>,
    config: PipelineConfig,
}

impl QuizService {
    pub fn new(capability: Arc<dyn LanguageModelCapability>, config: PipelineConfig) -> Self {
        Self { capability, config }
    }

    pub async fn generate_quiz(&self, text: &str) -> Quiz {
        let text = text.trim();
        if text.len() < self.config.min_quiz_text_len {
            log::debug!(
                "article text below {} chars, returning empty quiz",
                self.config.min_quiz_text_len
            );
            return Quiz::empty();
        }

        match self.model_attempt(text).await {
            Ok(questions) if questions.len() >= self.config.quality_gate => {
                let mut questions = questions;
                questions.truncate(self.config.max_questions);
                log::info!("accepted {} model-generated questions", questions.len());
                return Quiz::new(questions, QuizSource::Model);
            }
            Ok(questions) => {
                log::warn!(
                    "model batch had {} valid questions, below gate of {}; discarding batch",
                    questions.len(),
                    self.config.quality_gate
                );
            }
            Err(AppError::AdapterUnavailable) => {
                log::debug!("model capability unavailable, using extractive generator");
            }
            Err(err) => {
                log::warn!("model quiz attempt failed: {err}");
            }
        }

        Quiz::new(self.fallback_generate(text), QuizSource::Extractive)
    }

    /// One model attempt: create a session, drain the full chunk stream,
    /// release the session, then repair, parse and validate. Candidates that
    /// fail validation are dropped; survivors keep their original order.
    async fn model_attempt(&self, text: &str) -> AppResult<Vec<Question>> {
        match self.capability.availability().await {
            Availability::Available => {}
            Availability::Unavailable => return Err(AppError::AdapterUnavailable),
        }

        let session_config = SessionConfig {
            temperature: self.config.temperature,
            top_k: self.config.top_k,
            system_prompt: prompts::QUIZ_SYSTEM_PROMPT.to_string(),
        };
        let mut session = self.capability.create_session(session_config).await?;

        // The session is released before the outcome is inspected so no
        // failure path below can leak it.
        let outcome = Self::drain_streaming(session.as_mut(), &prompts::quiz_prompt(text)).await;
        session.destroy().await;
        let response = outcome?;

        let candidates = repair_service::parse_question_candidates(&response)?;
        let valid: Vec<Question> = candidates
            .iter()
            .filter_map(validation_service::sanitize_candidate)
            .filter(validation_service::validate_question)
            .collect();
        log::debug!(
            "model returned {} candidates, {} passed validation",
            candidates.len(),
            valid.len()
        );
        Ok(valid)
    }

    async fn drain_streaming(session: &mut dyn ModelSession, prompt: &str) -> AppResult<String> {
        let mut stream = session.prompt_streaming(prompt).await?;
        let mut response = String::new();
        while let Some(chunk) = stream.next().await {
            response.push_str(&chunk?);
        }
        Ok(response)
    }

    /// Deterministic tier: mask the first entity of each qualifying sentence
    /// and draw same-kind distractors from the whole-article pool.
    fn fallback_generate(&self, text: &str) -> Vec<Question> {
        let cleaned = text_service::clean_noise(text);
        let sentences = text_service::split_sentences(&cleaned);
        let candidates: Vec<&String> = sentences
            .iter()
            .filter(|sentence| {
                let words = sentence.split_whitespace().count();
                let chars = sentence.chars().count();
                (MIN_SENTENCE_WORDS..=MAX_SENTENCE_WORDS).contains(&words)
                    && (MIN_SENTENCE_CHARS..=MAX_SENTENCE_CHARS).contains(&chars)
            })
            .take(MAX_FALLBACK_CANDIDATES)
            .collect();

        let pool = entity_service::build_entity_pool(&cleaned);
        let mut rng = self.make_rng();
        let mut questions = Vec::new();

        for sentence in candidates {
            if questions.len() >= self.config.max_questions {
                break;
            }
            let entities = entity_service::extract_entities(sentence);
            let Some(answer) = entities.first_answer() else {
                continue;
            };
            let options = distractor_service::assemble_options(
                &answer.value,
                pool.values(answer.kind),
                &mut rng,
            );
            if options.len() != 4 {
                continue;
            }
            let question = Question::new(
                Self::blank_out(sentence, &answer.value),
                options,
                answer.value,
            );
            if validation_service::validate_question(&question) {
                questions.push(question);
            }
        }

        if questions.is_empty() {
            log::debug!("extractive generator produced no questions");
        }
        questions
    }

    /// Masks the answer span and rephrases the sentence as a question.
    fn blank_out(sentence: &str, answer: &str) -> String {
        let mut stem = sentence.replacen(answer, BLANK_MARKER, 1);
        stem.truncate(stem.trim_end().len());
        while stem.ends_with('.') || stem.ends_with('!') {
            stem.pop();
        }
        if !stem.ends_with('?') {
            stem.push('?');
        }
        stem
    }

    fn make_rng(&self) -> StdRng {
        match self.config.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
