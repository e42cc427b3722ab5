use std::sync::Arc;

use crate::ai::{Availability, LanguageModelCapability, SessionConfig};
use crate::config::PipelineConfig;
use crate::constants::prompts;
use crate::errors::{AppError, AppResult};
use crate::models::domain::article::Article;
use crate::models::domain::summary::Summary;
use crate::services::text_service;

const MIN_SUMMARY_SENTENCE_CHARS: usize = 40;
const MAX_SUMMARY_SENTENCES: usize = 10;

/// Article summarization: the model's long-form summary verbatim when the
/// capability is up, a crude extractive digest otherwise.
pub struct SummaryService {
    capability: Arc<dyn LanguageModelCapability>,
    config: PipelineConfig,
}

impl SummaryService {
    pub fn new(capability: Arc<dyn LanguageModelCapability>, config: PipelineConfig) -> Self {
        Self { capability, config }
    }

    pub async fn summarize(&self, article: &Article) -> Summary {
        let text = match self.model_attempt(&article.text).await {
            Ok(text) => text,
            Err(AppError::AdapterUnavailable) => {
                log::debug!("model capability unavailable, using extractive summary");
                extractive_summary(&article.text)
            }
            Err(err) => {
                log::warn!("model summary attempt failed: {err}");
                extractive_summary(&article.text)
            }
        };
        Summary::new(text, article.image.clone())
    }

    async fn model_attempt(&self, text: &str) -> AppResult<String> {
        match self.capability.availability().await {
            Availability::Available => {}
            Availability::Unavailable => return Err(AppError::AdapterUnavailable),
        }

        let session_config = SessionConfig {
            temperature: self.config.temperature,
            top_k: self.config.top_k,
            system_prompt: prompts::SUMMARY_SYSTEM_PROMPT.to_string(),
        };
        let mut session = self.capability.create_session(session_config).await?;
        let outcome = session.prompt(&prompts::summary_prompt(text)).await;
        session.destroy().await;
        outcome
    }
}

/// Extractive digest: clean the noise, keep sentences over 40 characters,
/// return the first 10 joined by spaces.
pub fn extractive_summary(text: &str) -> String {
    let cleaned = text_service::clean_noise(text);
    text_service::split_sentences(&cleaned)
        .into_iter()
        .filter(|sentence| sentence.chars().count() > MIN_SUMMARY_SENTENCE_CHARS)
        .take(MAX_SUMMARY_SENTENCES)
        .collect::<Vec<_>>()
        .join(" ")
}
