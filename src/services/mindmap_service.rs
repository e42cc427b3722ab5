use std::sync::Arc;

use crate::ai::{Availability, LanguageModelCapability, SessionConfig};
use crate::config::PipelineConfig;
use crate::constants::prompts;
use crate::errors::{AppError, AppResult};
use crate::models::domain::structured::{Layout, StructuredItem, VisualArtifact};
use crate::services::repair_service::{self, StructuredPayload};
use crate::services::{layout_service, text_service, topic_service};

const MIN_ITEM_SENTENCE_CHARS: usize = 60;
const MAX_SYNTHESIZED_ITEMS: usize = 8;

/// Builds the visualization artifact: the model may pick the layout and
/// supply structured items; everything it does not provide is derived
/// heuristically from the text.
pub struct MindmapService {
    capability: Arc<dyn LanguageModelCapability>,
    config: PipelineConfig,
}

impl MindmapService {
    pub fn new(capability: Arc<dyn LanguageModelCapability>, config: PipelineConfig) -> Self {
        Self { capability, config }
    }

    pub async fn build_visual(&self, text: &str) -> VisualArtifact {
        let heuristic = layout_service::detect_layout(text, self.config.default_layout);

        let payload = match self.model_attempt(text).await {
            Ok(payload) => payload,
            Err(AppError::AdapterUnavailable) => {
                log::debug!("model capability unavailable, using heuristic layout");
                StructuredPayload::default()
            }
            Err(err) => {
                log::warn!("model layout attempt failed: {err}");
                StructuredPayload::default()
            }
        };

        let layout = payload
            .layout
            .as_deref()
            .and_then(Layout::parse)
            .unwrap_or(heuristic);

        match layout {
            Layout::Map => {
                let topics = payload
                    .topics
                    .filter(|topics| !topics.is_empty())
                    .unwrap_or_else(|| {
                        topic_service::extract_topics(text, topic_service::DEFAULT_TOPIC_COUNT)
                    });
                VisualArtifact::Map { topics }
            }
            Layout::Timeline | Layout::Process => {
                let items = payload
                    .items
                    .filter(|items| !items.is_empty())
                    .unwrap_or_else(|| synthesize_items(text));
                if layout == Layout::Timeline {
                    VisualArtifact::Timeline { items }
                } else {
                    VisualArtifact::Process { items }
                }
            }
        }
    }

    async fn model_attempt(&self, text: &str) -> AppResult<StructuredPayload> {
        match self.capability.availability().await {
            Availability::Available => {}
            Availability::Unavailable => return Err(AppError::AdapterUnavailable),
        }

        let session_config = SessionConfig {
            temperature: self.config.temperature,
            top_k: self.config.top_k,
            system_prompt: prompts::MINDMAP_SYSTEM_PROMPT.to_string(),
        };
        let mut session = self.capability.create_session(session_config).await?;
        let outcome = session.prompt(&prompts::mindmap_prompt(text)).await;
        session.destroy().await;
        repair_service::parse_structured_payload(&outcome?)
    }
}

/// Derives timeline/process rows from long sentences when the model supplied
/// none.
fn synthesize_items(text: &str) -> Vec<StructuredItem> {
    text_service::split_sentences(text)
        .into_iter()
        .filter(|sentence| sentence.chars().count() > MIN_ITEM_SENTENCE_CHARS)
        .take(MAX_SYNTHESIZED_ITEMS)
        .map(StructuredItem::new)
        .collect()
}
