use std::sync::Arc;

use validator::Validate;

use crate::ai::LanguageModelCapability;
use crate::config::PipelineConfig;
use crate::errors::{AppError, AppResult};
use crate::models::domain::{Article, Quiz, Summary, VisualArtifact};
use crate::services::{MindmapService, QuizService, SummaryService};

/// Front door of the crate: wires the injected model capability and the
/// configuration into the three artifact services.
pub struct Pipeline {
    quiz_service: QuizService,
    summary_service: SummaryService,
    mindmap_service: MindmapService,
}

impl Pipeline {
    pub fn new(capability: Arc<dyn LanguageModelCapability>, config: PipelineConfig) -> Self {
        Self {
            quiz_service: QuizService::new(Arc::clone(&capability), config.clone()),
            summary_service: SummaryService::new(Arc::clone(&capability), config.clone()),
            mindmap_service: MindmapService::new(capability, config),
        }
    }

    pub async fn summarize(&self, article: &Article) -> AppResult<Summary> {
        Self::check_input(article)?;
        Ok(self.summary_service.summarize(article).await)
    }

    pub async fn build_visual(&self, article: &Article) -> AppResult<VisualArtifact> {
        Self::check_input(article)?;
        Ok(self.mindmap_service.build_visual(&article.text).await)
    }

    /// Quiz generation never fails: absent or too-short text yields an
    /// empty quiz.
    pub async fn generate_quiz(&self, article: &Article) -> Quiz {
        if article.validate().is_err() {
            return Quiz::empty();
        }
        self.quiz_service.generate_quiz(&article.text).await
    }

    fn check_input(article: &Article) -> AppResult<()> {
        article
            .validate()
            .map_err(|_| AppError::EmptyInput("article text is empty".to_string()))
    }
}
