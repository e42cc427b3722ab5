use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::errors::AppResult;

pub mod openai;

pub use openai::OpenAiCapability;

/// Whether the generative capability can take requests right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Availability {
    Unavailable,
    Available,
}

/// Generation parameters handed to a new session. Adapters map them onto
/// whatever their backend supports and may ignore the rest.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub system_prompt: String,
}

/// A finite, single-use sequence of response chunks. Must be drained fully
/// before the concatenated response is processed; it cannot be restarted.
pub type ChunkStream = BoxStream<'static, AppResult<String>>;

/// The generative capability the pipeline depends on. Always injected,
/// never ambient, so tests can substitute a scripted fake.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LanguageModelCapability: Send + Sync {
    async fn availability(&self) -> Availability;

    async fn create_session(&self, config: SessionConfig) -> AppResult<Box<dyn ModelSession>>;
}

/// One conversation with the model. `destroy` must be called on every exit
/// path once a session exists; adapters may treat it as a no-op but the
/// orchestrator may not skip it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelSession: Send + Sync {
    /// Single-shot request, full response at once.
    async fn prompt(&mut self, input: &str) -> AppResult<String>;

    /// Streaming request; the returned chunk sequence is finite and
    /// non-restartable.
    async fn prompt_streaming(&mut self, input: &str) -> AppResult<ChunkStream>;

    /// Releases any resources the session holds.
    async fn destroy(&mut self);
}
