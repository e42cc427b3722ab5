use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequest,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use futures::StreamExt;

use crate::ai::{Availability, ChunkStream, LanguageModelCapability, ModelSession, SessionConfig};
use crate::errors::{AppError, AppResult};

/// Capability adapter over any OpenAI-compatible chat endpoint.
pub struct OpenAiCapability {
    client: Client<OpenAIConfig>,
    model: String,
    configured: bool,
}

impl OpenAiCapability {
    pub fn new(api_key: &str, api_base: &str, model: &str) -> Self {
        let configured = !api_key.is_empty() && !model.is_empty();
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(api_base);
        OpenAiCapability {
            client: Client::with_config(config),
            model: model.to_string(),
            configured,
        }
    }
}

#[async_trait]
impl LanguageModelCapability for OpenAiCapability {
    async fn availability(&self) -> Availability {
        if self.configured {
            Availability::Available
        } else {
            Availability::Unavailable
        }
    }

    async fn create_session(&self, config: SessionConfig) -> AppResult<Box<dyn ModelSession>> {
        Ok(Box::new(OpenAiSession {
            client: self.client.clone(),
            model: self.model.clone(),
            config,
        }))
    }
}

pub struct OpenAiSession {
    client: Client<OpenAIConfig>,
    model: String,
    config: SessionConfig,
}

impl OpenAiSession {
    // top_k from SessionConfig has no chat-completions equivalent and is
    // not forwarded.
    fn build_request(&self, input: &str, stream: bool) -> AppResult<CreateChatCompletionRequest> {
        let system = ChatCompletionRequestSystemMessageArgs::default()
            .content(self.config.system_prompt.as_str())
            .build()?;
        let user = ChatCompletionRequestUserMessageArgs::default()
            .content(input)
            .build()?;
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(vec![
                ChatCompletionRequestMessage::System(system),
                ChatCompletionRequestMessage::User(user),
            ])
            .temperature(self.config.temperature)
            .stream(stream)
            .build()?;
        Ok(request)
    }
}

#[async_trait]
impl ModelSession for OpenAiSession {
    async fn prompt(&mut self, input: &str) -> AppResult<String> {
        let request = self.build_request(input, false)?;
        let response = self.client.chat().create(request).await?;
        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AppError::AdapterFailure("model returned no content".to_string()))
    }

    async fn prompt_streaming(&mut self, input: &str) -> AppResult<ChunkStream> {
        let request = self.build_request(input, true)?;
        let stream = self.client.chat().create_stream(request).await?;
        let chunks = stream.map(|piece| match piece {
            Ok(chunk) => Ok(chunk
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.delta.content)
                .unwrap_or_default()),
            Err(err) => Err(AppError::from(err)),
        });
        Ok(chunks.boxed())
    }

    async fn destroy(&mut self) {
        // Chat sessions hold no server-side state; nothing to release.
        log::debug!("model session released");
    }
}
