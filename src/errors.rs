use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Model capability unavailable")]
    AdapterUnavailable,

    #[error("Model adapter failure: {0}")]
    AdapterFailure(String),

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("Empty input: {0}")]
    EmptyInput(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::AdapterFailure(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
