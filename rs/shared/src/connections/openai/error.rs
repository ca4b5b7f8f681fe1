use async_openai::error::OpenAIError;
use thiserror::Error;

/// Typed outcome of an OpenAI request. Quota exhaustion is recognized
/// from the API error code, not from message text.
#[derive(Error, Debug)]
pub enum OpenAIRequestError {
    #[error("Quota exceeded. Please check your OpenAI plan and billing details.")]
    QuotaExceeded,
    #[error("OpenAI API error: {0}")]
    OpenAI(OpenAIError),
    #[error("No choices available in response")]
    EmptyChoices,
    #[error("No embedding returned for input text")]
    EmptyEmbedding,
}

impl From<OpenAIError> for OpenAIRequestError {
    fn from(error: OpenAIError) -> Self {
        match &error {
            OpenAIError::ApiError(api_error)
                if api_error.code.as_deref() == Some("insufficient_quota") =>
            {
                OpenAIRequestError::QuotaExceeded
            }
            _ => OpenAIRequestError::OpenAI(error),
        }
    }
}
