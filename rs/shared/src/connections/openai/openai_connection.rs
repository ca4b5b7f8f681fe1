use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionRequestMessage, CreateChatCompletionRequest, CreateChatCompletionResponse,
    CreateEmbeddingRequestArgs, ResponseFormat,
};
use async_openai::Client;

use crate::constant::{COMPLETION_MAX_TOKENS, OPENAI_CHAT_MODEL, OPENAI_EMBEDDING_MODEL};

use super::config::OpenAISettings;
use super::error::OpenAIRequestError;

#[derive(Clone)]
pub struct OpenAIConnection {
    pub client: Client<OpenAIConfig>,
}

impl OpenAIConnection {
    pub fn new(settings: &OpenAISettings) -> Self {
        let config = OpenAIConfig::new().with_api_key(&settings.api_key);
        Self {
            client: Client::with_config(config),
        }
    }

    // COMPLETION REQUEST
    pub fn request_builder(
        &self,
        messages: Vec<ChatCompletionRequestMessage>,
        model: &str,
        max_tokens: u32,
        response_format: Option<ResponseFormat>,
    ) -> CreateChatCompletionRequest {
        CreateChatCompletionRequest {
            model: model.to_string(),
            messages,
            max_tokens: Some(max_tokens),
            n: Some(1),
            response_format,
            ..Default::default()
        }
    }

    pub fn insight_request(
        &self,
        messages: Vec<ChatCompletionRequestMessage>,
        response_format: ResponseFormat,
    ) -> CreateChatCompletionRequest {
        self.request_builder(
            messages,
            OPENAI_CHAT_MODEL,
            COMPLETION_MAX_TOKENS,
            Some(response_format),
        )
    }

    // CHAT COMPLETION
    pub async fn create_completion(
        &self,
        request: CreateChatCompletionRequest,
    ) -> Result<CreateChatCompletionResponse, OpenAIRequestError> {
        Ok(self.client.chat().create(request).await?)
    }

    /// Content of the first choice of a single completion round trip.
    pub async fn complete_text(
        &self,
        request: CreateChatCompletionRequest,
    ) -> Result<String, OpenAIRequestError> {
        let mut response = self.create_completion(request).await?;
        response
            .choices
            .pop()
            .and_then(|choice| choice.message.content)
            .ok_or(OpenAIRequestError::EmptyChoices)
    }

    // EMBEDDING
    pub async fn request_embedding(&self, text: &str) -> Result<Vec<f32>, OpenAIRequestError> {
        let request = CreateEmbeddingRequestArgs::default()
            .model(OPENAI_EMBEDDING_MODEL)
            .input(text.to_string())
            .build()?;

        let mut response = self.client.embeddings().create(request).await?;
        let data = response
            .data
            .pop()
            .ok_or(OpenAIRequestError::EmptyEmbedding)?;
        Ok(data.embedding)
    }
}
