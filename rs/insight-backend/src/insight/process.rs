use relevance::rank;
use shared::connections::openai::messages::{create_system_message, create_user_message};
use shared::constant::DEFAULT_TOP_K;
use shared::OpenAIConnection;
use tracing::debug;

use super::error::InsightError;
use super::prompt::{create_insight_prompt, PromptInsight};
use super::reply::{parse_model_reply, GeneratedInsight, InsightResponse};
use super::request::InsightRequest;

/// Request-scoped pipeline: optional embed + rank, prompt, one
/// completion call, reply parse.
pub async fn process_insight_request(
    openai: &OpenAIConnection,
    request: InsightRequest,
) -> Result<InsightResponse, InsightError> {
    if request.insights.is_empty() {
        // nothing to derive from, skip the completion call
        return Ok(InsightResponse::no_insight());
    }

    let selected: Vec<PromptInsight> = match request.embedded_candidates() {
        Some(candidates) => {
            let query = openai.request_embedding(&request.question).await?;
            rank(&query, &candidates, DEFAULT_TOP_K)?
                .into_iter()
                .map(PromptInsight::from)
                .collect()
        }
        None => request.insights.iter().map(PromptInsight::from).collect(),
    };

    let prompt = create_insight_prompt(&request.question, &selected);
    debug!("Prompt:\n{prompt}");

    let messages = vec![create_system_message(), create_user_message(&prompt)];
    let completion_request = openai.insight_request(messages, GeneratedInsight::response_format());
    let content = openai.complete_text(completion_request).await?;
    debug!("Raw model reply: {content}");

    let reply = parse_model_reply(&content)?;
    Ok(InsightResponse::from(reply))
}
