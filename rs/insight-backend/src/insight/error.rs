use std::io::Cursor;

use relevance::RankingError;
use rocket::{http::ContentType, http::Status, response::Responder, Request, Response};
use shared::OpenAIRequestError;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum InsightError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid input: {0}")]
    Ranking(#[from] RankingError),
    #[error("{0}")]
    OpenAI(#[from] OpenAIRequestError),
    #[error("Error parsing model reply as JSON: {0}")]
    ReplyParse(#[from] serde_json::Error),
}

impl From<&InsightError> for Status {
    fn from(error: &InsightError) -> Self {
        match error {
            // embeddings are caller-supplied, so ranker failures are input errors
            InsightError::InvalidInput(_) | InsightError::Ranking(_) => Status::BadRequest,
            InsightError::OpenAI(OpenAIRequestError::QuotaExceeded) => Status::TooManyRequests,
            InsightError::OpenAI(_) => Status::InternalServerError,
            InsightError::ReplyParse(_) => Status::InternalServerError,
        }
    }
}

impl<'r> Responder<'r, 'static> for InsightError {
    fn respond_to(self, _: &'r Request<'_>) -> Result<Response<'static>, Status> {
        error!("{self}");
        let status = Status::from(&self);
        let body = serde_json::json!({"message": self.to_string()}).to_string();
        Response::build()
            .status(status)
            .header(ContentType::JSON)
            .sized_body(body.len(), Cursor::new(body))
            .ok()
    }
}
