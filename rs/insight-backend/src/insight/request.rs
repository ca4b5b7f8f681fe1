use relevance::{Insight, InsightId, RankingError};
use serde::Deserialize;

use super::error::InsightError;

/// Canonical request schema for `/generate-insights`. The `embedding`
/// field is optional per record but must be present on every record or
/// on none of them.
#[derive(Deserialize, Debug, Clone)]
pub struct InsightRequest {
    pub question: String,
    pub insights: Vec<InsightRecord>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct InsightRecord {
    pub id: InsightId,
    pub text: String,
    #[serde(default)]
    pub embedding: Option<Vec<f32>>,
}

impl InsightRequest {
    /// Parse and validate a raw request body. Any malformed body is an
    /// `InvalidInput` error, which maps to HTTP 400.
    pub fn parse(body: &str) -> Result<Self, InsightError> {
        let request: InsightRequest =
            serde_json::from_str(body).map_err(|e| InsightError::InvalidInput(e.to_string()))?;
        request.validate()?;
        Ok(request)
    }

    fn validate(&self) -> Result<(), InsightError> {
        if self.question.trim().is_empty() {
            return Err(InsightError::InvalidInput(
                "'question' must be a non-empty string".to_string(),
            ));
        }
        let embedded = self
            .insights
            .iter()
            .filter(|record| record.embedding.is_some())
            .count();
        if embedded == 0 {
            return Ok(());
        }
        if embedded != self.insights.len() {
            return Err(InsightError::InvalidInput(
                "'insights' must carry an embedding on every record or on none".to_string(),
            ));
        }
        let mut expected = None;
        for record in &self.insights {
            // embedded == len, so the embedding is always present here
            let Some(embedding) = record.embedding.as_ref() else {
                continue;
            };
            if embedding.is_empty() {
                return Err(InsightError::InvalidInput(
                    "embedding vectors must not be empty".to_string(),
                ));
            }
            match expected {
                None => expected = Some(embedding.len()),
                Some(width) if width != embedding.len() => {
                    return Err(InsightError::Ranking(RankingError::DimensionMismatch {
                        expected: width,
                        found: embedding.len(),
                    }));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Ranker candidates, available only when every record carries an
    /// embedding.
    pub fn embedded_candidates(&self) -> Option<Vec<Insight>> {
        self.insights
            .iter()
            .map(|record| {
                record.embedding.clone().map(|embedding| Insight {
                    id: record.id.clone(),
                    text: record.text.clone(),
                    embedding,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rocket::http::Status;

    use super::*;

    #[test]
    fn test_parses_canonical_request() {
        let body = r#"{
            "question": "What changed last week?",
            "insights": [
                {"id": 1, "text": "Deploy frequency doubled."},
                {"id": "rev-2", "text": "Error rate dropped."}
            ]
        }"#;
        let request = InsightRequest::parse(body).unwrap();
        assert_eq!(request.insights.len(), 2);
        assert_eq!(request.insights[0].id, InsightId::Int(1));
        assert_eq!(request.insights[1].id, InsightId::Text("rev-2".to_string()));
        assert!(request.embedded_candidates().is_none());
    }

    #[test]
    fn test_missing_insights_is_invalid_input() {
        let error = InsightRequest::parse(r#"{"question": "Anything new?"}"#).unwrap_err();
        assert!(matches!(error, InsightError::InvalidInput(_)));
        assert_eq!(Status::from(&error), Status::BadRequest);
    }

    #[test]
    fn test_non_json_body_is_invalid_input() {
        let error = InsightRequest::parse("question=hello").unwrap_err();
        assert!(matches!(error, InsightError::InvalidInput(_)));
    }

    #[test]
    fn test_empty_question_is_invalid_input() {
        let body = r#"{"question": "  ", "insights": []}"#;
        let error = InsightRequest::parse(body).unwrap_err();
        assert!(matches!(error, InsightError::InvalidInput(_)));
    }

    #[test]
    fn test_mixed_embeddings_are_invalid_input() {
        let body = r#"{
            "question": "What changed?",
            "insights": [
                {"id": 1, "text": "a", "embedding": [0.1, 0.2]},
                {"id": 2, "text": "b"}
            ]
        }"#;
        let error = InsightRequest::parse(body).unwrap_err();
        assert!(matches!(error, InsightError::InvalidInput(_)));
    }

    #[test]
    fn test_mismatched_candidate_widths_are_rejected() {
        let body = r#"{
            "question": "What changed?",
            "insights": [
                {"id": 1, "text": "a", "embedding": [0.1, 0.2]},
                {"id": 2, "text": "b", "embedding": [0.1, 0.2, 0.3]}
            ]
        }"#;
        let error = InsightRequest::parse(body).unwrap_err();
        assert!(matches!(
            error,
            InsightError::Ranking(RankingError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        ));
        assert_eq!(Status::from(&error), Status::BadRequest);
    }

    #[test]
    fn test_fully_embedded_request_yields_candidates() {
        let body = r#"{
            "question": "What changed?",
            "insights": [
                {"id": 1, "text": "a", "embedding": [0.1, 0.2]},
                {"id": 2, "text": "b", "embedding": [0.3, 0.4]}
            ]
        }"#;
        let request = InsightRequest::parse(body).unwrap();
        let candidates = request.embedded_candidates().unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[1].embedding, vec![0.3, 0.4]);
    }
}
