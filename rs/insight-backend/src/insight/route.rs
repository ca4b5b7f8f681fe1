use rocket::post;
use rocket::serde::json::Json;
use shared::OpenAIConnection;
use tracing::info;

use super::error::InsightError;
use super::process::process_insight_request;
use super::reply::InsightResponse;
use super::request::InsightRequest;

// The body is read raw and parsed explicitly so that every malformed
// payload answers with 400 instead of Rocket's default 422.
#[post("/generate-insights", format = "json", data = "<payload>")]
pub async fn generate_insights(
    openai: OpenAIConnection,
    payload: &str,
) -> Result<Json<InsightResponse>, InsightError> {
    let request = InsightRequest::parse(payload)?;
    info!(
        "Generating insights for a question with {} insight records",
        request.insights.len()
    );
    let response = process_insight_request(&openai, request).await?;
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use rocket::http::{ContentType, Status};
    use rocket::routes;
    use shared::constant::NO_INSIGHT_MESSAGE;
    use shared::mock::rocket::get_test_client;
    use shared::router::rocket::build_rocket;
    use shared::{OpenAIConnection, OpenAISettings};

    use super::generate_insights;

    fn test_rocket() -> rocket::Rocket<rocket::Build> {
        let settings = OpenAISettings {
            api_key: "test-key".to_string(),
        };
        let openai = OpenAIConnection::new(&settings);
        build_rocket(openai, routes![generate_insights])
    }

    #[tokio::test]
    async fn test_missing_insights_is_bad_request() {
        let client = get_test_client(test_rocket()).await.unwrap();
        let response = client
            .post("/generate-insights")
            .header(ContentType::JSON)
            .body(r#"{"question": "What changed?"}"#)
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::BadRequest);
        let body = response.into_string().await.unwrap();
        assert!(body.contains("Invalid input"));
    }

    #[tokio::test]
    async fn test_non_json_body_is_bad_request() {
        let client = get_test_client(test_rocket()).await.unwrap();
        let response = client
            .post("/generate-insights")
            .header(ContentType::JSON)
            .body("question=What changed?")
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::BadRequest);
    }

    #[tokio::test]
    async fn test_mixed_embeddings_is_bad_request() {
        let client = get_test_client(test_rocket()).await.unwrap();
        let body = r#"{
            "question": "What changed?",
            "insights": [
                {"id": 1, "text": "a", "embedding": [0.1, 0.2]},
                {"id": 2, "text": "b"}
            ]
        }"#;
        let response = client
            .post("/generate-insights")
            .header(ContentType::JSON)
            .body(body)
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::BadRequest);
    }

    #[tokio::test]
    async fn test_mismatched_embedding_widths_is_bad_request() {
        let client = get_test_client(test_rocket()).await.unwrap();
        let body = r#"{
            "question": "What changed?",
            "insights": [
                {"id": 1, "text": "a", "embedding": [0.1, 0.2]},
                {"id": 2, "text": "b", "embedding": [0.1, 0.2, 0.3]}
            ]
        }"#;
        let response = client
            .post("/generate-insights")
            .header(ContentType::JSON)
            .body(body)
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::BadRequest);
        let body = response.into_string().await.unwrap();
        assert!(body.contains("dimension mismatch"));
    }

    #[tokio::test]
    async fn test_large_embedding_payload_reaches_validation() {
        let client = get_test_client(test_rocket()).await.unwrap();
        // realistic embedding widths put the body far past Rocket's
        // default 8 KiB string limit
        let body = serde_json::json!({
            "question": "What changed?",
            "insights": [
                {"id": 1, "text": "a", "embedding": vec![0.5f32; 3072]},
                {"id": 2, "text": "b", "embedding": vec![0.5f32; 3073]}
            ]
        })
        .to_string();
        assert!(body.len() > 8 * 1024);

        let response = client
            .post("/generate-insights")
            .header(ContentType::JSON)
            .body(body)
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::BadRequest);
        // the typed route error, not the generic 400 catcher body
        let body = response.into_string().await.unwrap();
        assert!(body.contains("dimension mismatch"));
    }

    #[tokio::test]
    async fn test_oversized_body_is_payload_too_large() {
        let client = get_test_client(test_rocket()).await.unwrap();
        let body = "a".repeat(5 * 1024 * 1024);
        let response = client
            .post("/generate-insights")
            .header(ContentType::JSON)
            .body(body)
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::PayloadTooLarge);
        let body = response.into_string().await.unwrap();
        assert!(body.contains("Payload too large"));
    }

    #[tokio::test]
    async fn test_empty_insight_list_answers_without_model_call() {
        let client = get_test_client(test_rocket()).await.unwrap();
        let response = client
            .post("/generate-insights")
            .header(ContentType::JSON)
            .body(r#"{"question": "What changed?", "insights": []}"#)
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);
        let body = response.into_string().await.unwrap();
        assert!(body.contains(NO_INSIGHT_MESSAGE));
    }
}
