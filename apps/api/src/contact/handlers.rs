use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::contact::validation::validate_submission;
use crate::errors::AppError;
use crate::models::contact::ContactMessage;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub id: i64,
    pub message: &'static str,
}

/// POST /api/contact
pub async fn handle_submit(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<SubmitResponse>), AppError> {
    let record = validate_submission(&payload)?;
    let saved = state
        .store
        .create(record)
        .await
        .map_err(|e| AppError::store("Failed to submit contact message", e))?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            id: saved.id,
            message: "Contact message submitted successfully",
        }),
    ))
}

/// GET /api/contact
pub async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactMessage>>, AppError> {
    let messages = state
        .store
        .list_all()
        .await
        .map_err(|e| AppError::store("Failed to retrieve contact messages", e))?;
    Ok(Json(messages))
}

/// GET /api/contact/:id
///
/// The id segment is parsed by hand so a non-integer yields a 400 without
/// ever reaching the store.
pub async fn handle_get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ContactMessage>, AppError> {
    let id: i64 = id.parse().map_err(|_| AppError::InvalidId)?;

    let message = state
        .store
        .get_by_id(id)
        .await
        .map_err(|e| AppError::store("Failed to retrieve contact message", e))?;

    message
        .map(Json)
        .ok_or(AppError::NotFound("Contact message not found"))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::contact::store::MemoryContactStore;
    use crate::portfolio::data::default_portfolio;
    use crate::routes::build_router;
    use crate::state::AppState;

    fn test_app() -> Router {
        build_router(AppState {
            store: Arc::new(MemoryContactStore::new()),
            portfolio: Arc::new(default_portfolio()),
        })
    }

    async fn post_contact(app: Router, body: Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/contact")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn valid_submission() -> Value {
        json!({
            "name": "Jo",
            "email": "jo@x.com",
            "subject": "Hello there",
            "message": "This is a test message."
        })
    }

    #[tokio::test]
    async fn test_valid_submission_returns_201_with_id() {
        let app = test_app();
        let (status, body) = post_contact(app, valid_submission()).await;
        assert_eq!(status, StatusCode::CREATED);
        assert!(body["id"].as_i64().unwrap() >= 1);
        assert_eq!(body["message"], "Contact message submitted successfully");
    }

    #[tokio::test]
    async fn test_invalid_submission_lists_every_violation() {
        let app = test_app();
        let (status, body) = post_contact(
            app,
            json!({
                "name": "A",
                "email": "bad",
                "subject": "Hi",
                "message": "short"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Failed to submit contact message");
        let violations = body["error"].as_array().unwrap();
        let fields: Vec<&str> = violations
            .iter()
            .map(|v| v["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, vec!["name", "email", "subject", "message"]);
    }

    #[tokio::test]
    async fn test_invalid_submission_is_not_persisted() {
        let app = test_app();
        let (status, _) = post_contact(app.clone(), json!({ "name": "A" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, body) = get(app, "/api/contact").await;
        assert_eq!(body.as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_list_returns_both_records_after_two_submissions() {
        let app = test_app();
        post_contact(app.clone(), valid_submission()).await;
        let mut second = valid_submission();
        second["name"] = json!("Sam");
        post_contact(app.clone(), second).await;

        let (status, body) = get(app, "/api/contact").await;
        assert_eq!(status, StatusCode::OK);
        let records = body.as_array().unwrap();
        assert_eq!(records.len(), 2);
        for record in records {
            assert!(record["id"].as_i64().is_some());
            assert!(record["createdAt"].as_str().is_some());
            assert!(record["email"].as_str().is_some());
        }
        assert_eq!(records[0]["name"], "Jo");
        assert_eq!(records[1]["name"], "Sam");
    }

    #[tokio::test]
    async fn test_identical_submissions_are_not_deduplicated() {
        let app = test_app();
        let (_, first) = post_contact(app.clone(), valid_submission()).await;
        let (_, second) = post_contact(app.clone(), valid_submission()).await;
        assert_ne!(first["id"], second["id"]);

        let (_, body) = get(app, "/api/contact").await;
        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_get_by_id_returns_the_record() {
        let app = test_app();
        let (_, created) = post_contact(app.clone(), valid_submission()).await;
        let id = created["id"].as_i64().unwrap();

        let (status, body) = get(app, &format!("/api/contact/{id}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"].as_i64().unwrap(), id);
        assert_eq!(body["name"], "Jo");
        assert_eq!(body["subject"], "Hello there");
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_404() {
        let app = test_app();
        let (status, body) = get(app, "/api/contact/999999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Contact message not found");
    }

    #[tokio::test]
    async fn test_get_non_numeric_id_is_400() {
        let app = test_app();
        let (status, body) = get(app, "/api/contact/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid ID format");
    }

    #[tokio::test]
    async fn test_payload_injected_id_is_ignored() {
        let app = test_app();
        let mut payload = valid_submission();
        payload["id"] = json!(999);
        let (status, created) = post_contact(app.clone(), payload).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["id"].as_i64().unwrap(), 1);

        let (status, _) = get(app, "/api/contact/999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
