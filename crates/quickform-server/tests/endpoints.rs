//! Endpoint integration tests, driven through the router with `oneshot`:
//!
//! 1. Embed bundle endpoint: headers, caching, 404s, malformed content
//! 2. Submission sink: happy path, validation rejection, CORS
//! 3. Hosted submission page: rendering and page submission

use std::sync::Arc;

use http_body_util::BodyExt;
use tower::ServiceExt;

use axum::body::Body;
use http::{Request, StatusCode};

use quickform_core::Settings;
use quickform_forms::registry::construct;
use quickform_forms::{FieldType, FormContentDocument};
use quickform_server::{router, AppState, FormStore, MemoryStore, StoredForm};

// ============================================================================
// Shared helpers
// ============================================================================

fn survey_content() -> String {
    let mut rating = construct(FieldType::RatingScaleField, "q1");
    rating.extra_attributes = serde_json::json!({
        "label": "Rating Scale", "helperText": "Select a value",
        "required": true, "question": "Rate your experience",
        "minLabel": "Poor", "midLabel": "Average", "maxLabel": "Excellent",
        "minValue": 1, "maxValue": 5,
        "colorScheme": "blue", "gradientScheme": null,
    });
    let doc = FormContentDocument::new(vec![
        construct(FieldType::TitleField, "title"),
        rating,
    ])
    .unwrap();
    doc.to_json().unwrap()
}

fn stored_form(id: i64, published: bool, content: String) -> StoredForm {
    StoredForm {
        id,
        name: "Survey".to_string(),
        share_url: format!("survey-{id}"),
        theme: "default".to_string(),
        published,
        content,
    }
}

async fn make_app() -> (axum::Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    store.insert_form(stored_form(1, true, survey_content())).await;
    store.insert_form(stored_form(2, false, survey_content())).await;
    store
        .insert_form(stored_form(3, true, "not json at all".to_string()))
        .await;

    let state = AppState::new(store.clone() as Arc<dyn FormStore>, Settings::default());
    (router(state), store)
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// ============================================================================
// Embed bundle endpoint
// ============================================================================

#[tokio::test]
async fn embed_endpoint_serves_script_with_no_cache_headers() {
    let (app, _) = make_app().await;
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/embed/1/js")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/javascript; charset=utf-8"
    );
    assert_eq!(
        response.headers().get("cache-control").unwrap(),
        "no-cache, no-store, must-revalidate"
    );

    let script = body_string(response).await;
    assert!(script.contains("quick-form-1"));
    assert!(script.contains("Rate your experience"));
    assert!(script.contains("/api/submit-form/1"));
}

#[tokio::test]
async fn embed_endpoint_rejects_unpublished_form_with_no_script() {
    let (app, _) = make_app().await;
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/embed/2/js")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_string(response).await;
    assert!(!body.contains("function"));
}

#[tokio::test]
async fn embed_endpoint_rejects_missing_form() {
    let (app, _) = make_app().await;
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/embed/999/js")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn embed_endpoint_malformed_content_is_a_server_error() {
    let (app, _) = make_app().await;
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/embed/3/js")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// ============================================================================
// Submission sink
// ============================================================================

fn submit_request(form_id: i64, payload: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("/api/submit-form/{form_id}"))
        .header("content-type", "application/json")
        .header("user-agent", "endpoint-test")
        .header("origin", "https://host.example.com")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

#[tokio::test]
async fn submit_records_valid_payload() {
    let (app, store) = make_app().await;
    let payload = r#"{"q1":{"value":4,"minValue":1,"maxValue":5}}"#;
    let response = app.oneshot(submit_request(1, payload)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("\"success\":true"));

    let submissions = store.submissions_for(1).await;
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].content, payload);
    assert_eq!(
        submissions[0].metadata.user_agent.as_deref(),
        Some("endpoint-test")
    );
    assert_eq!(
        submissions[0].metadata.origin.as_deref(),
        Some("https://host.example.com")
    );
    assert_eq!(submissions[0].metadata.field_count, 1);
}

#[tokio::test]
async fn submit_rejects_missing_required_field_without_recording() {
    let (app, store) = make_app().await;
    let response = app.oneshot(submit_request(1, "{}")).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_string(response).await;
    assert!(body.contains("q1"));
    assert_eq!(store.submission_count().await, 0);
}

#[tokio::test]
async fn submit_rejects_unpublished_form() {
    let (app, store) = make_app().await;
    let payload = r#"{"q1":{"value":4,"minValue":1,"maxValue":5}}"#;
    let response = app.oneshot(submit_request(2, payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(store.submission_count().await, 0);
}

#[tokio::test]
async fn submit_rejects_malformed_payload() {
    let (app, _) = make_app().await;
    let response = app.oneshot(submit_request(1, "not json")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn submit_allows_cross_origin_requests() {
    let (app, _) = make_app().await;
    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/submit-form/1")
                .header("origin", "https://host.example.com")
                .header("access-control-request-method", "POST")
                .header("access-control-request-headers", "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn submit_response_carries_cors_header() {
    let (app, _) = make_app().await;
    let payload = r#"{"q1":{"value":4,"minValue":1,"maxValue":5}}"#;
    let response = app.oneshot(submit_request(1, payload)).await.unwrap();
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
}

// ============================================================================
// Hosted submission page
// ============================================================================

#[tokio::test]
async fn submission_page_renders_for_published_form() {
    let (app, _) = make_app().await;
    let response = app
        .oneshot(
            Request::builder()
                .uri("/submit/survey-1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let page = body_string(response).await;
    assert!(page.contains("data-qf-field=\"q1\""));
    assert!(page.contains("data-qf-submit-url=\"/submit/survey-1\""));
}

#[tokio::test]
async fn submission_page_missing_slug_is_not_found() {
    let (app, _) = make_app().await;
    let response = app
        .oneshot(
            Request::builder()
                .uri("/submit/survey-2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn page_submission_records_and_validates() {
    let (app, store) = make_app().await;
    let payload = r#"{"q1":{"value":2,"minValue":1,"maxValue":5}}"#;
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/submit/survey-1")
                .header("content-type", "application/json")
                .body(Body::from(payload))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(store.submissions_for(1).await.len(), 1);

    // And an empty submission is rejected with the flagged field.
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/submit/survey-1")
                .header("content-type", "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_string(response).await;
    assert!(body.contains("q1"));
    assert_eq!(store.submissions_for(1).await.len(), 1);
}
