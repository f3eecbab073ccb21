//! The hosted submission page.
//!
//! `GET /submit/{share_url}` renders the themed submission form through
//! the submission renderer; `POST /submit/{share_url}` accepts the page
//! runtime's JSON value map, runs it through the same submission state
//! machine, and records the accepted payload.

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};
use http::StatusCode;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::json;

use quickform_core::logging::form_span;
use quickform_core::{QuickformError, QuickformResult};
use quickform_forms::{FormContentDocument, SubmissionValueMap};
use quickform_render::{SubmissionForm, SubmitOutcome};

use crate::app::AppState;
use crate::handlers::error_response;
use crate::store::{StoredForm, SubmissionMetadata};

static SHARE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[-a-zA-Z0-9_]+$").expect("valid share-url pattern")
});

async fn load_form(state: &AppState, share_url: &str) -> QuickformResult<StoredForm> {
    if !SHARE_URL.is_match(share_url) {
        return Err(QuickformError::BadRequest(format!(
            "invalid share url: {share_url}"
        )));
    }
    state
        .store
        .get_by_share_url(share_url)
        .await?
        .ok_or_else(|| QuickformError::NotFound(share_url.to_string()))
}

pub async fn submission_page(
    State(state): State<AppState>,
    Path(share_url): Path<String>,
) -> Response {
    match render_page(&state, &share_url).await {
        Ok(page) => Html(page).into_response(),
        Err(err) => error_response(&err),
    }
}

async fn render_page(state: &AppState, share_url: &str) -> QuickformResult<String> {
    let stored = load_form(state, share_url).await?;
    let span = form_span(stored.id, "page");
    let _guard = span.enter();

    let doc = FormContentDocument::parse(&stored.content)?;
    let form = SubmissionForm::new(doc, &stored.theme);
    let submit_url = format!(
        "{}/submit/{share_url}",
        state.settings.base_url.trim_end_matches('/')
    );
    form.render_page(&submit_url)
}

pub async fn submit_from_page(
    State(state): State<AppState>,
    Path(share_url): Path<String>,
    body: String,
) -> Response {
    match accept_from_page(&state, &share_url, &body).await {
        Ok(SubmitOutcome::Accepted { .. }) => {
            axum::Json(json!({"success": true})).into_response()
        }
        Ok(SubmitOutcome::Invalid { fields }) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            axum::Json(json!({
                "success": false,
                "invalidFields": fields.into_iter().collect::<Vec<_>>(),
            })),
        )
            .into_response(),
        Err(err) => error_response(&err),
    }
}

async fn accept_from_page(
    state: &AppState,
    share_url: &str,
    body: &str,
) -> QuickformResult<SubmitOutcome> {
    if body.len() > state.settings.max_submission_bytes {
        return Err(QuickformError::BadRequest(format!(
            "payload exceeds {} bytes",
            state.settings.max_submission_bytes
        )));
    }

    let stored = load_form(state, share_url).await?;
    let span = form_span(stored.id, "page-submit");
    let _guard = span.enter();

    let doc = FormContentDocument::parse(&stored.content)?;
    let values = SubmissionValueMap::parse(body)
        .map_err(|e| QuickformError::BadRequest(e.to_string()))?;
    let field_count = values.len();

    let mut form = SubmissionForm::new(doc, &stored.theme);
    form.bind(values);
    let outcome = form.submit()?;

    if let SubmitOutcome::Accepted { payload } = &outcome {
        let metadata = SubmissionMetadata {
            field_count,
            ..Default::default()
        };
        let record = state
            .store
            .record_submission(stored.id, payload.clone(), metadata)
            .await?;
        tracing::info!(submission = %record.id, "page submission recorded");
    }
    Ok(outcome)
}
