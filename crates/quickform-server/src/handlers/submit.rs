//! The submission sink.
//!
//! `POST /api/submit-form/{form_id}` accepts a field-id-keyed JSON value
//! map for a published form, re-validates it against the stored document,
//! and records it with request metadata. The route carries a permissive
//! CORS layer (see [`crate::app::router`]) because embedded forms submit
//! from arbitrary origins.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use base64::Engine as _;
use http::{HeaderMap, StatusCode};
use serde_json::json;

use quickform_core::logging::form_span;
use quickform_core::{QuickformError, QuickformResult};
use quickform_forms::validation::validate_document;
use quickform_forms::{FormContentDocument, SubmissionValue, SubmissionValueMap};

use crate::app::AppState;
use crate::handlers::error_response;
use crate::store::SubmissionMetadata;

pub async fn submit_form(
    State(state): State<AppState>,
    Path(form_id): Path<i64>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let span = form_span(form_id, "submit");
    let _guard = span.enter();

    match accept_submission(&state, form_id, &headers, &body).await {
        Ok(()) => axum::Json(json!({"success": true})).into_response(),
        Err(SubmitRejection::Invalid(fields)) => {
            tracing::debug!(invalid = fields.len(), "submission failed validation");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                axum::Json(json!({"success": false, "invalidFields": fields})),
            )
                .into_response()
        }
        Err(SubmitRejection::Error(err)) => error_response(&err),
    }
}

enum SubmitRejection {
    /// Field ids that failed validation.
    Invalid(Vec<String>),
    Error(QuickformError),
}

impl From<QuickformError> for SubmitRejection {
    fn from(err: QuickformError) -> Self {
        Self::Error(err)
    }
}

async fn accept_submission(
    state: &AppState,
    form_id: i64,
    headers: &HeaderMap,
    body: &str,
) -> Result<(), SubmitRejection> {
    if body.len() > state.settings.max_submission_bytes {
        return Err(QuickformError::BadRequest(format!(
            "payload exceeds {} bytes",
            state.settings.max_submission_bytes
        ))
        .into());
    }

    let form = state
        .store
        .get_published(form_id)
        .await
        .map_err(SubmitRejection::Error)?
        .ok_or_else(|| QuickformError::NotFound(form_id.to_string()))?;

    let doc = FormContentDocument::parse(&form.content).map_err(SubmitRejection::from)?;
    let values = SubmissionValueMap::parse(body)
        .map_err(|e| QuickformError::BadRequest(e.to_string()))?;

    check_data_urls(&values).map_err(SubmitRejection::from)?;

    let invalid = validate_document(&doc, &values);
    if !invalid.is_empty() {
        return Err(SubmitRejection::Invalid(invalid.into_iter().collect()));
    }

    let metadata = SubmissionMetadata {
        user_agent: header_string(headers, "user-agent"),
        origin: header_string(headers, "origin"),
        referer: header_string(headers, "referer"),
        field_count: values.len(),
    };

    let payload = values.to_json().map_err(SubmitRejection::from)?;
    let record = state
        .store
        .record_submission(form_id, payload, metadata)
        .await
        .map_err(SubmitRejection::Error)?;
    tracing::info!(submission = %record.id, fields = values.len(), "submission recorded");
    Ok(())
}

fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(String::from)
}

/// Verifies that every data-URL-shaped value actually carries decodable
/// base64 content. Image fields ship their files this way; a corrupt
/// payload is rejected before it reaches storage.
fn check_data_urls(values: &SubmissionValueMap) -> QuickformResult<()> {
    for (field_id, value) in values.iter() {
        match value {
            SubmissionValue::Text(text) => check_data_url(field_id, text)?,
            SubmissionValue::ImagePair { left, right } => {
                if let Some(left) = left {
                    check_data_url(field_id, left)?;
                }
                if let Some(right) = right {
                    check_data_url(field_id, right)?;
                }
            }
            _ => {}
        }
    }
    Ok(())
}

fn check_data_url(field_id: &str, text: &str) -> QuickformResult<()> {
    let Some(rest) = text.strip_prefix("data:") else {
        return Ok(());
    };
    let encoded = rest
        .split_once(";base64,")
        .map(|(_, encoded)| encoded)
        .ok_or_else(|| {
            QuickformError::BadRequest(format!("field {field_id}: data URL is not base64"))
        })?;
    base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .map_err(|e| QuickformError::BadRequest(format!("field {field_id}: invalid base64: {e}")))?;
    Ok(())
}
