//! The embed bundle endpoint.
//!
//! `GET /api/embed/{form_id}/js` regenerates the bundle from the stored
//! document on every request, so an edited-and-republished form is picked
//! up immediately; the response disables caching for the same reason. Only
//! published forms are served, and generation failures produce an HTTP
//! error status with no partial script body.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use quickform_core::logging::form_span;
use quickform_core::{QuickformError, QuickformResult};
use quickform_embed::generate_bundle;
use quickform_forms::FormContentDocument;

use crate::app::AppState;
use crate::handlers::error_response;

pub async fn embed_script(
    State(state): State<AppState>,
    Path(form_id): Path<i64>,
) -> Response {
    let span = form_span(form_id, "embed");
    let _guard = span.enter();

    match build_bundle(&state, form_id).await {
        Ok(script) => {
            tracing::info!(bytes = script.len(), "embed bundle generated");
            (
                [
                    ("content-type", "application/javascript; charset=utf-8"),
                    ("cache-control", "no-cache, no-store, must-revalidate"),
                ],
                script,
            )
                .into_response()
        }
        Err(err) => error_response(&err),
    }
}

async fn build_bundle(state: &AppState, form_id: i64) -> QuickformResult<String> {
    let form = state
        .store
        .get_published(form_id)
        .await?
        .ok_or_else(|| QuickformError::NotFound(form_id.to_string()))?;

    let doc = FormContentDocument::parse(&form.content)?;
    generate_bundle(form_id, &doc, &state.settings.base_url)
}
