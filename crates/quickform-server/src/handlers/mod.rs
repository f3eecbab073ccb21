//! HTTP handlers.
//!
//! Every handler converts internal failures into an HTTP error response at
//! this boundary; nothing below it panics or leaks an unhandled error into
//! the server loop.

pub mod embed;
pub mod pages;
pub mod submit;

use axum::response::{IntoResponse, Response};
use http::StatusCode;

use quickform_core::QuickformError;

/// Converts an error into its boundary response.
pub(crate) fn error_response(err: &QuickformError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        tracing::error!(error = %err, "request failed");
    } else {
        tracing::debug!(error = %err, "request rejected");
    }
    (status, err.to_string()).into_response()
}
