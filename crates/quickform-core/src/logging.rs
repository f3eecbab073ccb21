//! Logging integration for quickform.
//!
//! Provides helpers for configuring [`tracing`]-based logging from
//! [`Settings`](crate::settings::Settings) and for creating per-request spans.

use crate::settings::Settings;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The log level is read from `settings.log_level` (e.g. "debug", "info",
/// "warn", "error"). In debug mode a pretty, human-readable format is used;
/// in production a structured JSON format is used.
pub fn setup_logging(settings: &Settings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for a form-scoped request.
///
/// Attach this span to request handling so log entries emitted while
/// generating a bundle or recording a submission carry the form id.
///
/// # Examples
///
/// ```
/// use quickform_core::logging::form_span;
///
/// let span = form_span(42, "embed");
/// let _guard = span.enter();
/// tracing::info!("generating bundle");
/// ```
pub fn form_span(form_id: i64, operation: &str) -> tracing::Span {
    tracing::info_span!("form", id = form_id, op = operation)
}
