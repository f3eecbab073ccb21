//! Application assembly.
//!
//! Builds the axum router from a [`FormStore`] and [`Settings`]. The
//! submission sink carries a permissive CORS layer: embedded forms post
//! from arbitrary third-party origins, which is the point of embedding.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use http::header::CONTENT_TYPE;
use http::Method;
use tower_http::cors::{Any, CorsLayer};

use quickform_core::Settings;

use crate::handlers;
use crate::store::FormStore;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn FormStore>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(store: Arc<dyn FormStore>, settings: Settings) -> Self {
        Self {
            store,
            settings: Arc::new(settings),
        }
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/api/embed/{form_id}/js", get(handlers::embed::embed_script))
        .route(
            "/api/submit-form/{form_id}",
            post(handlers::submit::submit_form).layer(cors),
        )
        .route(
            "/submit/{share_url}",
            get(handlers::pages::submission_page).post(handlers::pages::submit_from_page),
        )
        .with_state(state)
}

/// Binds the listener and serves the application until shutdown.
pub async fn serve(state: AppState) -> quickform_core::QuickformResult<()> {
    let addr = state.settings.bind_addr.clone();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "quickform server listening");
    axum::serve(listener, router(state))
        .await
        .map_err(quickform_core::QuickformError::Io)?;
    Ok(())
}
