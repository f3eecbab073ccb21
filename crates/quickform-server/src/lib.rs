//! # quickform-server
//!
//! The HTTP surface of quickform, built on axum:
//!
//! - `GET /api/embed/{form_id}/js` - the generated embed bundle (published
//!   forms only, never cached)
//! - `POST /api/submit-form/{form_id}` - the cross-origin submission sink
//! - `GET /submit/{share_url}` - the hosted submission page
//! - `POST /submit/{share_url}` - submission from the hosted page
//!
//! Persistence is an external collaborator behind the
//! [`FormStore`](store::FormStore) trait; [`MemoryStore`](store::MemoryStore)
//! backs tests and the demo.

pub mod app;
pub mod handlers;
pub mod store;

pub use app::{router, AppState};
pub use store::{FormStore, MemoryStore, StoredForm, SubmissionMetadata, SubmissionRecord};
