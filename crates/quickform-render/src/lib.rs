//! # quickform-render
//!
//! The submission renderer: turns a
//! [`FormContentDocument`](quickform_forms::FormContentDocument) into the
//! interactive, theme-styled submission page served by the authoring
//! application, and models the bind / validate / re-render / terminal-view
//! submission flow.
//!
//! The markup for each field kind is produced by one exhaustive per-type
//! function in [`html`], driven by the same registry tags as the embed
//! bundle generator, which keeps the two renderers aligned field by field.
//!
//! ## Modules
//!
//! - [`form`] - the [`SubmissionForm`](form::SubmissionForm) state machine
//! - [`html`] - per-kind field markup
//! - [`page`] - page shell, theme stylesheet, and the page runtime script

pub mod form;
pub mod html;
pub mod page;

pub use form::{SubmissionForm, SubmitOutcome};
