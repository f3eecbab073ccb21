//! # quickform-forms
//!
//! The field-type model at the heart of quickform: the closed registry of
//! form field kinds, serializable field instances and form content
//! documents, submission value shapes, themes, rating color schemes, and
//! the validation engine.
//!
//! Both renderers (the server-rendered submission form in
//! `quickform-render` and the generated embed bundle in `quickform-embed`)
//! consult this crate by field-type tag; per-type behavior lives here and
//! in one exhaustive dispatch per renderer, never in ad-hoc switches.
//!
//! ## Modules
//!
//! - [`element`] - `FieldType`, `FieldInstance`, `FormContentDocument`
//! - [`attributes`] - typed per-kind attribute schemas
//! - [`registry`] - construction defaults, required/empty validation
//! - [`value`] - submission value shapes and the value map
//! - [`themes`] - named theme table
//! - [`rating`] - rating-scale color schemes and bucketing
//! - [`validation`] - the pure document validator

pub mod attributes;
pub mod element;
pub mod rating;
pub mod registry;
pub mod themes;
pub mod validation;
pub mod value;

pub use element::{FieldInstance, FieldType, FormContentDocument};
pub use value::{SubmissionValue, SubmissionValueMap};
