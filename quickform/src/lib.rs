//! # quickform
//!
//! A form builder core with an embeddable form runtime generator.
//!
//! This is the meta-crate that re-exports all sub-crates for convenient
//! access. You can depend on `quickform` to get everything, or depend on
//! individual crates for finer-grained control.

/// Core types: errors, settings, and logging.
pub use quickform_core as core;

/// The field-type registry, documents, themes, and validation engine.
pub use quickform_forms as forms;

/// The server-rendered submission form and page shell.
pub use quickform_render as render;

/// The embed bundle generator and embed snippet.
pub use quickform_embed as embed;

/// The HTTP surface and the form-store abstraction.
pub use quickform_server as server;
