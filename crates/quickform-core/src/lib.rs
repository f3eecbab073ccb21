//! # quickform-core
//!
//! Core types for the quickform form builder: error types, settings,
//! configuration loading, and logging. This crate has no framework
//! dependencies and provides the foundation for all other crates.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`settings`] - Application settings and global configuration
//! - [`settings_loader`] - Settings loading from TOML files and environment
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;

// Re-export the most commonly used types at the crate root.
pub use error::{QuickformError, QuickformResult};
pub use settings::{Settings, SETTINGS};
