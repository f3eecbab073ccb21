//! Core error types for quickform.
//!
//! This module provides the [`QuickformError`] enum covering the error
//! taxonomy of the form builder: document/configuration errors, attribute
//! schema violations, lookup failures, storage errors, and bundle
//! generation failures. Each variant maps to an HTTP status code via
//! [`QuickformError::status_code`], so the HTTP surface can convert any
//! internal failure into a response at the boundary.

use thiserror::Error;

/// The primary error type for quickform.
///
/// Configuration errors (malformed persisted content, duplicate field ids,
/// attribute bags that fail their type's schema) are the caller's data being
/// wrong; lookup errors distinguish missing forms from unpublished ones so
/// the embed endpoint can refuse both without leaking which is which beyond
/// the status code.
#[derive(Error, Debug)]
pub enum QuickformError {
    // ── Document / configuration errors ──────────────────────────────

    /// Persisted form content could not be parsed as a field array.
    #[error("Malformed form content: {0}")]
    MalformedContent(String),

    /// Two fields in one document share an id.
    #[error("Duplicate field id in document: {0}")]
    DuplicateFieldId(String),

    /// An attribute bag does not satisfy its field type's schema.
    #[error("Invalid attributes for field {field}: {reason}")]
    AttributeSchema {
        /// The offending field's id.
        field: String,
        /// What the schema check rejected.
        reason: String,
    },

    // ── Lookup errors ────────────────────────────────────────────────

    /// The requested form does not exist.
    #[error("Form not found: {0}")]
    NotFound(String),

    /// The form exists but has not been published.
    #[error("Form not published: {0}")]
    NotPublished(String),

    // ── Request errors ───────────────────────────────────────────────

    /// The request was structurally invalid (bad id, bad payload).
    #[error("Bad request: {0}")]
    BadRequest(String),

    // ── Generation / storage ─────────────────────────────────────────

    /// The embed bundle could not be generated.
    #[error("Bundle generation failed: {0}")]
    BundleGeneration(String),

    /// The persistence collaborator failed.
    #[error("Storage error: {0}")]
    Storage(String),

    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ── Serialization ────────────────────────────────────────────────

    /// An error occurred during serialization or deserialization.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl QuickformError {
    /// Returns the HTTP status code associated with this error.
    ///
    /// - `BadRequest` -> 400
    /// - `NotFound`, `NotPublished` -> 404 (the embed path treats an
    ///   unpublished form the same as a missing one)
    /// - `AttributeSchema`, `DuplicateFieldId` -> 422
    /// - Everything else -> 500
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::NotFound(_) | Self::NotPublished(_) => 404,
            Self::AttributeSchema { .. } | Self::DuplicateFieldId(_) => 422,
            Self::MalformedContent(_)
            | Self::BundleGeneration(_)
            | Self::Storage(_)
            | Self::Configuration(_)
            | Self::Serialization(_)
            | Self::Io(_) => 500,
        }
    }
}

/// A convenience type alias for `Result<T, QuickformError>`.
pub type QuickformResult<T> = Result<T, QuickformError>;
