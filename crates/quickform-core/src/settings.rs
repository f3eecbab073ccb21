//! Settings system for quickform.
//!
//! This module provides the [`Settings`] struct, which holds all application
//! configuration, and [`LazySettings`], a globally-accessible,
//! lazily-initialized settings instance with sensible defaults.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// The complete set of application settings.
///
/// Use [`SETTINGS`] to access the global instance, or construct one directly
/// for tests and embedded use.
///
/// # Examples
///
/// ```
/// use quickform_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert_eq!(settings.bind_addr, "127.0.0.1:8000");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // ── Core ─────────────────────────────────────────────────────────

    /// Whether debug mode is enabled (pretty logs, verbose errors).
    pub debug: bool,
    /// The socket address the HTTP server binds to.
    pub bind_addr: String,
    /// The public base URL of this deployment, used when rendering embed
    /// snippets (e.g. `https://forms.example.com`). Empty means relative
    /// URLs.
    pub base_url: String,

    // ── Forms ────────────────────────────────────────────────────────

    /// The theme applied to forms that do not select one.
    pub default_theme: String,
    /// Upper bound on an accepted submission payload, in bytes. Image
    /// fields ship data URLs, so this is generous by default.
    pub max_submission_bytes: usize,

    // ── Logging ──────────────────────────────────────────────────────

    /// The log level filter (e.g. "info", "debug", "quickform=trace").
    pub log_level: String,

    // ── Escape hatch ─────────────────────────────────────────────────

    /// Custom settings that don't fit into the above categories.
    pub extra: HashMap<String, serde_json::Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            bind_addr: "127.0.0.1:8000".to_string(),
            base_url: String::new(),
            default_theme: "default".to_string(),
            max_submission_bytes: 16 * 1024 * 1024,
            log_level: "info".to_string(),
            extra: HashMap::new(),
        }
    }
}

/// A lazily-initialized, globally-accessible settings container.
///
/// Call [`configure`](LazySettings::configure) once at startup to set the
/// settings, then use [`get`](LazySettings::get) to access them.
///
/// # Panics
///
/// [`get`](LazySettings::get) panics if settings have not been configured.
/// [`configure`](LazySettings::configure) panics if called more than once.
pub struct LazySettings {
    inner: OnceLock<Settings>,
}

impl Default for LazySettings {
    fn default() -> Self {
        Self::new()
    }
}

impl LazySettings {
    /// Creates a new, unconfigured `LazySettings`.
    pub const fn new() -> Self {
        Self {
            inner: OnceLock::new(),
        }
    }

    /// Configures the global settings. Must be called exactly once.
    ///
    /// # Panics
    ///
    /// Panics if settings have already been configured.
    pub fn configure(&self, settings: Settings) {
        self.inner
            .set(settings)
            .expect("Settings have already been configured");
    }

    /// Returns a reference to the configured settings.
    ///
    /// # Panics
    ///
    /// Panics if settings have not been configured.
    pub fn get(&self) -> &Settings {
        self.inner
            .get()
            .expect("Settings have not been configured. Call SETTINGS.configure() first.")
    }

    /// Returns `true` if settings have been configured.
    pub fn is_configured(&self) -> bool {
        self.inner.get().is_some()
    }
}

/// The global settings instance.
///
/// Call `SETTINGS.configure(settings)` once at application startup, then
/// access settings via `SETTINGS.get()` anywhere in the application.
pub static SETTINGS: LazySettings = LazySettings::new();
