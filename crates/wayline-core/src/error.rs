//! Core error types for the wayline navigation resolver.
//!
//! This module provides the error enum [`WaylineError`] covering pattern
//! compilation, hook registration, render-target resolution, rendering, and
//! configuration failures, plus the crate-wide [`WaylineResult`] alias.

use thiserror::Error;

/// The primary error type for wayline.
///
/// Unmatched fragments and vetoed navigations are *not* errors: the first
/// degrades to the not-found handler and the second is the sanctioned
/// cancellation signal. Everything in this enum indicates either a
/// programming mistake caught at registration time or a collaborator that
/// could not fulfil its contract.
#[derive(Error, Debug)]
pub enum WaylineError {
    // ── Registration errors ──────────────────────────────────────────

    /// A path pattern could not be compiled into a matcher.
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The offending pattern template.
        pattern: String,
        /// Why compilation failed.
        reason: String,
    },

    /// A hook or observer registration was malformed.
    #[error("Invalid hook registration: {0}")]
    InvalidHook(String),

    // ── Rendering errors ─────────────────────────────────────────────

    /// The resolved render target does not exist in the document.
    #[error("Target '{target}' is not valid for route: {route}")]
    TargetNotFound {
        /// Path of the route whose render failed.
        route: String,
        /// Name of the missing target.
        target: String,
    },

    /// The renderer collaborator failed to paint.
    #[error("Render error: {0}")]
    RenderError(String),

    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl WaylineError {
    /// Returns `true` for errors that indicate a programming mistake
    /// (malformed pattern or hook registration) rather than a runtime
    /// collaborator failure.
    ///
    /// - `InvalidPattern`, `InvalidHook` -> `true`
    /// - `TargetNotFound`, `RenderError`, `ConfigurationError` -> `false`
    pub const fn is_registration_error(&self) -> bool {
        matches!(self, Self::InvalidPattern { .. } | Self::InvalidHook(_))
    }
}

/// A convenience type alias for `Result<T, WaylineError>`.
pub type WaylineResult<T> = Result<T, WaylineError>;
