//! Logging integration for wayline.
//!
//! Provides helpers for configuring [`tracing`]-based logging and for
//! creating per-navigation spans.

/// Controls how [`setup_logging`] configures the global subscriber.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Filter directive string (e.g. "info", "wayline=debug"). The
    /// `RUST_LOG` environment variable, when set, takes priority.
    pub log_level: String,
    /// Pretty, human-readable output when true; structured JSON otherwise.
    pub debug: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            debug: true,
        }
    }
}

/// Sets up the global tracing subscriber based on the given config.
///
/// The filter is read from `RUST_LOG` when present, falling back to
/// `config.log_level`. In debug mode a pretty, human-readable format is
/// used; otherwise a structured JSON format is used. Installing a second
/// subscriber is a no-op.
pub fn setup_logging(config: &LogConfig) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if config.debug {
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

/// Creates a tracing span for one navigation attempt.
///
/// Attach this span around a `refresh` call so that all log entries emitted
/// during the transition include the fragment being resolved.
///
/// # Examples
///
/// ```
/// use wayline_core::logging::navigation_span;
///
/// let span = navigation_span("/pages/42");
/// let _guard = span.enter();
/// tracing::info!("resolving");
/// ```
pub fn navigation_span(fragment: &str) -> tracing::Span {
    tracing::info_span!("navigation", fragment = fragment)
}
