//! Router configuration.
//!
//! This module provides [`RouterConfig`] and functions to load it from TOML
//! files, with environment variable overrides applied last.
//!
//! ## Loading Order
//!
//! 1. Start with default configuration.
//! 2. Load from a TOML file (overriding defaults; absent keys keep them).
//! 3. Apply environment variable overrides (highest priority).
//!
//! ## Environment Variable Mapping
//!
//! | Env Var | Setting |
//! |---|---|
//! | `WAYLINE_TARGET` | `target` |
//! | `WAYLINE_HISTORY_LIMIT` | `history_limit` |
//! | `WAYLINE_AUTO_RUN` | `auto_run` |
//! | `WAYLINE_REENABLE_DELAY_MS` | `reenable_delay_ms` |
//! | `WAYLINE_LOG_LEVEL` | `log_level` |
//! | `WAYLINE_DEBUG` | `debug` |

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use wayline_core::logging::LogConfig;
use wayline_core::WaylineError;

/// Configuration for a [`Router`](crate::Router).
///
/// All fields have defaults matching the classic hash-router behavior, so
/// `RouterConfig::default()` is a working configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Default render target name, overridable per render call.
    pub target: String,
    /// Maximum number of history entries kept.
    pub history_limit: usize,
    /// Whether the host should perform an initial refresh when wiring the
    /// router up. The router stores the flag; acting on it is the host's
    /// job.
    pub auto_run: bool,
    /// Delay before the router re-enables itself after a cancelled
    /// navigation rollback, in milliseconds.
    pub reenable_delay_ms: u64,
    /// Log filter directive handed to the logging setup.
    pub log_level: String,
    /// Pretty log output when true, JSON otherwise.
    pub debug: bool,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            target: "yield".to_string(),
            history_limit: 10,
            auto_run: true,
            reenable_delay_ms: 100,
            log_level: "info".to_string(),
            debug: true,
        }
    }
}

impl RouterConfig {
    /// The rollback re-enable delay as a [`Duration`].
    pub const fn reenable_delay(&self) -> Duration {
        Duration::from_millis(self.reenable_delay_ms)
    }

    /// The logging setup derived from this configuration.
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            log_level: self.log_level.clone(),
            debug: self.debug,
        }
    }
}

/// Loads configuration from a TOML string.
///
/// Fields not present in the TOML keep their default values.
///
/// # Errors
///
/// Returns an error if the TOML is malformed or a field has the wrong type.
pub fn from_toml_str(toml_str: &str) -> Result<RouterConfig, WaylineError> {
    toml::from_str(toml_str)
        .map_err(|e| WaylineError::ConfigurationError(format!("Failed to parse TOML: {e}")))
}

/// Loads configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the TOML is malformed.
pub fn from_toml_file(path: impl AsRef<Path>) -> Result<RouterConfig, WaylineError> {
    let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
        WaylineError::ConfigurationError(format!(
            "Failed to read TOML file '{}': {e}",
            path.as_ref().display()
        ))
    })?;
    from_toml_str(&content)
}

/// Loads configuration from a TOML file and then applies environment
/// variable overrides.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the TOML is malformed.
pub fn from_toml_file_with_env(path: impl AsRef<Path>) -> Result<RouterConfig, WaylineError> {
    let mut config = from_toml_file(path)?;
    apply_env_overrides(&mut config);
    Ok(config)
}

/// Loads configuration from just environment variables (starting from
/// defaults).
pub fn from_env() -> RouterConfig {
    let mut config = RouterConfig::default();
    apply_env_overrides(&mut config);
    config
}

/// Applies environment variable overrides to a configuration.
///
/// Numeric variables that fail to parse are ignored; boolean variables
/// accept "true"/"1"/"yes" (case-insensitive) as true and anything else as
/// false.
pub fn apply_env_overrides(config: &mut RouterConfig) {
    if let Ok(val) = std::env::var("WAYLINE_TARGET") {
        config.target = val;
    }

    if let Ok(val) = std::env::var("WAYLINE_HISTORY_LIMIT") {
        if let Ok(limit) = val.parse::<usize>() {
            config.history_limit = limit;
        }
    }

    if let Ok(val) = std::env::var("WAYLINE_AUTO_RUN") {
        config.auto_run = matches!(val.to_lowercase().as_str(), "true" | "1" | "yes");
    }

    if let Ok(val) = std::env::var("WAYLINE_REENABLE_DELAY_MS") {
        if let Ok(delay) = val.parse::<u64>() {
            config.reenable_delay_ms = delay;
        }
    }

    if let Ok(val) = std::env::var("WAYLINE_LOG_LEVEL") {
        config.log_level = val;
    }

    if let Ok(val) = std::env::var("WAYLINE_DEBUG") {
        config.debug = matches!(val.to_lowercase().as_str(), "true" | "1" | "yes");
    }
}
