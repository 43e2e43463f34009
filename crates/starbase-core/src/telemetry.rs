//! Structured logging setup.
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and a
//! human-readable or JSON formatting layer.

use crate::StarbaseResult;
use serde::{Deserialize, Serialize};

#[cfg(feature = "telemetry")]
use crate::StarbaseError;
#[cfg(feature = "telemetry")]
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format of the formatting layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, human oriented.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Filter directive used when `RUST_LOG` is unset (e.g. `info,starbase=debug`).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format.
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

/// Parses `directives` exactly as [`init_tracing`] will.
#[cfg(feature = "telemetry")]
pub fn parse_filter(directives: &str) -> StarbaseResult<EnvFilter> {
    EnvFilter::try_new(directives).map_err(|e| {
        StarbaseError::Configuration(format!("Invalid log filter '{}': {}", directives, e))
    })
}

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over `config.log_level`. A subscriber that is already
/// installed is left in place, so calling this more than once is harmless.
#[cfg(feature = "telemetry")]
pub fn init_tracing(config: &TelemetryConfig) -> StarbaseResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => parse_filter(&config.log_level)?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    let installed = match config.log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(true))
            .try_init(),
        LogFormat::Pretty => registry.with(fmt::layer().with_target(true)).try_init(),
    };

    match installed {
        Ok(()) => tracing::info!(
            log_level = %config.log_level,
            log_format = ?config.log_format,
            "Tracing initialized"
        ),
        Err(e) => tracing::debug!("Tracing subscriber already installed: {}", e),
    }

    Ok(())
}

/// Placeholder for when the telemetry feature is disabled.
#[cfg(not(feature = "telemetry"))]
pub fn init_tracing(_config: &TelemetryConfig) -> StarbaseResult<()> {
    Ok(())
}
