//! Tracing setup for the kittenctl CLI
//!
//! Usage:
//!   kittenctl --log-level info serve      # Level for everything
//!   kittenctl --log-format json serve     # One JSON object per event
//!   RUST_LOG=kittenctl_server=trace ...   # Fine-grained log control
//!
//! Environment variables:
//!   LOG_LEVEL                             # DEBUG, INFO, WARNING or ERROR (default: DEBUG)
//!   LOG_FORMAT                            # compact or json (default: compact)
//!   RUST_LOG                              # Overrides LOG_LEVEL when set

use anyhow::{anyhow, Result};
use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

/// Minimum level of events to emit
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    #[default]
    Debug,
    Info,
    #[value(alias = "warn")]
    Warning,
    Error,
}

impl LogLevel {
    /// `EnvFilter` directive for this level
    pub fn directive(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warn",
            Self::Error => "error",
        }
    }
}

/// Output format for log lines
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    pub level: LogLevel,
    pub format: LogFormat,
}

/// Build the filter: RUST_LOG if set, otherwise the configured level
fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.directive()))
}

/// Initialize tracing based on configuration
pub fn init(config: &TracingConfig) -> Result<()> {
    let filter = env_filter(config.level);

    match config.format {
        LogFormat::Compact => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(config.level == LogLevel::Debug) // Show targets in debug mode
            .compact()
            .try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .flatten_event(true)
            .with_current_span(false)
            .try_init(),
    }
    .map_err(|err| anyhow!(err))
}
