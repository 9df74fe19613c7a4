//! Logging and tracing configuration
//!
//! This module provides centralized logging configuration for the generator.
//! Diagnostics always go to stderr (and optionally a rolling file) so that
//! stdout stays reserved for pass output.

use std::io;
use tracing::{info, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for the application
    pub level: Level,
    /// Whether to enable JSON formatting
    pub json_format: bool,
    /// Log file directory, when logging to file
    pub log_directory: Option<String>,
    /// Log file prefix (if logging to file)
    pub log_file_prefix: String,
    /// Whether to enable ansi colors in console output
    pub enable_ansi: bool,
    /// Custom environment filter
    pub env_filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            json_format: false,
            log_directory: None,
            log_file_prefix: "event-pass".to_string(),
            enable_ansi: true,
            env_filter: None,
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log level
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Enable JSON formatting
    pub fn with_json_format(mut self) -> Self {
        self.json_format = true;
        self
    }

    /// Enable file logging
    pub fn with_file_logging(mut self, directory: impl Into<String>) -> Self {
        self.log_directory = Some(directory.into());
        self
    }

    /// Set log file prefix
    pub fn with_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.log_file_prefix = prefix.into();
        self
    }

    /// Disable ANSI colors
    pub fn without_ansi(mut self) -> Self {
        self.enable_ansi = false;
        self
    }

    /// Set custom environment filter
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Build the environment filter, falling back to this crate at `level`
    fn build_env_filter(&self) -> Result<EnvFilter, tracing_subscriber::filter::ParseError> {
        if let Some(filter) = &self.env_filter {
            return EnvFilter::try_new(filter);
        }
        Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME").replace('-', "_"), self.level))
        }))
    }

    /// Initialize the global tracing subscriber
    ///
    /// When file logging is enabled the returned guard must be held until exit,
    /// otherwise buffered lines are lost.
    pub fn init(self) -> Result<Option<WorkerGuard>, Box<dyn std::error::Error + Send + Sync>> {
        let env_filter = self.build_env_filter()?;
        let registry = Registry::default().with(env_filter);

        let guard = match &self.log_directory {
            Some(log_dir) => {
                let file_appender = rolling::daily(log_dir, &self.log_file_prefix);
                let (file_writer, guard) = non_blocking(file_appender);
                let file_layer = fmt::layer().json().with_writer(file_writer);

                if self.json_format {
                    let console_layer = fmt::layer().json().with_writer(io::stderr);
                    registry.with(file_layer).with(console_layer).try_init()?;
                } else {
                    let console_layer =
                        fmt::layer().with_writer(io::stderr).with_ansi(self.enable_ansi);
                    registry.with(file_layer).with(console_layer).try_init()?;
                }
                Some(guard)
            }
            None => {
                if self.json_format {
                    let layer = fmt::layer().json().with_writer(io::stderr);
                    registry.with(layer).try_init()?;
                } else {
                    let layer = fmt::layer().with_writer(io::stderr).with_ansi(self.enable_ansi);
                    registry.with(layer).try_init()?;
                }
                None
            }
        };

        info!(level = %self.level, json = self.json_format, "Logging initialized");
        Ok(guard)
    }

    /// Configuration for verbose runs (INFO level)
    pub fn verbose() -> Self {
        Self::new().with_level(Level::INFO)
    }

    /// Configuration for debug runs (DEBUG level)
    pub fn debug() -> Self {
        Self::new().with_level(Level::DEBUG)
    }
}
