//! # Logger
//!
//! Global `tracing` setup for the cram launcher.
//!
//! Console output always goes to **stderr**, so launcher diagnostics never
//! interleave with the test runner's stdout. A rolling file layer can be added
//! with [`LoggerBuilder::path`]; `RUST_LOG` overrides the default level.
//!
//! ## Example
//!
//! ```rust
//! # use cram_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder("cram")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::LoggerError;
pub use tracing::level_filters::LevelFilter;

use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const MAX_LOG_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
struct LoggerConfig {
    name: String,
    path: Option<PathBuf>,
    level: LevelFilter,
    json: bool,
    env_filter: Option<String>,
}

/// A builder for configuring and initializing the global tracing subscriber.
#[derive(Debug)]
pub struct LoggerBuilder {
    config: LoggerConfig,
}

impl LoggerBuilder {
    /// Minimum level emitted when `RUST_LOG` is unset.
    #[must_use]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Adds an explicit env filter (e.g., `cram_launcher=debug`).
    ///
    /// Invalid filters make [`LoggerBuilder::init`] fail.
    #[must_use]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    /// Also writes logs to daily rolling files in `path`, keeping the last ten.
    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.path = Some(path.into());
        self
    }

    /// Writes file logs as JSON lines. Console output stays human readable.
    #[must_use]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.config.json = enabled;
        self
    }

    /// Consumes the builder and installs the global tracing subscriber.
    ///
    /// Keep the returned [`Logger`] alive until shutdown so buffered file
    /// output is flushed.
    ///
    /// # Errors
    /// Returns [`LoggerError::Subscriber`] if a global subscriber has already been set,
    /// [`LoggerError::InvalidConfiguration`] for an empty name or invalid filter and
    /// [`LoggerError::Io`]/[`LoggerError::Appender`] if the log directory is unusable.
    pub fn init(self) -> Result<Logger, LoggerError> {
        let config = self.config;
        validate_config(&config)?;

        let env_filter = build_env_filter(&config)?;
        let mut layers =
            vec![layer().compact().with_writer(std::io::stderr).with_ansi(true).boxed()];

        let guard = if let Some(path) = &config.path {
            fs::create_dir_all(path).map_err(|source| LoggerError::Io {
                source,
                context: Some(format!("Failed to create path: {}", path.display()).into()),
            })?;

            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(&config.name)
                .filename_suffix(LOG_FILE_SUFFIX)
                .max_log_files(MAX_LOG_FILES)
                .build(path)?;

            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let file_layer = layer().with_writer(non_blocking).with_ansi(false);

            layers.push(if config.json { file_layer.json().boxed() } else { file_layer.boxed() });
            Some(guard)
        } else {
            None
        };

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }
}

/// A handle to the initialized logging system.
///
/// Holds the background file writer, if any. Drop it only on shutdown.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`] with console output at `INFO`.
    ///
    /// `name` prefixes log file names.
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder {
            config: LoggerConfig {
                name: name.into(),
                path: None,
                level: LevelFilter::INFO,
                json: false,
                env_filter: None,
            },
        }
    }

    /// Returns the file writer guard, if file logging is enabled.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Logging system shutting down, flushing buffers...");
        }
    }
}

fn validate_config(config: &LoggerConfig) -> Result<(), LoggerError> {
    if config.name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    Ok(())
}

fn build_env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    config.env_filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_console_at_info() {
        let builder = Logger::builder("cram").env_filter("cram_launcher=debug");
        assert!(!builder.config.json);
        assert_eq!(builder.config.level, LevelFilter::INFO);
        assert_eq!(builder.config.env_filter.as_deref(), Some("cram_launcher=debug"));
        assert!(builder.config.path.is_none());
    }

    #[test]
    fn builder_records_file_settings() {
        let builder = Logger::builder("cram")
            .path("logs")
            .json(true)
            .level(LevelFilter::DEBUG);

        assert_eq!(builder.config.path.as_deref(), Some(std::path::Path::new("logs")));
        assert!(builder.config.json);
        assert_eq!(builder.config.level, LevelFilter::DEBUG);
    }

    // Validation runs before any global state is touched, so these are safe in parallel.
    #[test]
    fn empty_name_is_rejected() {
        let err = Logger::builder("  ").init().expect_err("empty name");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }

    #[test]
    fn invalid_filter_is_rejected() {
        let err = Logger::builder("cram").env_filter("cram=loud").init().expect_err("bad filter");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }
}
