//! Structured logging setup with console and file output.
//!
//! Logs go to a daily rotating file under the data directory plus stdout at
//! `info`, or to the terminal alone when one is attached. The filter comes
//! from `LANTERN_LOG`, then `RUST_LOG`, then a build-type default.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

/// Logging configuration.
pub struct LogConfig {
    /// Directory for log files
    pub log_dir: PathBuf,
    /// Log to the terminal only (set when stdout is a terminal)
    pub console_only: bool,
    /// Optional custom log filter
    pub log_filter: Option<String>,
    /// Emit an event when instrumented spans such as `context_menu_show` close
    pub span_timings: bool,
}

impl LogConfig {
    /// Create a new logging configuration.
    pub fn new(log_dir: PathBuf) -> Self {
        Self {
            log_dir,
            console_only: atty::is(atty::Stream::Stdout),
            log_filter: None,
            span_timings: cfg!(debug_assertions),
        }
    }

    /// Set custom log filter.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    /// Toggle span close events.
    pub fn with_span_timings(mut self, enabled: bool) -> Self {
        self.span_timings = enabled;
        self
    }

    fn span_events(&self) -> FmtSpan {
        if self.span_timings {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }
}

/// Guard that must be held for the lifetime of the application.
///
/// Dropping this guard flushes pending log entries.
pub struct LoggingGuard {
    _worker_guard: Option<WorkerGuard>,
}

/// Initialize logging with the given configuration.
///
/// Falls back to console output when the log directory cannot be used.
pub fn init_logging(config: LogConfig) -> LoggingGuard {
    if config.console_only {
        init_console_logging(&config);
        return LoggingGuard { _worker_guard: None };
    }

    match open_log_file(&config.log_dir) {
        Ok(file_appender) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let writer = std::io::stdout.with_max_level(tracing::Level::INFO).and(non_blocking);

            tracing_subscriber::fmt()
                .with_writer(writer)
                .with_env_filter(build_env_filter(config.log_filter.as_deref()))
                .with_span_events(config.span_events())
                .with_target(true)
                .init();

            LoggingGuard { _worker_guard: Some(guard) }
        }
        Err(e) => {
            eprintln!(
                "Warning: cannot write logs to {}: {e}. Logging to console only.",
                config.log_dir.display()
            );
            init_console_logging(&config);
            LoggingGuard { _worker_guard: None }
        }
    }
}

/// Initialize with the default log directory.
pub fn init_logging_default() -> LoggingGuard {
    init_logging(LogConfig::new(log_dir()))
}

fn init_console_logging(config: &LogConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(config.log_filter.as_deref()))
        .with_span_events(config.span_events())
        .with_target(false)
        .init();
}

fn open_log_file(dir: &Path) -> Result<RollingFileAppender, Box<dyn std::error::Error>> {
    std::fs::create_dir_all(dir)?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("lantern")
        .filename_suffix("log")
        .build(dir)?;
    Ok(appender)
}

/// Build the environment filter from config or defaults.
fn build_env_filter(custom_filter: Option<&str>) -> EnvFilter {
    // Priority: custom filter > LANTERN_LOG > RUST_LOG > default
    if let Some(filter) = custom_filter {
        return EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(default_log_filter()));
    }

    EnvFilter::try_from_env("LANTERN_LOG")
        .or_else(|_| EnvFilter::try_from_env("RUST_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(default_log_filter()))
}

/// Get the default log filter based on build type.
pub fn default_log_filter() -> &'static str {
    #[cfg(debug_assertions)]
    {
        "debug,lantern=trace,lantern_core=trace,lantern_ui=debug"
    }
    #[cfg(not(debug_assertions))]
    {
        "info,lantern=info,lantern_core=info,lantern_ui=info"
    }
}

/// Get the default log directory.
pub fn log_dir() -> PathBuf {
    crate::config::default_data_dir().join("logs")
}
