//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! # Log Levels
//!
//! - `error`: unreadable input files, fatal errors
//! - `warn`: rejected values in batch runs
//! - `info`: command start and summary counts
//! - `debug`: individual rule decisions
//! - `trace`: raw input values (requires `--log-data`, RUTs are personal data)
//!
//! # Usage
//!
//! ```ignore
//! use cmms_cli::logging::{init_logging, LogConfig};
//!
//! let config = LogConfig { log_data: false, ..LogConfig::default() };
//! init_logging(&config).expect("init logging");
//! ```

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tracing::Subscriber;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

static LOG_DATA_ENABLED: AtomicBool = AtomicBool::new(false);

/// Placeholder used when raw-value logging is disabled.
pub const REDACTED_VALUE: &str = "[REDACTED]";

/// Returns true if raw-value logging is explicitly enabled.
pub fn log_data_enabled() -> bool {
    LOG_DATA_ENABLED.load(Ordering::Relaxed)
}

/// Returns the input value when data logging is enabled, otherwise a redacted token.
pub fn redact_value(value: &str) -> &str {
    if log_data_enabled() {
        value
    } else {
        REDACTED_VALUE
    }
}

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level filter applied to the workspace crates.
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` override `level_filter` when set.
    pub use_env_filter: bool,
    pub with_ansi: bool,
    pub format: LogFormat,
    /// Optional log file path. When set, logs are written to the file.
    pub log_file: Option<PathBuf>,
    /// Whether raw input values (RUTs, form values) may be logged.
    pub log_data: bool,
}

/// Log output format.
///
/// Human formats omit timestamps since a validation run lasts milliseconds.
/// JSON lines keep them for log shippers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
            log_data: false,
        }
    }
}

/// Initialize the global tracing subscriber with the given configuration.
///
/// This should be called once at application startup.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    LOG_DATA_ENABLED.store(config.log_data, Ordering::Release);
    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        build_subscriber(config, SharedWriter::new(file)).init();
    } else {
        build_subscriber(config, io::stderr).init();
    }
    Ok(())
}

/// Assemble the filter and the format layer for `config` without installing it.
fn build_subscriber<W>(config: &LogConfig, writer: W) -> impl Subscriber + Send + Sync + use<W>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let format_layer: Box<dyn Layer<Registry> + Send + Sync> = match config.format {
        LogFormat::Json => fmt::layer().json().with_writer(writer).boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .without_time()
            .with_target(false)
            .with_ansi(config.with_ansi)
            .with_writer(writer)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .without_time()
            .with_target(false)
            .with_ansi(config.with_ansi)
            .with_writer(writer)
            .boxed(),
    };
    tracing_subscriber::registry()
        .with(format_layer)
        .with(build_env_filter(config.level_filter, config.use_env_filter))
}

/// Cloneable writer handle over a single sink, such as the `--log-file` target.
#[derive(Clone)]
struct SharedWriter<W> {
    sink: Arc<Mutex<W>>,
}

impl<W: Write> SharedWriter<W> {
    fn new(sink: W) -> Self {
        Self {
            sink: Arc::new(Mutex::new(sink)),
        }
    }
}

struct SharedWriterGuard<W> {
    sink: Arc<Mutex<W>>,
}

impl<W: Write> Write for SharedWriterGuard<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .sink
            .lock()
            .map_err(|_| io::Error::other("log writer lock poisoned"))?;
        guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut guard = self
            .sink
            .lock()
            .map_err(|_| io::Error::other("log writer lock poisoned"))?;
        guard.flush()
    }
}

impl<'a, W: Write + 'a> MakeWriter<'a> for SharedWriter<W> {
    type Writer = SharedWriterGuard<W>;

    fn make_writer(&'a self) -> Self::Writer {
        SharedWriterGuard {
            sink: Arc::clone(&self.sink),
        }
    }
}

/// Build an `EnvFilter` for the workspace crates.
fn build_env_filter(level_filter: LevelFilter, use_env_filter: bool) -> EnvFilter {
    let level = level_filter.to_string().to_lowercase();
    let fallback = || {
        // External crates stay at warn level to reduce noise
        EnvFilter::new(format!(
            "warn,cmms_cli={level},cmms_model={level},cmms_validate={level}"
        ))
    };
    if use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
    } else {
        fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_by_default() {
        assert!(!log_data_enabled());
        assert_eq!(redact_value("12.345.678-5"), REDACTED_VALUE);
    }

    #[test]
    fn env_filter_lists_workspace_crates() {
        let filter = build_env_filter(LevelFilter::DEBUG, false);
        let rendered = filter.to_string();
        assert!(rendered.contains("cmms_validate=debug"));
        assert!(rendered.contains("cmms_cli=debug"));
    }

    fn capture(format: LogFormat, emit: impl FnOnce()) -> String {
        let config = LogConfig {
            level_filter: LevelFilter::INFO,
            use_env_filter: false,
            with_ansi: false,
            format,
            ..LogConfig::default()
        };
        let writer = SharedWriter::new(Vec::new());
        tracing::subscriber::with_default(build_subscriber(&config, writer.clone()), emit);
        let bytes = writer.sink.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn compact_lines_have_no_timestamp_or_target() {
        let output = capture(LogFormat::Compact, || {
            tracing::info!(total = 3, "batch checked");
            tracing::debug!("below the level filter");
        });
        let line = output.lines().next().unwrap();
        assert!(line.trim_start().starts_with("INFO"), "{line}");
        assert!(line.contains("batch checked"));
        assert!(!line.contains("cmms_cli::logging"));
        assert!(!output.contains("below the level filter"));
    }

    #[test]
    fn json_lines_carry_timestamp_and_fields() {
        let output = capture(LogFormat::Json, || {
            tracing::warn!(row = 2, "rejected value");
        });
        let first = output.lines().next().unwrap();
        let line: serde_json::Value = serde_json::from_str(first).unwrap();
        assert_eq!(line["level"], "WARN");
        assert_eq!(line["fields"]["message"], "rejected value");
        assert_eq!(line["fields"]["row"], 2);
        assert!(line["timestamp"].is_string());
    }
}
