//! Flexible Logging System for Borealis Core.
//!
//! A configurable logging framework built on the `tracing` ecosystem. It
//! supports console output and optional rolling file logging with a text or
//! JSON format, driven by [`LoggingConfig`].

use crate::config::LoggingConfig;
use crate::error::CoreError;
use crate::utils;

use once_cell::sync::Lazy;
use std::path::Path;
use std::sync::Mutex;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

/// Holds the `WorkerGuard` for the non-blocking file writer so buffered log
/// lines are flushed for the lifetime of the process.
static LOG_WORKER_GUARD: Lazy<Mutex<Option<WorkerGuard>>> = Lazy::new(|| Mutex::new(None));

/// Initializes a minimal logging setup, directing messages to `stderr`.
///
/// Intended for tests, early application startup before configuration is
/// loaded, or as a fallback if full logging initialization fails. Filters by
/// the `RUST_LOG` environment variable, defaulting to "info". Errors (e.g. a
/// global subscriber already being set) are ignored.
pub fn init_minimal_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init();
}

/// Creates the rolling file layer for the given path and format.
///
/// Ensures the parent directory exists and wires a daily-rolling,
/// non-blocking appender. The returned guard must be kept alive.
fn create_file_layer(
    log_path: &Path,
    format: &str,
) -> Result<(Box<dyn Layer<Registry> + Send + Sync + 'static>, WorkerGuard), CoreError> {
    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            utils::fs::ensure_dir_exists(parent)?;
        }
    }

    let file_appender = tracing_appender::rolling::daily(
        log_path.parent().unwrap_or_else(|| Path::new(".")),
        log_path
            .file_name()
            .unwrap_or_else(|| std::ffi::OsStr::new("borealis.log")),
    );
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

    let layer: Box<dyn Layer<Registry> + Send + Sync + 'static> =
        match format.to_lowercase().as_str() {
            "json" => Box::new(
                fmt::layer()
                    .json()
                    .with_writer(non_blocking_writer)
                    .with_ansi(false),
            ),
            _ => Box::new(fmt::layer().with_writer(non_blocking_writer).with_ansi(false)),
        };
    Ok((layer, guard))
}

/// Initializes the global logging system from the provided [`LoggingConfig`].
///
/// Sets a global `tracing` subscriber composed of an env-filter (the
/// configured level, overridable through `RUST_LOG`), a console layer, and an
/// optional file layer.
///
/// # Arguments
///
/// * `config`: logging settings, already validated by the config loader.
/// * `is_reload`: if `true`, an already-set global subscriber is tolerated
///   (the call degrades to a no-op with an informational message); if
///   `false`, that situation is an initialization error.
///
/// # Errors
///
/// Returns [`CoreError::LoggingInitialization`] if the level is unusable or
/// setting the global subscriber fails on initial setup.
pub fn init_logging(config: &LoggingConfig, is_reload: bool) -> Result<(), CoreError> {
    let level = config.level.to_lowercase();
    match level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        other => {
            return Err(CoreError::LoggingInitialization(format!(
                "Invalid log level '{}'",
                other
            )))
        }
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.clone()));

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync + 'static>> = Vec::new();
    layers.push(Box::new(env_filter));
    layers.push(Box::new(
        fmt::layer().with_ansi(atty::is(atty::Stream::Stdout)),
    ));

    if let Some(path) = &config.file_path {
        let (file_layer, guard) = create_file_layer(path, &config.format)?;
        layers.push(file_layer);
        let mut global_guard = LOG_WORKER_GUARD.lock().unwrap();
        *global_guard = Some(guard);
    }

    match tracing_subscriber::registry().with(layers).try_init() {
        Ok(()) => {
            tracing::info!(
                level = %level,
                file_logging = config.file_path.is_some(),
                "Logging initialized"
            );
            Ok(())
        }
        Err(e) if is_reload => {
            tracing::info!("Logging already initialized, reload request ignored: {}", e);
            Ok(())
        }
        Err(e) => Err(CoreError::LoggingInitialization(format!(
            "Failed to set global subscriber: {}",
            e
        ))),
    }
}
