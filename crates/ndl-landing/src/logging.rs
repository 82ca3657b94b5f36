#![forbid(unsafe_code)]

//! Structured logging setup.
//!
//! The terminal belongs to the page while it runs, so log output never goes
//! to stdout or stderr. Events are written to the configured log file, or
//! discarded when there is none.

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::config::LoggingConfig;

/// Build the filter: `RUST_LOG` when set and valid, else `config.filter`,
/// else `info`.
#[must_use]
pub fn build_filter(config: &LoggingConfig, rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(&config.filter).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn make_writer(config: &LoggingConfig) -> io::Result<BoxMakeWriter> {
    match &config.file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Ok(BoxMakeWriter::new(Mutex::new(file)))
        }
        None => Ok(BoxMakeWriter::new(io::sink)),
    }
}

/// Install the global subscriber.
///
/// Returns `Ok(false)` when a subscriber was already installed.
pub fn init(config: &LoggingConfig) -> io::Result<bool> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = build_filter(config, rust_log.as_deref());
    let writer = make_writer(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);
    let installed = if config.json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    };
    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_takes_precedence() {
        let config = LoggingConfig {
            filter: "warn".into(),
            ..LoggingConfig::default()
        };
        let filter = build_filter(&config, Some("debug"));
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn config_filter_used_without_rust_log() {
        let config = LoggingConfig {
            filter: "ndl_landing=debug".into(),
            ..LoggingConfig::default()
        };
        assert_eq!(build_filter(&config, None).to_string(), "ndl_landing=debug");
    }

    #[test]
    fn invalid_directives_fall_back() {
        let config = LoggingConfig {
            filter: "ndl_landing=loud".into(),
            ..LoggingConfig::default()
        };
        assert_eq!(build_filter(&config, Some("ndl_core=shouting")).to_string(), "info");
    }

    #[test]
    fn log_file_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ndl.log");
        let config = LoggingConfig {
            file: Some(path.clone()),
            ..LoggingConfig::default()
        };
        let _writer = make_writer(&config).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn unwritable_log_file_is_an_error() {
        let config = LoggingConfig {
            file: Some("/nonexistent-dir/ndl.log".into()),
            ..LoggingConfig::default()
        };
        assert!(make_writer(&config).is_err());
    }
}
