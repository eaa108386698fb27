//! Structured logging system using tracing crate
//!
//! Logs are written to stderr so stdout carries only the analysis report.
//!
//! ## Environment Variables
//!
//! - `LOG_LEVEL`: ERROR, WARN, INFO, DEBUG, TRACE - defaults to WARN
//! - `LOG_FORMAT`: json, pretty, compact - defaults to compact
//! - `LOG_SPANS`: include span open/close events (true/false) - defaults to false
//! - `RUST_LOG`: overrides filtering entirely
//!
//! ```bash
//! LOG_FORMAT=json LOG_LEVEL=DEBUG lean-agent --file process.txt
//! ```

use std::env;
use std::io;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON format for structured logging (machine-readable)
    Json,
    /// Pretty format with colors and indentation (human-readable)
    Pretty,
    /// Compact format with colors but minimal spacing (terminal-friendly)
    Compact,
}

impl LogFormat {
    /// Parse log format from string, unknown values give `Compact`
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => LogFormat::Json,
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Compact,
        }
    }
}

/// Parse a level name, unknown values give `WARN`
pub fn parse_level(s: &str) -> Level {
    match s.trim().to_uppercase().as_str() {
        "ERROR" => Level::ERROR,
        "WARN" => Level::WARN,
        "INFO" => Level::INFO,
        "DEBUG" => Level::DEBUG,
        "TRACE" => Level::TRACE,
        _ => Level::WARN,
    }
}

/// Level after applying `-v` flags on top of `base`
pub fn level_with_verbosity(base: Level, verbose: u8) -> Level {
    let raised = match verbose {
        0 => return base,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    // tracing orders levels by verbosity: TRACE > DEBUG > ... > ERROR
    if raised > base {
        raised
    } else {
        base
    }
}

fn span_events(include_spans: bool) -> fmt::format::FmtSpan {
    if include_spans {
        fmt::format::FmtSpan::NEW | fmt::format::FmtSpan::CLOSE
    } else {
        fmt::format::FmtSpan::NONE
    }
}

/// Initialize logging with manual configuration
///
/// A second call is a no-op; the first subscriber stays installed.
pub fn init_logging(level: Level, format: LogFormat, include_spans: bool) {
    let filter = match env::var("RUST_LOG") {
        Ok(rust_log) => EnvFilter::new(rust_log),
        Err(_) => EnvFilter::new(level.to_string()),
    };

    let subscriber = tracing_subscriber::registry().with(filter);

    let result = match format {
        LogFormat::Json => subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_writer(io::stderr)
                    .with_span_events(span_events(include_spans)),
            )
            .try_init(),
        LogFormat::Pretty => subscriber
            .with(
                fmt::layer()
                    .pretty()
                    .with_ansi(true)
                    .with_writer(io::stderr)
                    .with_span_events(span_events(include_spans)),
            )
            .try_init(),
        LogFormat::Compact => subscriber
            .with(
                fmt::layer()
                    .compact()
                    .with_ansi(true)
                    .with_target(false)
                    .with_writer(io::stderr)
                    .with_span_events(span_events(include_spans)),
            )
            .try_init(),
    };

    if result.is_err() {
        tracing::debug!("Global subscriber already installed");
    }
}

/// Initialize logging from environment variables plus CLI verbosity
pub fn init_default_logging(verbose: u8) {
    let base = parse_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "WARN".to_string()));
    let level = level_with_verbosity(base, verbose);

    let format = LogFormat::parse(&env::var("LOG_FORMAT").unwrap_or_default());

    let include_spans = env::var("LOG_SPANS")
        .unwrap_or_else(|_| "false".to_string())
        .to_lowercase()
        == "true";

    init_logging(level, format, include_spans);
}

/// Span covering one pipeline run
#[macro_export]
macro_rules! run_span {
    ($($field:tt)*) => {
        tracing::info_span!("pipeline_run", $($field)*)
    };
}

/// Span covering one pipeline stage
#[macro_export]
macro_rules! stage_span {
    ($($field:tt)*) => {
        tracing::debug_span!("pipeline_stage", $($field)*)
    };
}

/// Span covering one tool execution
#[macro_export]
macro_rules! tool_span {
    ($($field:tt)*) => {
        tracing::info_span!("tool_execution", $($field)*)
    };
}

pub use {run_span, stage_span, tool_span};
