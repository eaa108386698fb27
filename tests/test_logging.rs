//! Tests for logging configuration and format parsing

use lean_agent::observability::logging::{level_with_verbosity, LogFormat};
use lean_agent::observability::{init_logging, parse_level};
use tracing::Level;

#[test]
fn test_log_format_parse_case_insensitive() {
    assert_eq!(LogFormat::parse("jSoN"), LogFormat::Json);
    assert_eq!(LogFormat::parse("PrEtTy"), LogFormat::Pretty);
    assert_eq!(LogFormat::parse("CoMpAcT"), LogFormat::Compact);
}

#[test]
fn test_log_format_parse_whitespace() {
    assert_eq!(LogFormat::parse("  json  "), LogFormat::Json);
    assert_eq!(LogFormat::parse("pretty\n"), LogFormat::Pretty);
}

#[test]
fn test_log_format_unknown_defaults_to_compact() {
    for input in ["", "xml", "yaml", "123"] {
        assert_eq!(LogFormat::parse(input), LogFormat::Compact, "input: {input:?}");
    }
}

#[test]
fn test_level_parsing_defaults_to_warn() {
    assert_eq!(parse_level("DEBUG"), Level::DEBUG);
    assert_eq!(parse_level(" error "), Level::ERROR);
    assert_eq!(parse_level("verbose"), Level::WARN);
}

#[test]
fn test_verbosity_levels() {
    assert_eq!(level_with_verbosity(Level::ERROR, 1), Level::INFO);
    assert_eq!(level_with_verbosity(Level::INFO, 3), Level::TRACE);
    assert_eq!(level_with_verbosity(Level::INFO, 0), Level::INFO);
}

#[test]
fn test_init_logging_twice_does_not_panic() {
    init_logging(Level::WARN, LogFormat::Compact, false);
    init_logging(Level::DEBUG, LogFormat::Json, true);
    tracing::warn!("logging initialized in test");
}
