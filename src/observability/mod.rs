//! Observability: structured logging via `tracing`

pub mod logging;

pub use logging::{init_default_logging, init_logging, parse_level, LogFormat};

// Span macros for structured logging
pub use logging::{run_span, stage_span, tool_span};
