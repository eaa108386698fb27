//! Error types for the Lean agent
//!
//! Layer errors (`ToolError`, `ConfigError`) convert into [`AgentError`].
//! User-facing text goes through [`AgentError::user_message`].

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

const MAX_USER_MESSAGE_LEN: usize = 500;

static SECRET_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"(?i)(password|token|key|secret)[=:]\s*\S+").ok());

static SENSITIVE_PATH_PATTERN: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"/[a-zA-Z0-9._/-]+/(secrets?|\.ssh|\.aws|\.config)/[a-zA-Z0-9._/-]+").ok()
});

/// Main error type for agent operations
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Tool execution failed: {message}")]
    ToolExecutionFailed { message: String },

    #[error("Internal error: {message}")]
    InternalError { message: String },

    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::config::ConfigError),

    #[error("Tool error: {0}")]
    ToolError(crate::tools::ToolError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<crate::tools::ToolError> for AgentError {
    fn from(error: crate::tools::ToolError) -> Self {
        match error {
            crate::tools::ToolError::ValidationError(message) => Self::InvalidInput { message },
            crate::tools::ToolError::ExecutionError(message) => {
                Self::ToolExecutionFailed { message }
            }
            other => Self::ToolError(other),
        }
    }
}

impl AgentError {
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn tool_execution_failed<S: Into<String>>(message: S) -> Self {
        Self::ToolExecutionFailed {
            message: message.into(),
        }
    }

    pub fn internal_error<S: Into<String>>(message: S) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }

    /// True for errors caused by what the user typed or pointed at
    pub fn is_user_error(&self) -> bool {
        matches!(self, AgentError::InvalidInput { .. } | AgentError::Io(_))
    }

    /// Display text with secrets and sensitive paths removed
    pub fn user_message(&self) -> String {
        sanitize_error_message(&self.to_string())
    }
}

/// Redact secrets and sensitive paths, cap length
pub fn sanitize_error_message(message: &str) -> String {
    let mut sanitized = message.to_string();

    if let Some(pattern) = SECRET_PATTERN.as_ref() {
        sanitized = pattern.replace_all(&sanitized, "${1}=***").to_string();
    }

    if let Some(pattern) = SENSITIVE_PATH_PATTERN.as_ref() {
        sanitized = pattern
            .replace_all(&sanitized, "/***REDACTED***/")
            .to_string();
    }

    if sanitized.len() > MAX_USER_MESSAGE_LEN {
        let truncate_suffix = "...[truncated]";
        let mut cut = MAX_USER_MESSAGE_LEN - truncate_suffix.len();
        while !sanitized.is_char_boundary(cut) {
            cut -= 1;
        }
        sanitized = format!("{}{}", &sanitized[..cut], truncate_suffix);
    }

    sanitized
}

pub type AgentResult<T> = Result<T, AgentError>;
