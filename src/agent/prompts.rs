//! Prompt template catalogue
//!
//! Templates are read as raw text from the configured prompt directory.
//! Nothing renders them; stages only note whether their template exists.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Stage name → template file name
pub const PROMPT_FILES: &[(&str, &str)] = &[
    ("system", "system_v1.jinja"),
    ("planner", "planner_v1.jinja"),
    ("critic", "critic_v1.jinja"),
    ("finalizer", "finalizer_v1.jinja"),
];

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Unknown prompt: {0}")]
    UnknownPrompt(String),
    #[error("Failed to read prompt template {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Prompt templates under one directory
#[derive(Debug, Clone)]
pub struct PromptLibrary {
    prompt_dir: PathBuf,
}

impl PromptLibrary {
    pub fn new(prompt_dir: impl Into<PathBuf>) -> Self {
        Self {
            prompt_dir: prompt_dir.into(),
        }
    }

    pub fn prompt_dir(&self) -> &Path {
        &self.prompt_dir
    }

    /// Path of the template for `name`
    pub fn template_path(&self, name: &str) -> Result<PathBuf, PromptError> {
        PROMPT_FILES
            .iter()
            .find(|(prompt, _)| *prompt == name)
            .map(|(_, file)| self.prompt_dir.join(file))
            .ok_or_else(|| PromptError::UnknownPrompt(name.to_string()))
    }

    /// Raw template text for `name`
    pub fn load(&self, name: &str) -> Result<String, PromptError> {
        let path = self.template_path(name)?;
        std::fs::read_to_string(&path).map_err(|source| PromptError::Read { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_existing_template() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("planner_v1.jinja"), "Plan the analysis.").unwrap();

        let library = PromptLibrary::new(dir.path());
        assert_eq!(library.load("planner").unwrap(), "Plan the analysis.");
    }

    #[test]
    fn test_missing_template_is_read_error() {
        let dir = TempDir::new().unwrap();
        let library = PromptLibrary::new(dir.path());

        let result = library.load("finalizer");
        assert!(matches!(result, Err(PromptError::Read { .. })));
    }

    #[test]
    fn test_unknown_prompt_name() {
        let library = PromptLibrary::new("prompts");
        assert!(matches!(
            library.load("router"),
            Err(PromptError::UnknownPrompt(_))
        ));
    }

    #[test]
    fn test_template_path_joins_prompt_dir() {
        let library = PromptLibrary::new("prompts");
        assert_eq!(library.prompt_dir(), Path::new("prompts"));
        assert_eq!(
            library.template_path("critic").unwrap(),
            PathBuf::from("prompts/critic_v1.jinja")
        );
    }
}
