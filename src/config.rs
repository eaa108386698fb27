//! Runtime settings for the Lean agent
//!
//! Settings come from an optional TOML file, then environment variables
//! (including a `.env` file when one is present). None of them affect the
//! waste heuristic itself; they feed the pipeline shell and the CLI.

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "lean-agent.toml";

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "LEAN_AGENT_CONFIG";

static SETTINGS: OnceCell<Settings> = OnceCell::new();

/// Runtime configuration
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// API key used to authenticate against the OpenAI API
    #[serde(default)]
    pub openai_api_key: Option<String>,
    /// Connection string for the Postgres + pgvector instance
    #[serde(default)]
    pub database_url: Option<String>,
    /// Destination for traces
    #[serde(default)]
    pub tracing_endpoint: Option<String>,
    /// Base directory where prompt templates are stored
    #[serde(default = "default_prompt_dir")]
    pub prompt_dir: PathBuf,
    /// Tools available to the pipeline
    #[serde(default = "default_tools")]
    pub tools: HashMap<String, ToolConfig>,
}

fn default_prompt_dir() -> PathBuf {
    PathBuf::from("prompts")
}

fn default_tools() -> HashMap<String, ToolConfig> {
    let mut tools = HashMap::new();
    tools.insert(
        crate::tools::builtin::WASTE_DETECTOR.to_string(),
        ToolConfig::Simple("builtin".to_string()),
    );
    tools
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            database_url: None,
            tracing_endpoint: None,
            prompt_dir: default_prompt_dir(),
            tools: default_tools(),
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("openai_api_key", &self.openai_api_key.as_ref().map(|_| "***"))
            .field("database_url", &self.database_url.as_ref().map(|_| "***"))
            .field("tracing_endpoint", &self.tracing_endpoint)
            .field("prompt_dir", &self.prompt_dir)
            .field("tools", &self.tools)
            .finish()
    }
}

/// Tool configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ToolConfig {
    /// Simple form: tool_name = "builtin"
    Simple(String),
    /// Complex form: tool_name = { impl = "builtin", config = { ... } }
    Complex {
        #[serde(rename = "impl")]
        implementation: String,
        #[serde(default)]
        config: HashMap<String, serde_json::Value>,
    },
}

impl ToolConfig {
    pub fn implementation(&self) -> &str {
        match self {
            ToolConfig::Simple(implementation) => implementation,
            ToolConfig::Complex { implementation, .. } => implementation,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Settings {
    /// Load settings from a TOML file, then apply environment overrides
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut settings: Settings = toml::from_str(&content)?;

        settings.apply_env_overrides();
        settings.validate()?;

        Ok(settings)
    }

    /// Resolve settings the way the binary does
    ///
    /// `.env` is read first (missing file ignored). The config file is the
    /// explicit `path`, else `LEAN_AGENT_CONFIG`, else `lean-agent.toml` if it
    /// exists; without any file the defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let explicit = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from));

        match explicit {
            Some(path) => {
                debug!(path = %path.display(), "Loading configuration");
                Self::load_from_file(&path)
            }
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    debug!(path = %default_path.display(), "Loading configuration");
                    Self::load_from_file(default_path)
                } else {
                    Self::from_env()
                }
            }
        }
    }

    /// Defaults plus environment overrides
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut settings = Settings::default();
        settings.apply_env_overrides();
        settings.validate()?;
        Ok(settings)
    }

    fn apply_env_overrides(&mut self) {
        if let Some(key) = env_non_empty("OPENAI_API_KEY") {
            self.openai_api_key = Some(key);
        }
        if let Some(url) = env_non_empty("DATABASE_URL") {
            self.database_url = Some(url);
        }
        if let Some(endpoint) = env_non_empty("TRACING_ENDPOINT") {
            self.tracing_endpoint = Some(endpoint);
        }
        if let Some(dir) = env_non_empty("PROMPT_DIR") {
            self.prompt_dir = PathBuf::from(dir);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prompt_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "prompt_dir must not be empty".to_string(),
            ));
        }
        if self.tools.is_empty() {
            warn!("No tools configured; the pipeline will finish without executing any");
        }
        Ok(())
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Process-wide settings, loaded on first access
pub fn settings() -> Result<&'static Settings, ConfigError> {
    SETTINGS.get_or_try_init(|| Settings::load(None))
}

/// Install settings resolved elsewhere (e.g. from a `--config` flag)
///
/// Returns the settings that are in effect, which are the earlier ones if
/// another caller won the race.
pub fn install_settings(settings: Settings) -> &'static Settings {
    SETTINGS.get_or_init(|| settings)
}
