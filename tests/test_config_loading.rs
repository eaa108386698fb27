//! Configuration loading and validation tests
//!
//! Tests focus on observable outcomes of loading settings from TOML files.
//! Values that environment variables may override are not asserted here.

use lean_agent::agent::AgentPipeline;
use lean_agent::config::{ConfigError, Settings, ToolConfig};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "{content}").unwrap();
    temp_file
}

#[test]
fn test_config_loads_tools_table() {
    let temp_file = write_config(
        r#"
tracing_endpoint = "http://localhost:4318"

[tools]
waste_detector = "builtin"
"#,
    );

    let settings = Settings::load_from_file(temp_file.path()).unwrap();

    assert_eq!(settings.tools.len(), 1);
    assert_eq!(
        settings.tools.get("waste_detector"),
        Some(&ToolConfig::Simple("builtin".to_string()))
    );
}

#[test]
fn test_config_complex_tool_form() {
    let temp_file = write_config(
        r#"
[tools.waste_detector]
impl = "builtin"
config = { site = "plant-3" }
"#,
    );

    let settings = Settings::load_from_file(temp_file.path()).unwrap();

    match &settings.tools["waste_detector"] {
        ToolConfig::Complex {
            implementation,
            config,
        } => {
            assert_eq!(implementation, "builtin");
            assert_eq!(config["site"], "plant-3");
        }
        other => panic!("expected complex tool config, got {other:?}"),
    }
}

#[test]
fn test_config_without_tools_gets_waste_detector() {
    let temp_file = write_config("");

    let settings = Settings::load_from_file(temp_file.path()).unwrap();
    assert!(settings.tools.contains_key("waste_detector"));

    let pipeline = AgentPipeline::from_settings(&settings).unwrap();
    assert_eq!(pipeline.tools().list_tools(), vec!["waste_detector".to_string()]);
}

#[test]
fn test_config_unknown_builtin_fails_pipeline_construction() {
    let temp_file = write_config(
        r#"
[tools]
takt_calculator = "builtin"
"#,
    );

    let settings = Settings::load_from_file(temp_file.path()).unwrap();
    assert!(AgentPipeline::from_settings(&settings).is_err());
}

#[test]
fn test_config_missing_file() {
    let result = Settings::load_from_file(Path::new("/nonexistent/lean-agent.toml"));
    assert!(matches!(result, Err(ConfigError::FileRead(_))));
}

#[test]
fn test_config_invalid_toml() {
    let temp_file = write_config("prompt_dir = [unterminated");

    let result = Settings::load_from_file(temp_file.path());
    assert!(matches!(result, Err(ConfigError::TomlParse(_))));
}

#[test]
fn test_config_wrong_field_type() {
    let temp_file = write_config("openai_api_key = 42");

    let result = Settings::load_from_file(temp_file.path());
    assert!(matches!(result, Err(ConfigError::TomlParse(_))));
}

#[test]
fn test_explicit_path_takes_precedence() {
    let temp_file = write_config(
        r#"
[tools]
waste_detector = { impl = "builtin" }
"#,
    );

    let settings = Settings::load(Some(temp_file.path())).unwrap();
    assert_eq!(settings.tools["waste_detector"].implementation(), "builtin");
}

#[test]
fn test_default_settings_validate() {
    let settings = Settings::default();

    assert!(settings.validate().is_ok());
    assert_eq!(settings.prompt_dir, PathBuf::from("prompts"));
    assert!(settings.openai_api_key.is_none());
}
