//! Tool system
//!
//! Tools describe their parameters as JSON Schema; the [`ToolSystem`] validates
//! every parameter object against that schema before a tool sees it.

use crate::config::ToolConfig;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

pub mod builtin;

/// Interface every tool implements
pub trait Tool: Send + Sync {
    /// Name, description and JSON Schema of the accepted parameters
    fn describe(&self) -> ToolDescription;

    /// Receives the tool's `config` table, called once before first use
    fn initialize(&mut self, config: Option<&Value>) -> Result<(), ToolError>;

    /// Run the tool. Parameters have already been validated against `describe().parameters`
    fn execute(&self, parameters: &Value) -> Result<Value, ToolError>;

    /// Release resources
    fn shutdown(&mut self) -> Result<(), ToolError> {
        Ok(())
    }
}

/// Tool description
#[derive(Debug, Clone)]
pub struct ToolDescription {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// Registry of initialized tools keyed by name
pub struct ToolSystem {
    tools: HashMap<String, Box<dyn Tool>>,
}

impl ToolSystem {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Initialize tool system from the `[tools]` configuration table
    pub fn initialize(
        &mut self,
        tool_configs: &HashMap<String, ToolConfig>,
    ) -> Result<(), ToolError> {
        for (tool_name, tool_config) in tool_configs {
            let mut tool = self.create_tool(tool_name, tool_config)?;

            let config = match tool_config {
                ToolConfig::Simple(_) => None,
                ToolConfig::Complex { config, .. } => Some(
                    serde_json::to_value(config)
                        .map_err(|e| ToolError::InitializationError(e.to_string()))?,
                ),
            };

            tool.initialize(config.as_ref())?;
            debug!(tool = %tool_name, "Tool initialized");

            self.tools.insert(tool_name.clone(), tool);
        }

        Ok(())
    }

    /// Add an already constructed tool under its described name
    pub fn register(&mut self, mut tool: Box<dyn Tool>) -> Result<(), ToolError> {
        tool.initialize(None)?;
        let name = tool.describe().name;
        self.tools.insert(name, tool);
        Ok(())
    }

    fn create_tool(
        &self,
        tool_name: &str,
        config: &ToolConfig,
    ) -> Result<Box<dyn Tool>, ToolError> {
        match config.implementation() {
            "builtin" => self.create_builtin_tool(tool_name),
            other => Err(ToolError::UnknownImplementation(other.to_string())),
        }
    }

    fn create_builtin_tool(&self, tool_name: &str) -> Result<Box<dyn Tool>, ToolError> {
        match tool_name {
            builtin::WASTE_DETECTOR => Ok(Box::new(builtin::WasteDetectorTool::new())),
            _ => Err(ToolError::UnknownTool(tool_name.to_string())),
        }
    }

    pub fn has_tool(&self, tool_name: &str) -> bool {
        self.tools.contains_key(tool_name)
    }

    pub fn describe_tool(&self, tool_name: &str) -> Option<ToolDescription> {
        self.tools.get(tool_name).map(|tool| tool.describe())
    }

    /// Execute tool with validated parameters
    pub fn execute_tool(&self, tool_name: &str, parameters: &Value) -> Result<Value, ToolError> {
        let tool = self
            .tools
            .get(tool_name)
            .ok_or_else(|| ToolError::UnknownTool(tool_name.to_string()))?;

        validate_parameters(&tool.describe(), parameters)?;

        tool.execute(parameters)
    }

    /// Tool names, sorted
    pub fn list_tools(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn shutdown(&mut self) -> Result<(), ToolError> {
        for tool in self.tools.values_mut() {
            tool.shutdown()?;
        }
        Ok(())
    }
}

impl Default for ToolSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate parameters against a tool's JSON Schema
pub fn validate_parameters(
    description: &ToolDescription,
    parameters: &Value,
) -> Result<(), ToolError> {
    let validator = jsonschema::validator_for(&description.parameters)
        .map_err(|e| ToolError::SchemaError(format!("Schema compilation error: {e}")))?;

    validator.validate(parameters).map_err(|errors| {
        let error_messages: Vec<String> = errors
            .map(|e| format!("At '{}': {}", e.instance_path, e))
            .collect();
        ToolError::ValidationError(error_messages.join("; "))
    })
}

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
    #[error("Unknown tool implementation: {0}")]
    UnknownImplementation(String),
    #[error("Tool initialization failed: {0}")]
    InitializationError(String),
    #[error("Parameter validation failed: {0}")]
    ValidationError(String),
    #[error("Schema error: {0}")]
    SchemaError(String),
    #[error("Tool execution failed: {0}")]
    ExecutionError(String),
    #[error("Tool shutdown failed: {0}")]
    ShutdownError(String),
}
