//! Mock tool implementation for testing

use crate::tools::{Tool, ToolDescription, ToolError};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// Tool that records its parameters and answers with a fixed result
#[derive(Debug, Clone)]
pub struct MockTool {
    pub name: String,
    pub response: Value,
    pub calls: Arc<Mutex<Vec<Value>>>,
    pub should_fail: bool,
}

impl MockTool {
    pub fn new(name: impl Into<String>, response: Value) -> Self {
        Self {
            name: name.into(),
            response,
            calls: Arc::new(Mutex::new(Vec::new())),
            should_fail: false,
        }
    }

    /// Mock that answers `{"summary": summary}`
    pub fn with_summary(name: impl Into<String>, summary: &str) -> Self {
        Self::new(name, json!({ "summary": summary }))
    }

    pub fn with_failure(name: impl Into<String>) -> Self {
        Self {
            should_fail: true,
            ..Self::new(name, Value::Null)
        }
    }

    /// Handle to the recorded calls, usable after the mock is boxed
    pub fn calls_handle(&self) -> Arc<Mutex<Vec<Value>>> {
        Arc::clone(&self.calls)
    }

    pub fn recorded_calls(&self) -> Vec<Value> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }
}

impl Tool for MockTool {
    fn describe(&self) -> ToolDescription {
        ToolDescription {
            name: self.name.clone(),
            description: "Mock tool for testing".to_string(),
            parameters: json!({ "type": "object" }),
        }
    }

    fn initialize(&mut self, _config: Option<&Value>) -> Result<(), ToolError> {
        Ok(())
    }

    fn execute(&self, parameters: &Value) -> Result<Value, ToolError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(parameters.clone());
        }

        if self.should_fail {
            return Err(ToolError::ExecutionError(format!(
                "{} configured to fail",
                self.name
            )));
        }

        Ok(self.response.clone())
    }
}
