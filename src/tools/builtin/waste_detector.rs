//! Lean waste detector tool
//!
//! Wraps the TIMWOODS keyword heuristic behind the [`Tool`] interface.

use crate::tools::{Tool, ToolDescription, ToolError};
use crate::waste::{self, Insight};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

pub const WASTE_DETECTOR: &str = "waste_detector";

/// Wire name for a single detected waste
pub type WasteInsight = Insight;

/// Input schema for the waste detector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WasteDetectorInput {
    /// Narrative of the process to analyse
    pub process_description: String,
    /// Optional key metrics such as cycle time or defect rate
    #[serde(default)]
    pub metrics: Option<HashMap<String, f64>>,
}

impl WasteDetectorInput {
    pub fn new(process_description: impl Into<String>) -> Self {
        Self {
            process_description: process_description.into(),
            metrics: None,
        }
    }
}

/// Output schema for the waste detector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WasteDetectorOutput {
    /// Detected wastes in category order
    #[serde(default)]
    pub wastes: Vec<WasteInsight>,
    /// Narrative summary of quick-win opportunities
    pub summary: String,
}

/// Rule-based Lean waste detector
#[derive(Debug, Default)]
pub struct WasteDetectorTool;

impl WasteDetectorTool {
    pub fn new() -> Self {
        Self
    }

    /// JSON Schema derived from [`WasteDetectorInput`]
    fn input_schema() -> Value {
        serde_json::to_value(schemars::schema_for!(WasteDetectorInput)).unwrap_or_default()
    }

    /// Typed entry point, bypasses JSON validation
    pub fn analyze(&self, input: &WasteDetectorInput) -> WasteDetectorOutput {
        if let Some(metrics) = &input.metrics {
            // Accepted for forward compatibility, not used by the heuristic
            debug!(metric_count = metrics.len(), "Ignoring process metrics");
        }

        let analysis = waste::analyze(&input.process_description);
        debug!(
            detected = analysis.insights.len(),
            "Waste detection complete"
        );

        WasteDetectorOutput {
            wastes: analysis.insights,
            summary: analysis.summary.to_string(),
        }
    }
}

impl Tool for WasteDetectorTool {
    fn describe(&self) -> ToolDescription {
        ToolDescription {
            name: WASTE_DETECTOR.to_string(),
            description: "Identify Lean wastes from process narratives using TIMWOODS keywords."
                .to_string(),
            parameters: Self::input_schema(),
        }
    }

    fn initialize(&mut self, config: Option<&Value>) -> Result<(), ToolError> {
        match config {
            Some(value) if !value.is_object() => Err(ToolError::InitializationError(format!(
                "{WASTE_DETECTOR} config must be a table, got {value}"
            ))),
            _ => Ok(()),
        }
    }

    fn execute(&self, parameters: &Value) -> Result<Value, ToolError> {
        let input: WasteDetectorInput = serde_json::from_value(parameters.clone())
            .map_err(|e| ToolError::ValidationError(e.to_string()))?;

        let output = self.analyze(&input);

        serde_json::to_value(output).map_err(|e| ToolError::ExecutionError(e.to_string()))
    }
}
