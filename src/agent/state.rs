//! Conversation state threaded through the pipeline stages

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Selected user mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentMode {
    #[default]
    Optimizer,
    Analyst,
}

impl fmt::Display for AgentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentMode::Optimizer => f.write_str("optimizer"),
            AgentMode::Analyst => f.write_str("analyst"),
        }
    }
}

impl FromStr for AgentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "optimizer" => Ok(AgentMode::Optimizer),
            "analyst" => Ok(AgentMode::Analyst),
            other => Err(format!("Unknown mode '{other}', expected optimizer or analyst")),
        }
    }
}

/// A tool invocation request produced by the planner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    pub tool_name: String,
    #[serde(default)]
    pub arguments: Map<String, Value>,
}

impl ToolCall {
    pub fn new(tool_name: impl Into<String>, arguments: Map<String, Value>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments,
        }
    }
}

/// One executed tool call in the conversation log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolRecord {
    pub tool: String,
    pub result: Value,
    pub executed_at: DateTime<Utc>,
}

impl ToolRecord {
    /// `summary` field of the result, empty when absent
    pub fn summary(&self) -> &str {
        self.result
            .get("summary")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}

/// State shared by the planner, tool router and finalizer for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationState {
    pub run_id: Uuid,
    pub user_goal: String,
    #[serde(default)]
    pub mode: AgentMode,
    #[serde(default)]
    pub pending_tool_calls: VecDeque<ToolCall>,
    #[serde(default)]
    pub conversation_history: Vec<ToolRecord>,
    #[serde(default)]
    pub final_response: Option<String>,
}

impl ConversationState {
    pub fn new(user_goal: impl Into<String>) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            user_goal: user_goal.into(),
            mode: AgentMode::default(),
            pending_tool_calls: VecDeque::new(),
            conversation_history: Vec::new(),
            final_response: None,
        }
    }

    pub fn with_mode(mut self, mode: AgentMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn last_record(&self) -> Option<&ToolRecord> {
        self.conversation_history.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_state_defaults() {
        let state = ConversationState::new("Reduce waiting");

        assert_eq!(state.user_goal, "Reduce waiting");
        assert_eq!(state.mode, AgentMode::Optimizer);
        assert!(state.pending_tool_calls.is_empty());
        assert!(state.conversation_history.is_empty());
        assert!(state.final_response.is_none());
    }

    #[test]
    fn test_state_deserializes_with_defaults() {
        let state: ConversationState = serde_json::from_value(json!({
            "run_id": Uuid::nil(),
            "user_goal": "goal"
        }))
        .unwrap();

        assert_eq!(state.mode, AgentMode::Optimizer);
        assert!(state.final_response.is_none());
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("Analyst".parse::<AgentMode>(), Ok(AgentMode::Analyst));
        assert_eq!(" optimizer ".parse::<AgentMode>(), Ok(AgentMode::Optimizer));
        assert!("critic".parse::<AgentMode>().is_err());
    }

    #[test]
    fn test_record_summary_missing_field() {
        let record = ToolRecord {
            tool: "waste_detector".to_string(),
            result: json!({"wastes": []}),
            executed_at: Utc::now(),
        };
        assert_eq!(record.summary(), "");
    }
}
