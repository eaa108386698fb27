//! Planner → tool router → finalizer
//!
//! A fixed three-stage pass over a [`ConversationState`]. There is no
//! branching and no loop back to planning; each run executes the stages once
//! in order.

use crate::agent::prompts::PromptLibrary;
use crate::agent::state::{ConversationState, ToolCall, ToolRecord};
use crate::config::Settings;
use crate::error::AgentResult;
use crate::tools::builtin::WASTE_DETECTOR;
use crate::tools::ToolSystem;
use chrono::Utc;
use serde_json::{Map, Value};
use std::fmt;
use tracing::{debug, info};

/// Final response when the log holds no tool results
pub const NO_TOOLS_EXECUTED: &str = "No tools were executed.";

/// Pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Plan,
    Invoke,
    Finalize,
}

impl Stage {
    pub const START: Stage = Stage::Plan;

    /// Following stage, `None` after finalize
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Plan => Some(Stage::Invoke),
            Stage::Invoke => Some(Stage::Finalize),
            Stage::Finalize => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Stage::Plan => "planner",
            Stage::Invoke => "tool_router",
            Stage::Finalize => "finalizer",
        }
    }

    /// Prompt template consulted by the stage, if any
    fn prompt(self) -> Option<&'static str> {
        match self {
            Stage::Plan => Some("planner"),
            Stage::Invoke => None,
            Stage::Finalize => Some("finalizer"),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Queue the waste detector with the user's goal as its process description
pub fn plan(state: &mut ConversationState) {
    let mut arguments = Map::new();
    arguments.insert(
        "process_description".to_string(),
        Value::String(state.user_goal.clone()),
    );
    state
        .pending_tool_calls
        .push_back(ToolCall::new(WASTE_DETECTOR, arguments));
}

/// Drain the queue, executing every call whose tool is registered
///
/// Calls naming unknown tools are dropped without a history entry.
pub fn invoke(tools: &ToolSystem, state: &mut ConversationState) -> AgentResult<()> {
    let calls: Vec<ToolCall> = state.pending_tool_calls.drain(..).collect();

    for call in calls {
        if !tools.has_tool(&call.tool_name) {
            debug!(tool = %call.tool_name, "Skipping call to unregistered tool");
            continue;
        }

        let span = crate::tool_span!(tool = %call.tool_name, run_id = %state.run_id);
        let _guard = span.enter();

        let result = tools.execute_tool(&call.tool_name, &Value::Object(call.arguments))?;
        state.conversation_history.push(ToolRecord {
            tool: call.tool_name,
            result,
            executed_at: Utc::now(),
        });
    }

    Ok(())
}

/// Take the last tool result's summary as the final response
pub fn finalize(state: &mut ConversationState) {
    let response = state
        .last_record()
        .map(|record| record.summary().to_string())
        .unwrap_or_else(|| NO_TOOLS_EXECUTED.to_string());
    state.final_response = Some(response);
}

/// The three-stage agent pipeline
pub struct AgentPipeline {
    tools: ToolSystem,
    prompts: Option<PromptLibrary>,
}

impl AgentPipeline {
    pub fn new(tools: ToolSystem) -> Self {
        Self {
            tools,
            prompts: None,
        }
    }

    pub fn with_prompts(mut self, prompts: PromptLibrary) -> Self {
        debug!(prompt_dir = %prompts.prompt_dir().display(), "Prompt library attached");
        self.prompts = Some(prompts);
        self
    }

    /// Build the tool system and prompt library from settings
    pub fn from_settings(settings: &Settings) -> AgentResult<Self> {
        let mut tools = ToolSystem::new();
        tools.initialize(&settings.tools)?;

        Ok(Self::new(tools).with_prompts(PromptLibrary::new(&settings.prompt_dir)))
    }

    pub fn tools(&self) -> &ToolSystem {
        &self.tools
    }

    /// Shut down every registered tool
    pub fn shutdown(&mut self) -> AgentResult<()> {
        self.tools.shutdown()?;
        info!("Tool system shut down");
        Ok(())
    }

    /// Run all stages for a fresh state built from `user_goal`
    pub fn run(&self, user_goal: &str) -> AgentResult<ConversationState> {
        self.run_state(ConversationState::new(user_goal))
    }

    /// Run all stages over a caller-provided state
    pub fn run_state(&self, mut state: ConversationState) -> AgentResult<ConversationState> {
        let span = crate::run_span!(run_id = %state.run_id, mode = %state.mode);
        let _guard = span.enter();

        let mut stage = Some(Stage::START);
        while let Some(current) = stage {
            self.step(current, &mut state)?;
            stage = current.next();
        }

        info!(
            tool_calls = state.conversation_history.len(),
            "Pipeline run complete"
        );
        Ok(state)
    }

    /// Execute a single stage
    pub fn step(&self, stage: Stage, state: &mut ConversationState) -> AgentResult<()> {
        let span = crate::stage_span!(stage = %stage);
        let _guard = span.enter();

        self.consult_prompt(stage);

        match stage {
            Stage::Plan => plan(state),
            Stage::Invoke => invoke(&self.tools, state)?,
            Stage::Finalize => finalize(state),
        }

        debug!(
            pending = state.pending_tool_calls.len(),
            history = state.conversation_history.len(),
            "Stage complete"
        );
        Ok(())
    }

    fn consult_prompt(&self, stage: Stage) {
        let (Some(prompts), Some(name)) = (&self.prompts, stage.prompt()) else {
            return;
        };

        match prompts.load(name) {
            Ok(template) => debug!(prompt = name, bytes = template.len(), "Prompt template loaded"),
            Err(e) => debug!(prompt = name, error = %e, "Prompt template unavailable"),
        }
    }
}
