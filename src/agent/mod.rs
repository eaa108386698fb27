//! Agent orchestration shell
//!
//! A fixed planner → tool router → finalizer pass that runs the waste
//! detector once per user goal.

pub mod pipeline;
pub mod prompts;
pub mod state;

pub use pipeline::{AgentPipeline, Stage, NO_TOOLS_EXECUTED};
pub use prompts::{PromptError, PromptLibrary};
pub use state::{AgentMode, ConversationState, ToolCall, ToolRecord};
