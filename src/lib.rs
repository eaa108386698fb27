//! Lean Agent
//!
//! A rule-based Lean waste detector. Process narratives are scanned for
//! TIMWOODS trigger keywords and turned into structured insights with a
//! recommended countermeasure per category.
//!
//! # Overview
//!
//! - [`waste`]: category tables, matcher, insight builder, summary
//! - [`tools`]: JSON Schema validated tool system and the `waste_detector` tool
//! - [`agent`]: planner → tool router → finalizer pipeline
//! - [`config`], [`observability`], [`error`]: settings, logging, errors
//!
//! # Quick Start
//!
//! ```rust
//! use lean_agent::waste::{analyze, WasteCategory};
//!
//! let analysis = analyze("Operators walk to the warehouse and wait idle for parts.");
//! let categories: Vec<_> = analysis.insights.iter().map(|i| i.category).collect();
//!
//! assert!(categories.contains(&WasteCategory::Motion));
//! assert!(categories.contains(&WasteCategory::Waiting));
//! ```
//!
//! Running the same text through the pipeline:
//!
//! ```rust
//! use lean_agent::agent::AgentPipeline;
//! use lean_agent::config::Settings;
//!
//! let pipeline = AgentPipeline::from_settings(&Settings::default()).unwrap();
//! let state = pipeline.run("Every release needs manual rework.").unwrap();
//!
//! assert!(state.final_response.unwrap().starts_with("Detected potential wastes"));
//! ```

pub mod agent;
pub mod config;
pub mod error;
pub mod observability;
pub mod testing;
pub mod tools;
pub mod waste;

pub use agent::{AgentPipeline, ConversationState};
pub use config::{ConfigError, Settings, ToolConfig};
pub use error::{AgentError, AgentResult};
pub use tools::{Tool, ToolDescription, ToolError, ToolSystem};
pub use waste::{analyze, Insight, WasteCategory};
