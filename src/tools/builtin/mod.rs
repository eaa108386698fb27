//! Builtin tools
//!
//! Each tool keeps its pure logic separate from the JSON plumbing of the [`Tool`](super::Tool) trait.

pub mod waste_detector;

pub use waste_detector::{
    WasteDetectorInput, WasteDetectorOutput, WasteDetectorTool, WasteInsight, WASTE_DETECTOR,
};
