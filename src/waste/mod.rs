//! Rule-based Lean waste detection
//!
//! Matcher → insight builder → summary generator over the static TIMWOODS table.

pub mod categories;
pub mod insights;
pub mod matcher;
pub mod summary;

pub use categories::{WasteCategory, FALLBACK_ACTION};
pub use insights::{build_insights, Insight};
pub use matcher::{match_text, MatchResult};
pub use summary::{summarize, NO_WASTES_SUMMARY, WASTES_DETECTED_SUMMARY};

/// Insights plus narrative for one description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub insights: Vec<Insight>,
    pub summary: &'static str,
}

/// Run the full detection chain over `text`
pub fn analyze(text: &str) -> Analysis {
    let matches = match_text(text);
    let insights = build_insights(&matches);
    let summary = summarize(&insights);

    Analysis { insights, summary }
}
