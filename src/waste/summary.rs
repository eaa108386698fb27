//! Narrative summary for an analysis

use super::insights::Insight;

pub const WASTES_DETECTED_SUMMARY: &str = "Detected potential wastes across the process. \
Prioritise the listed improvement opportunities to achieve immediate impact.";

pub const NO_WASTES_SUMMARY: &str = "No obvious wastes detected using the lightweight heuristic. \
Consider collecting more data for deeper analysis.";

/// Pick the narrative; depends only on whether anything was detected
pub fn summarize(insights: &[Insight]) -> &'static str {
    if insights.is_empty() {
        NO_WASTES_SUMMARY
    } else {
        WASTES_DETECTED_SUMMARY
    }
}
