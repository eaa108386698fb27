//! Insight builder
//!
//! Turns a [`MatchResult`] into one structured finding per matched category.

use super::categories::WasteCategory;
use super::matcher::MatchResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Structured description of a detected waste
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    /// TIMWOODS waste category
    pub category: WasteCategory,
    /// Keywords that triggered the category
    pub supporting_evidence: String,
    /// Suggested quick-win countermeasure
    pub recommended_action: String,
}

/// Build insights in category discovery order
pub fn build_insights(matches: &MatchResult) -> Vec<Insight> {
    matches
        .iter()
        .map(|(category, keywords)| Insight {
            category,
            supporting_evidence: format_evidence(keywords),
            recommended_action: category.recommended_action().to_string(),
        })
        .collect()
}

/// `Keywords identified: a, b.` with keywords deduplicated and sorted
pub fn format_evidence(keywords: &[&str]) -> String {
    let distinct: BTreeSet<&str> = keywords.iter().copied().collect();
    let snippet = distinct.into_iter().collect::<Vec<_>>().join(", ");
    format!("Keywords identified: {snippet}.")
}
