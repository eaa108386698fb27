//! Keyword matcher
//!
//! Pure substring search over the lowercased input. No stemming, no tokenisation.

use super::categories::WasteCategory;

/// Keywords found per category for one input, in category scan order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    matches: Vec<(WasteCategory, Vec<&'static str>)>,
}

impl MatchResult {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Matched keywords for `category`, if it matched at all
    pub fn get(&self, category: WasteCategory) -> Option<&[&'static str]> {
        self.matches
            .iter()
            .find(|(entry, _)| *entry == category)
            .map(|(_, keywords)| keywords.as_slice())
    }

    /// Matched categories in discovery order
    pub fn categories(&self) -> impl Iterator<Item = WasteCategory> + '_ {
        self.matches.iter().map(|(category, _)| *category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (WasteCategory, &[&'static str])> + '_ {
        self.matches
            .iter()
            .map(|(category, keywords)| (*category, keywords.as_slice()))
    }
}

/// Scan `text` for every category's trigger keywords
pub fn match_text(text: &str) -> MatchResult {
    let normalized = text.to_lowercase();

    let matches = WasteCategory::ALL
        .into_iter()
        .filter_map(|category| {
            let found: Vec<&'static str> = category
                .keywords()
                .iter()
                .copied()
                .filter(|keyword| normalized.contains(keyword))
                .collect();

            (!found.is_empty()).then_some((category, found))
        })
        .collect();

    MatchResult { matches }
}
