//! TIMWOODS category table
//!
//! Static keyword and action tables for the eight Lean waste categories.
//! Declaration order of [`WasteCategory::ALL`] is the scan order used by the matcher.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Action suggested when a category has no entry in the action table
pub const FALLBACK_ACTION: &str = "Run a rapid Kaizen event to identify the best countermeasure.";

/// One of the eight TIMWOODS waste categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WasteCategory {
    Transportation,
    Inventory,
    Motion,
    Waiting,
    Overproduction,
    Overprocessing,
    Defects,
    Skills,
}

impl WasteCategory {
    /// All categories in scan order
    pub const ALL: [WasteCategory; 8] = [
        WasteCategory::Transportation,
        WasteCategory::Inventory,
        WasteCategory::Motion,
        WasteCategory::Waiting,
        WasteCategory::Overproduction,
        WasteCategory::Overprocessing,
        WasteCategory::Defects,
        WasteCategory::Skills,
    ];

    /// Wire name of the category
    pub fn as_str(self) -> &'static str {
        match self {
            WasteCategory::Transportation => "transportation",
            WasteCategory::Inventory => "inventory",
            WasteCategory::Motion => "motion",
            WasteCategory::Waiting => "waiting",
            WasteCategory::Overproduction => "overproduction",
            WasteCategory::Overprocessing => "overprocessing",
            WasteCategory::Defects => "defects",
            WasteCategory::Skills => "skills",
        }
    }

    /// Display name with a leading capital, used in reports
    pub fn title(self) -> &'static str {
        match self {
            WasteCategory::Transportation => "Transportation",
            WasteCategory::Inventory => "Inventory",
            WasteCategory::Motion => "Motion",
            WasteCategory::Waiting => "Waiting",
            WasteCategory::Overproduction => "Overproduction",
            WasteCategory::Overprocessing => "Overprocessing",
            WasteCategory::Defects => "Defects",
            WasteCategory::Skills => "Skills",
        }
    }

    /// Trigger keywords, all lowercase
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            WasteCategory::Transportation => &["transport", "move", "shipment", "handoff"],
            WasteCategory::Inventory => &["inventory", "stock", "warehouse", "backlog"],
            WasteCategory::Motion => &["motion", "walk", "travel", "reach"],
            WasteCategory::Waiting => &["waiting", "delay", "idle", "queue"],
            WasteCategory::Overproduction => &["overproduce", "excess", "too many"],
            WasteCategory::Overprocessing => &["rework", "duplicate", "overprocess", "manual"],
            WasteCategory::Defects => &["defect", "error", "scrap", "bug"],
            WasteCategory::Skills => &["skill", "underutilized", "talent", "expertise"],
        }
    }

    /// Recommended countermeasure from [`ACTIONS`]
    pub fn recommended_action(self) -> &'static str {
        lookup_action(ACTIONS, self)
    }
}

impl fmt::Display for WasteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WasteCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WasteCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown waste category: {s}"))
    }
}

/// Quick-win countermeasure per category
pub const ACTIONS: &[(WasteCategory, &str)] = &[
    (
        WasteCategory::Transportation,
        "Streamline handoffs or co-locate teams to reduce movement.",
    ),
    (
        WasteCategory::Inventory,
        "Right-size batch sizes and introduce pull signals to cut inventory.",
    ),
    (
        WasteCategory::Motion,
        "Rearrange workspace to minimise unnecessary motion.",
    ),
    (
        WasteCategory::Waiting,
        "Balance workloads or add cross-training to shrink wait times.",
    ),
    (
        WasteCategory::Overproduction,
        "Adopt pull-based scheduling to match demand.",
    ),
    (
        WasteCategory::Overprocessing,
        "Standardise work and remove redundant steps.",
    ),
    (
        WasteCategory::Defects,
        "Implement root-cause analysis and mistake-proofing.",
    ),
    (
        WasteCategory::Skills,
        "Provide upskilling or redesign roles to leverage talent.",
    ),
];

/// Look up a category's action in `table`, falling back to [`FALLBACK_ACTION`]
pub fn lookup_action(
    table: &[(WasteCategory, &'static str)],
    category: WasteCategory,
) -> &'static str {
    table
        .iter()
        .find(|(entry, _)| *entry == category)
        .map(|(_, action)| *action)
        .unwrap_or(FALLBACK_ACTION)
}
