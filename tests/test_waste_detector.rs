//! Behaviour of the waste detection chain
//!
//! Scenario tests for known narratives plus property tests for the
//! invariants that hold for every input.

use lean_agent::tools::builtin::{WasteDetectorInput, WasteDetectorTool};
use lean_agent::waste::{
    analyze, build_insights, match_text, WasteCategory, NO_WASTES_SUMMARY,
    WASTES_DETECTED_SUMMARY,
};
use proptest::prelude::*;
use std::collections::{BTreeSet, HashSet};

fn categories_of(text: &str) -> Vec<WasteCategory> {
    analyze(text).insights.iter().map(|i| i.category).collect()
}

#[test]
fn test_smooth_pipeline_has_no_waste() {
    let analysis = analyze("The automated pipeline runs smoothly with no bottlenecks.");

    assert!(analysis.insights.is_empty());
    assert!(analysis.summary.to_lowercase().contains("no obvious wastes"));
}

#[test]
fn test_waiting_motion_and_rework() {
    let analysis = analyze(
        "Team members wait for approvals causing delay and extra motion when walking to the \
         manager, leading to rework on manual forms.",
    );
    let categories: HashSet<_> = analysis.insights.iter().map(|i| i.category).collect();

    assert!(categories.contains(&WasteCategory::Waiting));
    assert!(categories.contains(&WasteCategory::Motion));
    assert!(categories.contains(&WasteCategory::Overprocessing));
    assert_eq!(analysis.summary, WASTES_DETECTED_SUMMARY);
    assert!(!analysis.summary.to_lowercase().contains("quick win"));
}

#[test]
fn test_empty_input() {
    let analysis = analyze("");

    assert!(analysis.insights.is_empty());
    assert_eq!(analysis.summary, NO_WASTES_SUMMARY);
}

#[test]
fn test_single_defect_keyword() {
    let analysis = analyze("defect");

    assert_eq!(analysis.insights.len(), 1);
    assert_eq!(analysis.insights[0].category, WasteCategory::Defects);
    assert_eq!(
        analysis.insights[0].supporting_evidence,
        "Keywords identified: defect."
    );
}

#[test]
fn test_bare_wait_does_not_trigger_waiting() {
    // Only "waiting", "delay", "idle" and "queue" are waiting triggers
    assert!(!categories_of("we wait").contains(&WasteCategory::Waiting));
    assert!(categories_of("we are waiting").contains(&WasteCategory::Waiting));
}

#[test]
fn test_demo_approval_process() {
    let categories = categories_of(
        "Our team has a manual approval process where team members wait for managers to review \
         documents, causing delays and requiring people to walk back and forth between desks.",
    );

    assert_eq!(
        categories,
        vec![
            WasteCategory::Motion,
            WasteCategory::Waiting,
            WasteCategory::Overprocessing,
        ]
    );
}

#[test]
fn test_all_categories_detected_in_table_order() {
    let text = "handoff backlog travel idle excess duplicate scrap talent";
    assert_eq!(categories_of(text), WasteCategory::ALL.to_vec());
}

#[test]
fn test_tool_output_matches_core_analysis() {
    let text = "Inventory sits in the warehouse while staff travel between sites";
    let output = WasteDetectorTool::new().analyze(&WasteDetectorInput::new(text));
    let analysis = analyze(text);

    assert_eq!(output.wastes, analysis.insights);
    assert_eq!(output.summary, analysis.summary);
}

fn all_keywords() -> Vec<&'static str> {
    WasteCategory::ALL
        .iter()
        .flat_map(|category| category.keywords().iter().copied())
        .collect()
}

/// Narratives mixing real trigger keywords (in varied case) with filler
fn narrative() -> impl Strategy<Value = String> {
    let keyword = prop::sample::select(all_keywords()).prop_flat_map(|kw| {
        prop_oneof![
            Just(kw.to_string()),
            Just(kw.to_uppercase()),
            Just(format!("{kw}s")),
        ]
    });
    let filler = "[a-zA-Z]{0,10}";

    prop::collection::vec(prop_oneof![keyword, filler.prop_map(String::from)], 0..10)
        .prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn category_present_iff_keyword_substring(text in narrative()) {
        let lowered = text.to_lowercase();
        let detected: HashSet<_> = categories_of(&text).into_iter().collect();

        for category in WasteCategory::ALL {
            let expected = category.keywords().iter().any(|kw| lowered.contains(kw));
            prop_assert_eq!(detected.contains(&category), expected, "category {} in {:?}", category, text);
        }
    }

    #[test]
    fn categories_are_unique(text in narrative()) {
        let categories = categories_of(&text);
        let unique: HashSet<_> = categories.iter().collect();
        prop_assert_eq!(unique.len(), categories.len());
    }

    #[test]
    fn evidence_is_sorted_and_distinct(text in narrative()) {
        for insight in analyze(&text).insights {
            let listed = insight
                .supporting_evidence
                .strip_prefix("Keywords identified: ")
                .and_then(|rest| rest.strip_suffix('.'))
                .expect("evidence format");
            let keywords: Vec<&str> = listed.split(", ").collect();

            let mut sorted = keywords.clone();
            sorted.sort();
            sorted.dedup();
            prop_assert_eq!(&keywords, &sorted);

            let known: BTreeSet<&str> = insight.category.keywords().iter().copied().collect();
            for keyword in &keywords {
                prop_assert!(known.contains(keyword), "{} not a {} keyword", keyword, insight.category);
            }
        }
    }

    #[test]
    fn summary_depends_only_on_emptiness(text in ".*") {
        let analysis = analyze(&text);
        let expected = if analysis.insights.is_empty() {
            NO_WASTES_SUMMARY
        } else {
            WASTES_DETECTED_SUMMARY
        };
        prop_assert_eq!(analysis.summary, expected);
    }

    #[test]
    fn matching_is_idempotent(text in ".*") {
        prop_assert_eq!(match_text(&text), match_text(&text));
        prop_assert_eq!(
            build_insights(&match_text(&text)),
            build_insights(&match_text(&text))
        );
    }
}
