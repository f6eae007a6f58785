//! Integration tests for plain report rendering.

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;
use thes_model::{Category, CategoryResult, Entry};
use thes_report::{PriorityRule, ReportOptions, build_table, format, order_filter_columns};

fn entry(word: &str, found_in: &[&str]) -> Entry {
    Entry::new(
        word,
        found_in.iter().map(|name| (*name).to_string()).collect(),
    )
}

fn happy_results() -> Vec<CategoryResult> {
    vec![
        CategoryResult::new(
            Category::Synonyms,
            vec![entry("glad", &[]), entry("happy", &["Basic"])],
        ),
        CategoryResult::new(Category::Antonyms, vec![entry("sad", &[])]),
    ]
}

/// Makes padding and tabs visible so snapshots carry no trailing whitespace.
fn visible(output: &str) -> String {
    output
        .trim_end_matches('\n')
        .replace('\t', "|")
        .replace(' ', "·")
}

#[test]
fn end_to_end_table_layout() {
    let output = format(
        "happy",
        &happy_results(),
        &["Basic"],
        &Category::DEFAULT_ORDER,
        &ReportOptions::default(),
    );
    assert_eq!(
        output,
        "SYNONYMS\tBasic\nglad    \t     \nhappy   \t  X  \n\nANTONYMS\tBasic\nsad     \t     \n"
    );
}

#[test]
fn end_to_end_table_snapshot() {
    let output = format(
        "happy",
        &happy_results(),
        &["Basic", "AWL"],
        &Category::DEFAULT_ORDER,
        &ReportOptions::default(),
    );
    insta::assert_snapshot!(visible(&output), @r"
SYNONYMS|AWL|Basic
glad····|···|·····
happy···|···|··X··

ANTONYMS|AWL|Basic
sad·····|···|·····
");
}

#[test]
fn header_columns_follow_priority_order() {
    let results = vec![CategoryResult::new(
        Category::Synonyms,
        vec![entry("x", &["Mid"])],
    )];
    let output = format(
        "x",
        &results,
        &["Zeta", "AWL", "Mid"],
        &Category::DEFAULT_ORDER,
        &ReportOptions::default(),
    );
    let header = output.lines().next().expect("header row");
    assert_eq!(header, "SYNONYMS\tAWL\tMid\tZeta");
}

#[test]
fn empty_results_give_single_message() {
    let results = vec![
        CategoryResult::new(Category::Synonyms, Vec::new()),
        CategoryResult::new(Category::Antonyms, Vec::new()),
    ];
    let output = format(
        "zzz",
        &results,
        &["Basic"],
        &Category::DEFAULT_ORDER,
        &ReportOptions::default(),
    );
    assert_eq!(output, "No matches found for zzz.");
}

#[test]
fn only_requested_categories_are_rendered() {
    let output = format(
        "happy",
        &happy_results(),
        &["Basic"],
        &[Category::Antonyms],
        &ReportOptions::default(),
    );
    assert_eq!(output, "ANTONYMS\tBasic\nsad     \t     \n");

    let none = format(
        "happy",
        &happy_results()[1..],
        &["Basic"],
        &[Category::Synonyms],
        &ReportOptions::default(),
    );
    assert_eq!(none, "No matches found for happy.");
}

#[test]
fn long_words_widen_first_column() {
    let results = vec![CategoryResult::new(
        Category::Antonyms,
        vec![entry("disheartened", &["B"]), entry("sad", &[])],
    )];
    let table = build_table(
        &results,
        &["B".to_string()],
        &Category::DEFAULT_ORDER,
        &ReportOptions::default(),
    )
    .expect("table");
    assert_eq!(table.rows[0], vec!["ANTONYMS    ", "B"]);
    assert_eq!(table.rows[1], vec!["disheartened", "X"]);
    assert_eq!(table.rows[2], vec!["sad         ", " "]);
    assert!(table.rows[3].is_empty());
}

#[test]
fn custom_markers_are_used() {
    let options = ReportOptions::default().with_markers("*", "-");
    let output = format(
        "happy",
        &happy_results()[..1],
        &["Basic"],
        &Category::DEFAULT_ORDER,
        &options,
    );
    assert_eq!(output, "SYNONYMS\tBasic\nglad    \t  -  \nhappy   \t  *  \n");
}

#[test]
fn no_filters_still_lists_words() {
    let no_filters: [&str; 0] = [];
    let output = format(
        "happy",
        &happy_results()[1..],
        &no_filters,
        &Category::DEFAULT_ORDER,
        &ReportOptions::default(),
    );
    assert_eq!(output, "ANTONYMS\nsad     \n");
}

#[test]
fn order_filter_columns_places_rules_in_order() {
    let rules = vec![PriorityRule::new("Zeta", 0), PriorityRule::new("Mid", 1)];
    let ordered = order_filter_columns(&["Alpha", "Mid", "Zeta", "AWL"], &rules);
    assert_eq!(ordered, vec!["Zeta", "Mid", "AWL", "Alpha"]);
}

fn arb_words() -> impl Strategy<Value = BTreeMap<String, BTreeSet<&'static str>>> {
    prop::collection::btree_map(
        "[a-z]{1,10}",
        prop::collection::btree_set(prop::sample::select(vec!["AWL", "Basic", "Mid"]), 0..3),
        0..6,
    )
}

fn arb_results() -> impl Strategy<Value = Vec<CategoryResult>> {
    (arb_words(), arb_words()).prop_map(|(synonyms, antonyms)| {
        let to_entries = |map: BTreeMap<String, BTreeSet<&'static str>>| {
            map.into_iter()
                .map(|(word, found)| {
                    Entry::new(word, found.into_iter().map(str::to_string).collect())
                })
                .collect::<Vec<_>>()
        };
        vec![
            CategoryResult::new(Category::Synonyms, to_entries(synonyms)),
            CategoryResult::new(Category::Antonyms, to_entries(antonyms)),
        ]
    })
}

proptest! {
    #[test]
    fn format_is_deterministic(results in arb_results()) {
        let filters = ["Mid", "Basic", "AWL"];
        let options = ReportOptions::default();
        let first = format("w", &results, &filters, &Category::DEFAULT_ORDER, &options);
        let second = format("w", &results, &filters, &Category::DEFAULT_ORDER, &options);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn first_column_is_aligned(results in arb_results()) {
        let columns = vec!["AWL".to_string(), "Basic".to_string(), "Mid".to_string()];
        if let Some(table) = build_table(&results, &columns, &Category::DEFAULT_ORDER, &ReportOptions::default()) {
            let widths: BTreeSet<usize> = table
                .rows
                .iter()
                .filter_map(|row| row.first())
                .map(|cell| cell.chars().count())
                .collect();
            prop_assert_eq!(widths.len(), 1);
            for row in table.rows.iter().filter(|row| !row.is_empty()) {
                prop_assert_eq!(row.len(), columns.len() + 1);
            }
        } else {
            prop_assert!(results.iter().all(CategoryResult::is_empty));
        }
    }
}
