//! Tests for thes-model types.

use std::collections::BTreeSet;

use thes_model::{
    Category, CategoryResult, CategorySets, Entry, FilterSet, LookupError, ProviderError,
};

#[test]
fn category_result_serializes() {
    let result = CategoryResult::new(
        Category::Synonyms,
        vec![Entry::new("glad", BTreeSet::from(["Basic".to_string()]))],
    );
    let json = serde_json::to_string(&result).expect("serialize result");
    assert!(json.contains("\"category\":\"synonyms\""));
    let round: CategoryResult = serde_json::from_str(&json).expect("deserialize result");
    assert_eq!(round, result);
}

#[test]
fn category_sets_merge_is_idempotent() {
    let sets = CategorySets::new()
        .with(Category::Synonyms, ["happy", "glad"])
        .with(Category::Antonyms, ["sad"]);
    let mut once = CategorySets::new();
    once.merge(sets.clone());
    let mut twice = once.clone();
    twice.merge(sets);
    assert_eq!(once, twice);
}

#[test]
fn filter_set_is_sorted_by_name() {
    let set = FilterSet::from_map([
        ("Zeta", vec!["a"]),
        ("AWL", vec!["b"]),
        ("Mid", vec!["c"]),
    ])
    .expect("filters");
    assert_eq!(set.names(), vec!["AWL", "Mid", "Zeta"]);
    assert!(set.get_ignore_case("awl").is_some());
    assert!(set.get_ignore_case("none").is_none());
}

#[test]
fn provider_error_names_provider_and_word() {
    let error = ProviderError::new(
        "wordnet",
        "happy",
        thes_model::ProviderErrorKind::Unavailable {
            message: "offline".to_string(),
        },
    );
    let lookup: LookupError = error.into();
    assert_eq!(
        lookup.to_string(),
        "provider wordnet failed for \"happy\": unavailable: offline"
    );
}
