//! Membership classification of aggregated words against the active filters.

use std::collections::BTreeSet;

use thes_model::Entry;

use crate::config::Configuration;

/// Classifies `words` in ascending order, dropping those that fail the policy.
pub fn classify(words: &BTreeSet<String>, config: &Configuration) -> Vec<Entry> {
    words
        .iter()
        .filter_map(|word| classify_word(word, config))
        .collect()
}

/// Returns the entry for `word`, or `None` if the policy excludes it.
///
/// The required-list check runs first and stops at the first required filter
/// that is missing or does not contain the word. Only surviving words get a
/// `found_in` set, which lists every active filter containing the word. The
/// any-match check runs last.
pub fn classify_word(word: &str, config: &Configuration) -> Option<Entry> {
    if let Some(required) = config.required() {
        for name in required {
            match config.filters().get_ignore_case(name) {
                Some(filter) if filter.contains(word) => {}
                _ => return None,
            }
        }
    }

    let found_in: BTreeSet<String> = config
        .filters()
        .iter()
        .filter(|filter| filter.contains(word))
        .map(|filter| filter.name().to_string())
        .collect();

    if config.must_match_any() && found_in.is_empty() {
        return None;
    }
    Some(Entry::new(word, found_in))
}

#[cfg(test)]
mod tests {
    use super::*;
    use thes_model::FilterSet;

    fn words(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|item| (*item).to_string()).collect()
    }

    fn names(entry: &Entry) -> Vec<&str> {
        entry.found_in.iter().map(String::as_str).collect()
    }

    fn two_filters() -> FilterSet {
        FilterSet::from_map([("A", vec!["x"]), ("B", vec!["y"])]).unwrap()
    }

    #[test]
    fn required_list_fails_closed() {
        let config = Configuration::new(two_filters()).with_required(["A"]);
        let entries = classify(&words(&["x", "y"]), &config);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word, "x");
        assert_eq!(names(&entries[0]), vec!["A"]);
    }

    #[test]
    fn every_required_filter_must_match() {
        let filters = FilterSet::from_map([("A", vec!["x", "y"]), ("B", vec!["y"])]).unwrap();
        let config = Configuration::new(filters).with_required(["a", "b"]);
        let entries = classify(&words(&["x", "y"]), &config);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word, "y");
        assert_eq!(names(&entries[0]), vec!["A", "B"]);
    }

    #[test]
    fn surviving_words_keep_all_memberships() {
        let filters = FilterSet::from_map([("A", vec!["x"]), ("B", vec!["x"])]).unwrap();
        let config = Configuration::new(filters).with_required(["A"]);
        let entries = classify(&words(&["x"]), &config);
        assert_eq!(names(&entries[0]), vec!["A", "B"]);
    }

    #[test]
    fn unknown_required_filter_drops_everything() {
        let config = Configuration::new(two_filters()).with_required(["Missing"]);
        assert!(classify(&words(&["x", "y", "z"]), &config).is_empty());
    }

    #[test]
    fn any_match_drops_unlisted_words() {
        let filters = FilterSet::from_map([("A", vec!["x"])]).unwrap();
        let config = Configuration::new(filters).with_must_match_any(true);
        let entries = classify(&words(&["x", "z"]), &config);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word, "x");
    }

    #[test]
    fn no_requirement_keeps_everything() {
        let config = Configuration::new(two_filters());
        let entries = classify(&words(&["x", "y", "z"]), &config);
        let kept: Vec<&str> = entries.iter().map(|entry| entry.word.as_str()).collect();
        assert_eq!(kept, vec!["x", "y", "z"]);
        assert!(entries[2].found_in.is_empty());
    }

    #[test]
    fn membership_ignores_case() {
        let filters = FilterSet::from_map([("Basic", vec!["Happy"])]).unwrap();
        let config = Configuration::new(filters).with_required(["BASIC"]);
        let entries = classify(&words(&["HAPPY"]), &config);
        assert_eq!(entries[0].word, "HAPPY");
        assert_eq!(names(&entries[0]), vec!["Basic"]);
    }

    #[test]
    fn required_names_fold_non_ascii_case() {
        let filters = FilterSet::from_map([("Émotion", vec!["glad"])]).unwrap();
        let config = Configuration::new(filters).with_required(["Émotion"]);
        assert!(config.unknown_required().is_empty());
        let entries = classify(&words(&["glad", "sad"]), &config);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].word, "glad");
        assert_eq!(names(&entries[0]), vec!["Émotion"]);
    }
}
