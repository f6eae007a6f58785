//! Plain-text report: tab-separated cells padded so the first column lines up.

use std::collections::BTreeSet;

use thes_model::{Category, CategoryResult, ReportTable, same_name};

use crate::options::{PriorityRule, ReportOptions};

/// Message emitted instead of a table when nothing survived classification.
pub fn no_matches_message(word: &str) -> String {
    format!("No matches found for {word}.")
}

/// Sorts filter names alphabetically, then places priority filters at their positions.
///
/// Rules claim slots in order and a claimed slot never moves. A rule whose
/// position is taken, or past the end, gets the nearest free slot after it,
/// or failing that the last free slot before it. A filter named by several
/// rules follows the first of them. Remaining filters fill the free slots in
/// alphabetical order.
pub fn order_filter_columns<S: AsRef<str>>(names: &[S], priority: &[PriorityRule]) -> Vec<String> {
    let mut rest: Vec<String> = names.iter().map(|name| name.as_ref().to_string()).collect();
    rest.sort();
    let total = rest.len();

    let mut slots: Vec<Option<String>> = vec![None; total];
    for rule in priority {
        let Some(index) = rest.iter().position(|name| same_name(name, &rule.name)) else {
            continue;
        };
        let wanted = rule.position.min(total.saturating_sub(1));
        let slot = (wanted..total)
            .find(|slot| slots[*slot].is_none())
            .or_else(|| (0..wanted).rev().find(|slot| slots[*slot].is_none()));
        if let Some(slot) = slot {
            slots[slot] = Some(rest.remove(index));
        }
    }

    let mut rest = rest.into_iter();
    slots
        .into_iter()
        .filter_map(|slot| slot.or_else(|| rest.next()))
        .collect()
}

/// Categories that will be rendered, in request order, without repeats or empties.
pub(crate) fn rendered_sections<'a>(
    results: &'a [CategoryResult],
    categories: &[Category],
) -> Vec<&'a CategoryResult> {
    let mut seen = BTreeSet::new();
    categories
        .iter()
        .filter(|category| seen.insert(**category))
        .filter_map(|category| results.iter().find(|result| result.category == *category))
        .filter(|result| !result.is_empty())
        .collect()
}

/// Builds the report rows, or `None` when no requested category has entries.
///
/// `filter_columns` must already be in display order (see [`order_filter_columns`]).
pub fn build_table(
    results: &[CategoryResult],
    filter_columns: &[String],
    categories: &[Category],
    options: &ReportOptions,
) -> Option<ReportTable> {
    let sections = rendered_sections(results, categories);
    if sections.is_empty() {
        return None;
    }

    let first_col_len = sections
        .iter()
        .flat_map(|section| std::iter::once(section.category.label()).chain(section.words()))
        .map(|text| text.chars().count())
        .max()
        .unwrap_or(0);

    let mut table = ReportTable::new();
    for section in sections {
        let mut header = Vec::with_capacity(filter_columns.len() + 1);
        header.push(pad_right(section.category.label(), first_col_len));
        header.extend(filter_columns.iter().cloned());
        table.push_row(header);

        for entry in &section.entries {
            let mut row = Vec::with_capacity(filter_columns.len() + 1);
            row.push(pad_right(&entry.word, first_col_len));
            for column in filter_columns {
                let marker = options.marker(entry.is_in(column));
                row.push(center(marker, column.chars().count()));
            }
            table.push_row(row);
        }
        table.push_separator();
    }
    Some(table)
}

/// Renders classified results for `word` as the plain report.
///
/// Output depends only on the arguments, so equal inputs give byte-identical text.
pub fn format<S: AsRef<str>>(
    word: &str,
    results: &[CategoryResult],
    filter_names: &[S],
    categories: &[Category],
    options: &ReportOptions,
) -> String {
    let columns = order_filter_columns(filter_names, &options.priority);
    match build_table(results, &columns, categories, options) {
        Some(table) => table.render(),
        None => no_matches_message(word),
    }
}

fn pad_right(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}

fn center(text: &str, width: usize) -> String {
    format!("{text:^width$}")
}
