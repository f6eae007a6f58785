//! Terminal rendering with box-drawn tables, one per category.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use thes_model::{Category, CategoryResult};

use crate::format::{no_matches_message, order_filter_columns, rendered_sections};
use crate::options::ReportOptions;

pub fn render_pretty<S: AsRef<str>>(
    word: &str,
    results: &[CategoryResult],
    filter_names: &[S],
    categories: &[Category],
    options: &ReportOptions,
) -> String {
    let sections = rendered_sections(results, categories);
    if sections.is_empty() {
        return no_matches_message(word);
    }
    let columns = order_filter_columns(filter_names, &options.priority);

    let mut rendered = Vec::with_capacity(sections.len());
    for section in sections {
        let mut table = Table::new();
        let mut header = vec![header_cell(section.category.label())];
        header.extend(columns.iter().map(|name| header_cell(name)));
        table.set_header(header);
        apply_table_style(&mut table);
        for index in 1..=columns.len() {
            if let Some(column) = table.column_mut(index) {
                column.set_cell_alignment(CellAlignment::Center);
            }
        }
        for entry in &section.entries {
            let mut row = vec![Cell::new(&entry.word)];
            for column in &columns {
                row.push(marker_cell(options, entry.is_in(column)));
            }
            table.add_row(row);
        }
        rendered.push(table.to_string());
    }
    rendered.join("\n")
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn marker_cell(options: &ReportOptions, present: bool) -> Cell {
    let cell = Cell::new(options.marker(present));
    if present {
        cell.fg(Color::Green).add_attribute(Attribute::Bold)
    } else {
        cell.fg(Color::DarkGrey)
    }
}
