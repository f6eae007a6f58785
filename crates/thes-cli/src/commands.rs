use std::io;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use tracing::{info, info_span, warn};

use thes_core::{Aggregator, Provider, Thesaurus, ThesaurusOptions};
use thes_ingest::{
    DEFAULT_FILTER_DIR, ProviderKind, ProviderSpec, Settings, filter_dir, load_filter_dir,
};
use thes_model::{Category, FilterSet};
use thes_report::order_filter_columns;

use crate::cli::{LookupArgs, PolicyArgs, SourceArgs, StyleArg};
use crate::repl::Repl;

/// Builds the engine from the settings file, flags and policy options.
///
/// Also returns the options the engine started with.
pub fn build_thesaurus(
    sources: &SourceArgs,
    policy: &PolicyArgs,
) -> Result<(Thesaurus, ThesaurusOptions)> {
    let span = info_span!("load");
    let _guard = span.enter();

    let settings = Settings::load_or_default(sources.config.as_deref()).context("load settings")?;
    let report = settings.report_options().context("read output settings")?;
    let filters = load_filters(sources, &settings)?;
    let providers = load_providers(sources, &settings)?;
    if providers.is_empty() {
        warn!("no providers configured; every lookup will report no matches");
    }
    info!(
        filters = filters.len(),
        providers = providers.len(),
        "thesaurus ready"
    );

    let options = policy_options(policy, &settings);
    let thesaurus = Thesaurus::new(Aggregator::new(providers), filters, &options, report);
    Ok((thesaurus, options))
}

/// Policy from flags; the active subset falls back to the settings file.
pub fn policy_options(policy: &PolicyArgs, settings: &Settings) -> ThesaurusOptions {
    let mut options = ThesaurusOptions::new().with_must_match_any(policy.require_any);
    if !policy.require.is_empty() {
        options = options.with_required(policy.require.iter().cloned());
    }
    if !policy.filters.is_empty() {
        options = options.with_active_filter_subset(policy.filters.iter().cloned());
    } else if let Some(active) = &settings.filters.active {
        options = options.with_active_filter_subset(active.iter().cloned());
    }
    options
}

fn load_filters(sources: &SourceArgs, settings: &Settings) -> Result<FilterSet> {
    let configured = settings.filter_dir();
    let dir = filter_dir(sources.filter_dir.as_deref(), configured.as_deref());
    let is_default = dir == Path::new(DEFAULT_FILTER_DIR);
    if is_default && !dir.is_dir() {
        warn!(dir = %dir.display(), "filter directory not found; no word lists loaded");
        return Ok(FilterSet::empty());
    }
    let filters = load_filter_dir(&dir)
        .with_context(|| format!("load filters from {}", dir.display()))?;
    info!(dir = %dir.display(), filters = filters.len(), "loaded filters");
    Ok(filters)
}

fn load_providers(sources: &SourceArgs, settings: &Settings) -> Result<Vec<Arc<dyn Provider>>> {
    let mut providers = settings.build_providers().context("load providers")?;
    let flagged = [
        (ProviderKind::Json, &sources.json_providers),
        (ProviderKind::Csv, &sources.csv_providers),
        (ProviderKind::Wiktionary, &sources.wiktionary_providers),
    ];
    for (kind, paths) in flagged {
        for path in paths {
            let provider = ProviderSpec::new(kind, path.clone())
                .build(None)
                .context("load provider")?;
            providers.push(provider);
        }
    }
    Ok(providers)
}

/// Parses `--category` values; empty means the configured order.
pub fn parse_categories(names: &[String]) -> Result<Option<Vec<Category>>> {
    if names.is_empty() {
        return Ok(None);
    }
    let categories = names
        .iter()
        .map(|name| name.parse::<Category>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Some(categories))
}

pub fn run_lookup(sources: &SourceArgs, args: &LookupArgs) -> Result<String> {
    let categories = parse_categories(&args.categories)?;
    let (thes, _) = build_thesaurus(sources, &args.policy)?;
    render_lookup(&thes, &args.word, categories.as_deref(), args.policy.style)
}

/// Looks up `word` and renders it in the requested style.
pub fn render_lookup(
    thes: &Thesaurus,
    word: &str,
    categories: Option<&[Category]>,
    style: StyleArg,
) -> Result<String> {
    if word.trim().is_empty() {
        bail!("nothing to look up");
    }
    let lookup = thes.lookup(word, categories)?;
    Ok(match style {
        StyleArg::Plain => lookup.format(thes.report_options()),
        StyleArg::Table => lookup.render_pretty(thes.report_options()),
    })
}

/// Runs the prompt on stdin until `QUIT` or end of input.
pub fn run_repl(sources: &SourceArgs, policy: &PolicyArgs) -> Result<()> {
    let (thes, options) = build_thesaurus(sources, policy)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    Repl::new(&thes, options, policy.style).run(stdin.lock(), stdout.lock())?;
    Ok(())
}

pub fn run_filters(sources: &SourceArgs) -> Result<String> {
    let (thes, _) = build_thesaurus(sources, &PolicyArgs::default())?;
    Ok(filters_table(&thes).to_string())
}

/// Loaded filters in report column order with their sizes.
pub fn filters_table(thes: &Thesaurus) -> Table {
    let filters = thes.filters();
    let ordered = order_filter_columns(&filters.names(), &thes.report_options().priority);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Filter"),
        header_cell("Words"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (index, name) in ordered.iter().enumerate() {
        let words = filters.get_ignore_case(name).map_or(0, |filter| filter.len());
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(name).fg(Color::Blue).add_attribute(Attribute::Bold),
            Cell::new(words),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
