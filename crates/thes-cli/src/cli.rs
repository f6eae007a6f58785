//! CLI argument definitions for the thesaurus.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "thes",
    version,
    about = "Thesaurus lookups classified by word list",
    long_about = "Look up synonyms and antonyms across several dictionary sources and show\n\
                  which of your word lists (filters) each result belongs to.\n\n\
                  Word lists are plain-text files with one word per line, read from the\n\
                  filter directory (--filter-dir, THES_FILTER_DIR, or ./filters)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub sources: SourceArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

/// Where filters and providers come from. Flags add to the settings file.
#[derive(Args, Debug, Default, Clone)]
pub struct SourceArgs {
    /// Settings file (default: ./thes.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Directory of word-list files, one word per line.
    #[arg(long = "filter-dir", value_name = "DIR", global = true)]
    pub filter_dir: Option<PathBuf>,

    /// JSON thesaurus file (word -> {synonyms, antonyms}).
    #[arg(long = "json-provider", value_name = "PATH", global = true)]
    pub json_providers: Vec<PathBuf>,

    /// CSV relation table with word,relation,related columns.
    #[arg(long = "csv-provider", value_name = "PATH", global = true)]
    pub csv_providers: Vec<PathBuf>,

    /// Wiktionary entries as JSON Lines.
    #[arg(long = "wiktionary-provider", value_name = "PATH", global = true)]
    pub wiktionary_providers: Vec<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Look up a word and print the membership report.
    Lookup(LookupArgs),

    /// List the loaded word lists in column order.
    Filters,

    /// Start the interactive prompt.
    Repl(PolicyArgs),
}

#[derive(Args, Debug, Default, Clone)]
pub struct PolicyArgs {
    /// Only show words present in this list (repeatable; all must match).
    #[arg(long = "require", value_name = "LIST")]
    pub require: Vec<String>,

    /// Only show words present in at least one list.
    #[arg(long = "require-any")]
    pub require_any: bool,

    /// Only use lists whose name starts with this prefix (repeatable).
    #[arg(long = "filters", value_name = "PREFIX")]
    pub filters: Vec<String>,

    /// Report style.
    #[arg(long = "style", value_enum, default_value = "plain")]
    pub style: StyleArg,
}

#[derive(Parser, Debug)]
pub struct LookupArgs {
    /// Word to look up.
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Categories to show, in order (synonyms, antonyms).
    #[arg(long = "category", value_name = "CATEGORY")]
    pub categories: Vec<String>,

    #[command(flatten)]
    pub policy: PolicyArgs,
}

/// Report rendering choices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    /// Tab-separated text.
    #[default]
    Plain,
    /// Box-drawn table.
    Table,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
