//! Interactive prompt.
//!
//! Each line is either a word to look up or a command:
//!
//! - `HELP` shows usage
//! - `QUIT` (or `EXIT`) leaves the prompt
//! - `REQUIRE <list> [<list>...]` keeps only words present in every named list
//! - `REQUIRE ANY` keeps only words present in at least one list
//! - `RESET` shows every match again
//!
//! Commands are case-insensitive. Any other single word is looked up; longer
//! input is rejected with a hint. Lookup failures are reported and the prompt
//! keeps running.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use thes_core::{Thesaurus, ThesaurusOptions};

use crate::cli::StyleArg;
use crate::commands::render_lookup;

pub const PROMPT: &str = "Enter a word to look it up in the thesaurus:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Quit,
    RequireAny,
    Require(Vec<String>),
    Reset,
    Lookup(String),
    Empty,
    /// Input that is neither a command nor a single word.
    Invalid(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let mut tokens = line.split_whitespace();
        let Some(first) = tokens.next() else {
            return Self::Empty;
        };
        let rest: Vec<&str> = tokens.collect();

        if first.eq_ignore_ascii_case("require") {
            return match rest.as_slice() {
                [] => Self::Invalid("REQUIRE needs at least one list name, or ANY".to_string()),
                [any] if any.eq_ignore_ascii_case("any") => Self::RequireAny,
                names => Self::Require(names.iter().map(|name| name.to_string()).collect()),
            };
        }
        if rest.is_empty() {
            if first.eq_ignore_ascii_case("help") {
                return Self::Help;
            }
            if first.eq_ignore_ascii_case("quit") || first.eq_ignore_ascii_case("exit") {
                return Self::Quit;
            }
            if first.eq_ignore_ascii_case("reset") {
                return Self::Reset;
            }
        }
        if !rest.is_empty() {
            return Self::Invalid("Enter one word at a time, or HELP for commands".to_string());
        }
        Self::Lookup(first.to_string())
    }
}

pub fn help_text(filter_names: &[&str]) -> String {
    let mut text = String::from(
        "Type a word to see its synonyms and antonyms, marked with the word lists\n\
         they appear in.\n\n\
         Commands:\n\
         \x20 HELP                    show this message\n\
         \x20 QUIT                    leave the thesaurus\n\
         \x20 REQUIRE <list> [...]    only show words found in every named list\n\
         \x20 REQUIRE ANY             only show words found in at least one list\n\
         \x20 RESET                   show all matches again\n",
    );
    if filter_names.is_empty() {
        text.push_str("\nNo word lists are loaded.\n");
    } else {
        text.push_str("\nLoaded word lists: ");
        text.push_str(&filter_names.join(", "));
        text.push('\n');
    }
    text
}

/// Prompt loop bound to one engine.
///
/// `base` carries the startup options; `REQUIRE` and `RESET` replace only the
/// matching policy and keep the active filter subset.
pub struct Repl<'a> {
    thesaurus: &'a Thesaurus,
    base: ThesaurusOptions,
    style: StyleArg,
}

impl<'a> Repl<'a> {
    pub fn new(thesaurus: &'a Thesaurus, base: ThesaurusOptions, style: StyleArg) -> Self {
        Self {
            thesaurus,
            base,
            style,
        }
    }

    /// Reads commands until `QUIT` or end of input.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "{PROMPT}")?;
        for line in input.lines() {
            let command = ReplCommand::parse(&line?);
            debug!(?command, "repl command");
            if !self.execute(command, &mut output)? {
                break;
            }
            writeln!(output, "{PROMPT}")?;
        }
        output.flush()
    }

    /// Returns `false` once the loop should stop.
    fn execute<W: Write>(&self, command: ReplCommand, output: &mut W) -> io::Result<bool> {
        match command {
            ReplCommand::Quit => return Ok(false),
            ReplCommand::Empty => {}
            ReplCommand::Help => {
                let names = self.thesaurus.configuration();
                writeln!(output, "{}", help_text(&names.filters().names()))?;
            }
            ReplCommand::Invalid(message) => writeln!(output, "{message}")?,
            ReplCommand::Reset => {
                self.thesaurus.reconfigure(&self.options());
                writeln!(output, "\nShowing all matches.\n")?;
            }
            ReplCommand::RequireAny => {
                self.thesaurus
                    .reconfigure(&self.options().with_must_match_any(true));
                writeln!(
                    output,
                    "\nOnly words found in at least one list will be shown.\n"
                )?;
            }
            ReplCommand::Require(names) => {
                let configuration = self
                    .thesaurus
                    .reconfigure(&self.options().with_required(names.iter().cloned()));
                let plural = if names.len() == 1 { "" } else { "s" };
                writeln!(
                    output,
                    "\nOnly matches in the following list{plural} will be shown:\n{}\n",
                    names.join("\n")
                )?;
                let unknown = configuration.unknown_required();
                if !unknown.is_empty() {
                    writeln!(
                        output,
                        "Not loaded: {}. Nothing will match until you RESET.\n",
                        unknown.join(", ")
                    )?;
                }
            }
            ReplCommand::Lookup(word) => {
                match render_lookup(self.thesaurus, &word, None, self.style) {
                    Ok(report) => writeln!(output, "\n{report}")?,
                    Err(error) => {
                        warn!(word = %word, error = %error, "lookup failed");
                        writeln!(output, "error: {error:#}")?;
                    }
                }
            }
        }
        Ok(true)
    }

    fn options(&self) -> ThesaurusOptions {
        ThesaurusOptions {
            required: None,
            must_match_any: false,
            active_filter_subset: self.base.active_filter_subset.clone(),
        }
    }
}
