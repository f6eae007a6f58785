//! Command-line front end for the thesaurus engine.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod repl;
