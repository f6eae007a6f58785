//! Report rendering for classified lookup results.
//!
//! [`format`] produces the plain tab-separated report that callers print and
//! snapshot; [`render_pretty`] draws the same content as a terminal table.

pub mod format;
pub mod options;
pub mod pretty;

pub use format::{build_table, format, no_matches_message, order_filter_columns};
pub use options::{PriorityRule, ReportOptions};
pub use pretty::render_pretty;
