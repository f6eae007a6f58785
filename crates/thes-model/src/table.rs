use serde::{Deserialize, Serialize};

/// Rendered report as rows of already padded cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTable {
    pub rows: Vec<Vec<String>>,
}

impl ReportTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Empty row used between categories.
    pub fn push_separator(&mut self) {
        self.rows.push(Vec::new());
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cells joined by tabs, rows joined by newlines.
    pub fn render(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
