//! Bordered monospace tables and boxes for report output.

use super::formatting::pad_right;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            // display columns, so a status emoji counts as 2
            width: UnicodeWidthStr::width(header),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn with_headers(headers: &[&str]) -> Self {
        Self::new(headers.iter().map(|h| Column::new(h)).collect())
    }

    /// Add a row, widening columns as needed. Missing cells render empty.
    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(UnicodeWidthStr::width(cell.as_str()));
        }
        self.rows.push(row);
    }

    /// `+-...-+` line matching the current column widths.
    pub fn separator(&self) -> String {
        let dashes: Vec<String> = self.columns.iter().map(|c| "-".repeat(c.width)).collect();
        format!("+-{}-+", dashes.join("-+-"))
    }

    fn line(&self, cells: &[&str]) -> String {
        let padded: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| pad_right(cells.get(i).copied().unwrap_or_default(), col.width))
            .collect();
        format!("| {} |", padded.join(" | "))
    }

    pub fn render(&self) -> String {
        let sep = self.separator();
        let headers: Vec<&str> = self.columns.iter().map(|c| c.header.as_str()).collect();

        let mut lines = vec![sep.clone(), self.line(&headers), sep.clone()];
        for row in &self.rows {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            lines.push(self.line(&cells));
        }
        lines.push(sep);

        lines.join("\n")
    }
}

/// Wrap `lines` in a single-column `+-…-+` box.
pub fn boxed(lines: &[String]) -> String {
    // display width, legend emoji take 2 columns
    let width = lines
        .iter()
        .map(|l| UnicodeWidthStr::width(l.as_str()))
        .max()
        .unwrap_or(0);
    let sep = format!("+-{}-+", "-".repeat(width));

    let mut out = vec![sep.clone()];
    for l in lines {
        out.push(format!("| {} |", pad_right(l, width)));
    }
    out.push(sep);

    out.join("\n")
}
