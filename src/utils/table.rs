//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
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

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        for col in &self.columns {
            push_cell(&mut out, &col.header, col.width);
        }
        out.push('\n');

        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                push_cell(&mut out, &row[i], col.width);
            }
            out.push('\n');
        }

        out
    }
}

// Pad on display width, not byte length, so non-ASCII descriptions line up.
fn push_cell(out: &mut String, cell: &str, width: usize) {
    let visible = UnicodeWidthStr::width(cell);
    out.push_str(cell);
    for _ in visible..width {
        out.push(' ');
    }
    out.push(' ');
}
