// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fixed-width text tables
//!
//! The report only decides *what* goes into its tables. Laying them out is
//! delegated to a [`TableRenderer`], so report logic can be tested with a
//! trivial renderer and the layout can be swapped without touching it.

use textwrap::core::display_width;

/// One table row: a label and a value
///
/// Cells may contain newlines; every line is laid out on its own.
pub type Row = [String; 2];

/// Lays out rows as a text table
pub trait TableRenderer {
    /// Render the rows, first row included, as one block of text without a
    /// trailing newline
    fn render(&self, rows: &[Row]) -> String;

    /// Widest content `column` may have so that the rendered table still fits
    /// the terminal, given the other columns' current contents
    fn column_max_width(&self, rows: &[Row], column: usize) -> usize;
}

/// ASCII table with `+`, `-` and `|` borders and a border between every row
///
/// ```text
/// +-----------------+-------+
/// | Errors in file: | Count |
/// +-----------------+-------+
/// | foo.cpp         | 1     |
/// +-----------------+-------+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsciiTable {
    terminal_width: usize,
}

/// Width of the left and right outer borders together
const OUTER_BORDER_WIDTH: usize = 2;
/// Width of one border between two columns
const INNER_BORDER_WIDTH: usize = 1;
/// Spaces on each side of a cell's content
const PADDING: usize = 1;

impl AsciiTable {
    /// Create a renderer for a terminal `terminal_width` columns wide
    #[must_use]
    pub fn new(terminal_width: usize) -> Self {
        Self { terminal_width }
    }

    /// Widest line of each column
    fn column_widths(rows: &[Row]) -> [usize; 2] {
        let mut widths = [0; 2];
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                let widest = cell.lines().map(display_width).max().unwrap_or(0);
                *width = (*width).max(widest);
            }
        }
        widths
    }

    fn border(widths: &[usize; 2]) -> String {
        let mut line = String::from("+");
        for width in widths {
            line.push_str(&"-".repeat(width + 2 * PADDING));
            line.push('+');
        }
        line
    }
}

impl Default for AsciiTable {
    fn default() -> Self {
        Self::new(80)
    }
}

impl TableRenderer for AsciiTable {
    fn render(&self, rows: &[Row]) -> String {
        let widths = Self::column_widths(rows);
        let border = Self::border(&widths);
        let mut lines = vec![border.clone()];

        for row in rows {
            let cells: Vec<Vec<&str>> = row
                .iter()
                .map(|cell| {
                    let cell_lines: Vec<&str> = cell.lines().collect();
                    if cell_lines.is_empty() {
                        vec![""]
                    } else {
                        cell_lines
                    }
                })
                .collect();
            let height = cells.iter().map(Vec::len).max().unwrap_or(1);

            for i in 0..height {
                let mut line = String::from("|");
                for (cell, width) in cells.iter().zip(widths) {
                    let text = cell.get(i).copied().unwrap_or("");
                    let fill = width - display_width(text);
                    line.push(' ');
                    line.push_str(text);
                    line.push_str(&" ".repeat(fill + PADDING));
                    line.push('|');
                }
                lines.push(line);
            }
            lines.push(border.clone());
        }

        lines.join("\n")
    }

    fn column_max_width(&self, rows: &[Row], column: usize) -> usize {
        let widths = Self::column_widths(rows);
        let other_columns: usize = widths
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != column)
            .map(|(_, width)| width)
            .sum();
        let columns = widths.len();
        let decoration =
            OUTER_BORDER_WIDTH + INNER_BORDER_WIDTH * (columns - 1) + 2 * PADDING * columns;

        self.terminal_width
            .saturating_sub(other_columns + decoration)
            .max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn row(label: &str, value: &str) -> Row {
        [label.to_string(), value.to_string()]
    }

    #[test]
    fn test_render_simple_table() {
        let rows = vec![row("Errors in file:", "Count"), row("foo.cpp", "1")];
        let expected = "\
+-----------------+-------+
| Errors in file: | Count |
+-----------------+-------+
| foo.cpp         | 1     |
+-----------------+-------+";
        assert_eq!(AsciiTable::new(80).render(&rows), expected);
    }

    #[test]
    fn test_render_multiline_and_empty_cells() {
        let rows = vec![
            row("Make", "Failed\n\nErrors  : 1"),
            row("Artifacts :", ""),
        ];
        let expected = "\
+-------------+-------------+
| Make        | Failed      |
|             |             |
|             | Errors  : 1 |
+-------------+-------------+
| Artifacts : |             |
+-------------+-------------+";
        assert_eq!(AsciiTable::new(80).render(&rows), expected);
    }

    #[test]
    fn test_column_max_width() {
        // Label column is 10 wide; borders and padding take 3 + 4.
        let rows = vec![row("0123456789", "x")];
        assert_eq!(AsciiTable::new(80).column_max_width(&rows, 1), 63);
        assert_eq!(AsciiTable::new(80).column_max_width(&rows, 0), 72);
    }

    #[test]
    fn test_column_max_width_never_zero() {
        let rows = vec![row(&"x".repeat(200), "y")];
        assert_eq!(AsciiTable::new(80).column_max_width(&rows, 1), 1);
    }

    #[test]
    fn test_render_empty_table() {
        assert_eq!(AsciiTable::default().render(&[]), "+--+--+");
    }
}
