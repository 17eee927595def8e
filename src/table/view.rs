//! Rendering of a [`Table`] to its writer.
//!
//! Output is produced in a fixed order: top border, header block, header
//! separator, body, footer block, bottom border. The body is either the plain
//! row loop or the merge-aware loop. Each row is formatted into a string and
//! written as one unit.

use std::io::Write;

use tracing::debug;

use super::model::{Cell, Table};
use crate::align::{pad_center, pad_left, pad_right, Alignment};
use crate::border::{self, Edge, VERTICAL};
use crate::dimension::RowKey;
use crate::error::Result;
use crate::style;
use crate::width::display_width;

/// A formatted body row together with what the merge pass learned about it.
struct MergedRow {
    body: String,
    /// Logical text of each cell, for comparison with the next row.
    text: Vec<String>,
    /// Whether each column wants a border segment above this row.
    border_above: Vec<bool>,
}

fn pad_label(alignment: Alignment, text: &str, width: usize) -> String {
    match alignment {
        Alignment::Left => pad_right(text, " ", width),
        Alignment::Right => pad_left(text, " ", width),
        _ => pad_center(text, " ", width),
    }
}

/// Joins a cell's lines back into one string for merge comparison.
fn logical_text(cell: &Cell) -> String {
    cell.join(" ").trim_end().to_owned()
}

fn line_at(cell: &Cell, index: usize) -> &str {
    cell.get(index).map(String::as_str).unwrap_or("")
}

impl<W: Write> Table<W> {
    /// Writes the whole table to the destination.
    ///
    /// A table with no columns at all writes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) as soon as a write fails;
    /// output written before the failure stays written.
    pub fn render(&mut self) -> Result<()> {
        let widths = self.layout_widths();
        if widths.is_empty() {
            return Ok(());
        }
        debug!(
            rows = self.rows.len(),
            columns = widths.len(),
            merge = ?self.config.merge,
            row_line = self.config.row_line,
            "rendering table"
        );

        let newline = self.config.newline.clone();
        self.write(&border::line(&widths, Edge::Top, &newline))?;

        if !self.header.is_empty() {
            let block = self.format_labels(RowKey::Header, &widths);
            self.write(&block)?;
            if self.config.header_line {
                self.write(&border::line(&widths, Edge::Middle, &newline))?;
            }
        }

        let closed = if self.config.merge.is_enabled() {
            self.write_merged_rows(&widths)?
        } else {
            self.write_rows(&widths)?
        };

        if !self.footer.is_empty() {
            if !closed {
                self.write(&border::line(&widths, Edge::Middle, &newline))?;
            }
            let block = self.format_labels(RowKey::Footer, &widths);
            self.write(&block)?;
            self.write(&border::line(&widths, Edge::Bottom, &newline))?;
        } else if !closed {
            self.write(&border::line(&widths, Edge::Bottom, &newline))?;
        }

        self.out.flush()?;
        Ok(())
    }

    /// Tracked column widths, widened to fit title-cased labels.
    ///
    /// Uppercasing can lengthen a label (`ß` becomes `SS`).
    fn layout_widths(&self) -> Vec<usize> {
        let mut widths = self.dims.widths().to_vec();
        if !self.config.auto_format_headers {
            return widths;
        }
        for cells in [&self.header, &self.footer] {
            for (column, cell) in cells.iter().enumerate() {
                let titled = cell
                    .iter()
                    .map(|line| display_width(&style::title(line)))
                    .max()
                    .unwrap_or(0);
                if let Some(width) = widths.get_mut(column) {
                    *width = (*width).max(titled);
                }
            }
        }
        widths
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Edge of the separator that follows the last body row.
    fn closing_edge(&self) -> Edge {
        if self.footer.is_empty() {
            Edge::Bottom
        } else {
            Edge::Middle
        }
    }

    /// Writes every body row; returns whether a line closing the body was
    /// already written.
    fn write_rows(&mut self, widths: &[usize]) -> Result<bool> {
        let newline = self.config.newline.clone();
        let count = self.rows.len();
        for index in 0..count {
            let body = self.format_row(index, widths, None);
            self.write(&body)?;
            if self.config.row_line {
                let edge = if index + 1 == count {
                    self.closing_edge()
                } else {
                    Edge::Middle
                };
                self.write(&border::line(widths, edge, &newline))?;
            }
        }
        Ok(self.config.row_line && count > 0)
    }

    /// Merge-aware body loop.
    ///
    /// The border above a row depends on that row's merge decisions, so each
    /// row is formatted first and written only after its border line.
    fn write_merged_rows(&mut self, widths: &[usize]) -> Result<bool> {
        let newline = self.config.newline.clone();
        let mut previous: Vec<String> = Vec::new();

        for index in 0..self.rows.len() {
            let row = self.format_merged_row(index, widths, &previous);
            if index > 0 && self.config.row_line {
                self.write(&border::selective_line(widths, &row.border_above, &newline))?;
            }
            self.write(&row.body)?;
            previous = row.text;
        }

        if self.config.row_line && !self.rows.is_empty() {
            let edge = self.closing_edge();
            self.write(&border::line(widths, edge, &newline))?;
            return Ok(true);
        }
        Ok(false)
    }

    fn format_merged_row(&self, index: usize, widths: &[usize], previous: &[String]) -> MergedRow {
        let row = &self.rows[index];
        let text: Vec<String> = row.iter().map(logical_text).collect();
        let border_above: Vec<bool> = text
            .iter()
            .enumerate()
            .map(|(column, current)| {
                let repeated = !current.is_empty()
                    && previous.get(column) == Some(current)
                    && self.config.merge.merges(column);
                !repeated
            })
            .collect();

        let body = self.format_row(index, widths, Some(border_above.as_slice()));
        MergedRow {
            body,
            text,
            border_above,
        }
    }

    /// Formats body row `index`. With `visible`, columns marked `false` are
    /// rendered blank.
    fn format_row(&self, index: usize, widths: &[usize], visible: Option<&[bool]>) -> String {
        let row = &self.rows[index];
        let height = self.dims.height(RowKey::Body(index)).max(1);
        let mut out = String::new();

        for line in 0..height {
            self.open_line(&mut out);
            for (column, cell) in row.iter().enumerate() {
                let shown = visible.map_or(true, |v| v.get(column).copied().unwrap_or(true));
                let text = if shown { line_at(cell, line) } else { "" };
                let text = style::apply_at(text, &self.config.column_styles, column);
                let padded = self
                    .config
                    .column_alignment(column)
                    .pad(&text, widths[column]);
                self.push_cell(&mut out, &padded);
            }
            self.close_line(&mut out);
        }
        out
    }

    /// Formats the header or footer block across every column.
    fn format_labels(&self, key: RowKey, widths: &[usize]) -> String {
        let (cells, alignment, styles) = match key {
            RowKey::Footer => (
                &self.footer,
                self.config.footer_alignment,
                &self.config.footer_styles,
            ),
            _ => (
                &self.header,
                self.config.header_alignment,
                &self.config.header_styles,
            ),
        };
        let height = self.dims.height(key).max(1);
        let mut out = String::new();

        for line in 0..height {
            self.open_line(&mut out);
            for (column, width) in widths.iter().enumerate() {
                let raw = cells.get(column).map_or("", |cell| line_at(cell, line));
                let label = if self.config.auto_format_headers {
                    style::apply(&style::title(raw), &style::label_style())
                } else {
                    raw.to_owned()
                };
                let padded = pad_label(alignment, &label, *width);
                self.push_cell(&mut out, &style::apply_at(&padded, styles, column));
            }
            self.close_line(&mut out);
        }
        out
    }

    fn open_line(&self, out: &mut String) {
        if !self.config.no_white_space {
            out.push_str(VERTICAL);
        }
    }

    fn push_cell(&self, out: &mut String, padded: &str) {
        if self.config.no_white_space {
            out.push_str(padded);
            out.push_str(&self.config.table_padding);
        } else {
            out.push(' ');
            out.push_str(padded);
            out.push(' ');
            out.push_str(VERTICAL);
        }
    }

    fn close_line(&self, out: &mut String) {
        out.push_str(&self.config.newline);
    }
}
