//! Table configuration.
//!
//! [`Config`] collects every rendering option with its default. It can be
//! built up front with the `with_*` methods and handed to
//! [`Table::with_config`](crate::Table::with_config), or adjusted later
//! through the matching `Table::set_*` setters.
//!
//! ```rust
//! use boxtable::{Alignment, Config, MergeMode};
//!
//! let config = Config::default()
//!     .with_max_width(20)
//!     .with_row_line(true)
//!     .with_merge(MergeMode::columns([0]))
//!     .with_alignment(Alignment::Left);
//! assert_eq!(config.max_width, 20);
//! assert!(config.merge.merges(0));
//! assert!(!config.merge.merges(1));
//! ```
//!
//! Wrapping options (`max_width`, `auto_wrap`, `reflow`) are read when a cell
//! is appended. Changing them affects only cells appended afterwards.

use std::collections::BTreeSet;

use crossterm::style::ContentStyle;

use crate::align::Alignment;
use crate::wrap::WrapOptions;

/// Default wrap width, in display columns.
pub const MAX_ROW_WIDTH: usize = 30;

/// Which columns collapse repeated vertically-adjacent content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MergeMode {
    /// Every cell is rendered as stored.
    #[default]
    Disabled,
    /// Every column merges.
    AllColumns,
    /// Only the listed columns merge.
    Columns(BTreeSet<usize>),
}

impl MergeMode {
    /// Merge only `columns`. An empty list means every column.
    pub fn columns<I: IntoIterator<Item = usize>>(columns: I) -> Self {
        let set: BTreeSet<usize> = columns.into_iter().collect();
        if set.is_empty() {
            MergeMode::AllColumns
        } else {
            MergeMode::Columns(set)
        }
    }

    /// True unless merging is disabled.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, MergeMode::Disabled)
    }

    /// True if `column` takes part in merging.
    pub fn merges(&self, column: usize) -> bool {
        match self {
            MergeMode::Disabled => false,
            MergeMode::AllColumns => true,
            MergeMode::Columns(set) => set.contains(&column),
        }
    }
}

/// What [`Table::clear_rows`](crate::Table::clear_rows) does to column widths.
///
/// Row heights of the removed rows are always dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClearPolicy {
    /// Keep every column as wide as it has ever been, so consecutive tables
    /// written through the same writer share one layout.
    #[default]
    KeepColumnWidths,
    /// Recompute widths from the header, footer and minimum widths only.
    ResetColumnWidths,
}

/// Every rendering option of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Wrap target for cell text.
    pub max_width: usize,
    /// Wrap cell text at `max_width`.
    pub auto_wrap: bool,
    /// Fold explicit line breaks into the text before wrapping.
    pub reflow: bool,
    /// Title-case and embolden header and footer labels.
    pub auto_format_headers: bool,
    /// Header alignment; `Default` centers.
    pub header_alignment: Alignment,
    /// Footer alignment; `Default` centers.
    pub footer_alignment: Alignment,
    /// Body alignment for columns without their own.
    pub alignment: Alignment,
    /// Per-column body alignment, by column index.
    pub column_alignments: Vec<Alignment>,
    /// Line terminator.
    pub newline: String,
    /// Draw a separator under the header.
    pub header_line: bool,
    /// Draw a separator after every body row.
    pub row_line: bool,
    /// Vertical merging of repeated cells.
    pub merge: MergeMode,
    /// Drop vertical borders from content lines.
    pub no_white_space: bool,
    /// Emitted after every cell when `no_white_space` is set.
    pub table_padding: String,
    /// Effect of clearing rows on column widths.
    pub clear_policy: ClearPolicy,
    /// Per-column styles for header labels.
    pub header_styles: Vec<ContentStyle>,
    /// Per-column styles for footer labels.
    pub footer_styles: Vec<ContentStyle>,
    /// Per-column styles for body cells.
    pub column_styles: Vec<ContentStyle>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_width: MAX_ROW_WIDTH,
            auto_wrap: true,
            reflow: true,
            auto_format_headers: true,
            header_alignment: Alignment::Default,
            footer_alignment: Alignment::Default,
            alignment: Alignment::Default,
            column_alignments: Vec::new(),
            newline: "\n".to_string(),
            header_line: true,
            row_line: false,
            merge: MergeMode::Disabled,
            no_white_space: false,
            table_padding: String::new(),
            clear_policy: ClearPolicy::KeepColumnWidths,
            header_styles: Vec::new(),
            footer_styles: Vec::new(),
            column_styles: Vec::new(),
        }
    }
}

impl Config {
    /// Sets the wrap target.
    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Enables or disables wrapping.
    pub fn with_auto_wrap(mut self, wrap: bool) -> Self {
        self.auto_wrap = wrap;
        self
    }

    /// Enables or disables reflow.
    pub fn with_reflow(mut self, reflow: bool) -> Self {
        self.reflow = reflow;
        self
    }

    /// Enables or disables header/footer title formatting.
    pub fn with_auto_format_headers(mut self, auto: bool) -> Self {
        self.auto_format_headers = auto;
        self
    }

    /// Sets the header alignment.
    pub fn with_header_alignment(mut self, alignment: Alignment) -> Self {
        self.header_alignment = alignment;
        self
    }

    /// Sets the footer alignment.
    pub fn with_footer_alignment(mut self, alignment: Alignment) -> Self {
        self.footer_alignment = alignment;
        self
    }

    /// Sets the body alignment used by columns without their own.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Sets per-column body alignments.
    pub fn with_column_alignments(mut self, alignments: Vec<Alignment>) -> Self {
        self.column_alignments = alignments;
        self
    }

    /// Sets the line terminator.
    pub fn with_newline(mut self, newline: impl Into<String>) -> Self {
        self.newline = newline.into();
        self
    }

    /// Enables or disables the separator under the header.
    pub fn with_header_line(mut self, line: bool) -> Self {
        self.header_line = line;
        self
    }

    /// Enables or disables separators between body rows.
    pub fn with_row_line(mut self, line: bool) -> Self {
        self.row_line = line;
        self
    }

    /// Sets the merge mode.
    pub fn with_merge(mut self, merge: MergeMode) -> Self {
        self.merge = merge;
        self
    }

    /// Switches to compact mode, emitting `padding` after every cell instead
    /// of vertical borders.
    pub fn with_no_white_space(mut self, padding: impl Into<String>) -> Self {
        self.no_white_space = true;
        self.table_padding = padding.into();
        self
    }

    /// Sets the clear policy.
    pub fn with_clear_policy(mut self, policy: ClearPolicy) -> Self {
        self.clear_policy = policy;
        self
    }

    pub(crate) fn wrap_options(&self) -> WrapOptions {
        WrapOptions {
            max_width: self.max_width,
            wrap: self.auto_wrap,
            reflow: self.reflow,
        }
    }

    /// Body alignment for `column`, before per-cell resolution.
    pub(crate) fn column_alignment(&self, column: usize) -> Alignment {
        self.column_alignments
            .get(column)
            .copied()
            .unwrap_or_default()
            .or(self.alignment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.max_width, 30);
        assert!(config.auto_wrap && config.reflow && config.auto_format_headers);
        assert!(config.header_line);
        assert!(!config.row_line);
        assert!(!config.merge.is_enabled());
        assert_eq!(config.newline, "\n");
        assert_eq!(config.clear_policy, ClearPolicy::KeepColumnWidths);
    }

    #[test]
    fn test_empty_merge_list_means_all_columns() {
        assert_eq!(MergeMode::columns(Vec::new()), MergeMode::AllColumns);
        assert!(MergeMode::AllColumns.merges(42));
        assert!(!MergeMode::Disabled.merges(0));
    }

    #[test]
    fn test_column_alignment_falls_back_to_global() {
        let config = Config::default()
            .with_alignment(Alignment::Center)
            .with_column_alignments(vec![Alignment::Left, Alignment::Default]);
        assert_eq!(config.column_alignment(0), Alignment::Left);
        assert_eq!(config.column_alignment(1), Alignment::Center);
        assert_eq!(config.column_alignment(5), Alignment::Center);
    }

    #[test]
    fn test_compact_mode_sets_padding() {
        let config = Config::default().with_no_white_space("\t");
        assert!(config.no_white_space);
        assert_eq!(config.table_padding, "\t");
    }
}
