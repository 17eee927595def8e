//! Table state and the operations that build it up.

use crossterm::style::ContentStyle;
use tracing::{debug, trace};

use crate::align::Alignment;
use crate::config::{ClearPolicy, Config, MergeMode};
use crate::dimension::{Dimensions, RowKey};
use crate::error::{Error, Result};
use crate::record::Record;
use crate::style;
use crate::width::max_width;
use crate::wrap::wrap_cell;

/// Wrapped display lines of one cell.
pub(crate) type Cell = Vec<String>;

/// A bordered text table writing to `W`.
///
/// See the [module documentation](crate::table) for an overview.
#[derive(Debug)]
pub struct Table<W> {
    pub(crate) out: W,
    pub(crate) config: Config,
    pub(crate) header: Vec<Cell>,
    pub(crate) footer: Vec<Cell>,
    pub(crate) rows: Vec<Vec<Cell>>,
    pub(crate) dims: Dimensions,
}

impl<W> Table<W> {
    /// Creates an empty table with the default configuration.
    pub fn new(out: W) -> Self {
        Self::with_config(out, Config::default())
    }

    /// Creates an empty table with `config`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use boxtable::{Config, Table};
    ///
    /// let table = Table::with_config(Vec::<u8>::new(), Config::default().with_row_line(true));
    /// assert!(table.config().row_line);
    /// ```
    pub fn with_config(out: W, config: Config) -> Self {
        Self {
            out,
            config,
            header: Vec::new(),
            footer: Vec::new(),
            rows: Vec::new(),
            dims: Dimensions::new(),
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Mutable access to the configuration.
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// The destination writer.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Mutable access to the destination writer.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Consumes the table, returning the destination writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn track_cells<I, S>(&mut self, cells: I, key: RowKey) -> Vec<Cell>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let opts = self.config.wrap_options();
        cells
            .into_iter()
            .enumerate()
            .map(|(column, text)| {
                let wrapped = wrap_cell(text.as_ref(), &opts);
                self.dims
                    .track(column, key, wrapped.width, wrapped.lines.len());
                wrapped.lines
            })
            .collect()
    }

    /// Sets the header labels, replacing any previous header.
    ///
    /// Labels are wrapped like body cells and take part in column sizing.
    /// The header height is recomputed from the new labels alone.
    pub fn set_header<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.dims.clear_height(RowKey::Header);
        self.header = self.track_cells(labels, RowKey::Header);
    }

    /// Sets the footer labels, replacing any previous footer.
    pub fn set_footer<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.dims.clear_height(RowKey::Footer);
        self.footer = self.track_cells(labels, RowKey::Footer);
    }

    /// Appends one body row.
    ///
    /// A row may have fewer or more cells than the header; extra cells widen
    /// the table, and a short row is rendered with only the cells it has.
    pub fn append<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let index = self.rows.len();
        let cells = self.track_cells(row, RowKey::Body(index));
        trace!(
            row = index,
            columns = cells.len(),
            height = self.dims.height(RowKey::Body(index)),
            "appended row"
        );
        self.rows.push(cells);
    }

    /// Appends every row of `rows`.
    pub fn append_bulk<R, I, S>(&mut self, rows: R)
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for row in rows {
            self.append(row);
        }
    }

    /// Appends one body row, decorating cell `i` with `styles[i]`.
    ///
    /// The style wraps every wrapped line of the cell separately, so escape
    /// sequences never span a border. Cells without a style are left plain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use boxtable::Table;
    /// use crossterm::style::{ContentStyle, Stylize};
    ///
    /// let mut table = Table::new(Vec::<u8>::new());
    /// table.append_styled(["ok", "plain"], &[ContentStyle::new().green()]);
    /// assert_eq!(table.column_widths(), &[2, 5]);
    /// ```
    pub fn append_styled<I, S>(&mut self, row: I, styles: &[ContentStyle])
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.append(row);
        if let Some(cells) = self.rows.last_mut() {
            for (cell, cell_style) in cells.iter_mut().zip(styles) {
                for line in cell.iter_mut() {
                    *line = style::apply(line.as_str(), cell_style);
                }
            }
        }
    }

    /// Replaces the header with `R::header()` and appends every record.
    ///
    /// Nothing is changed when an error is returned.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyRecords`] when `records` is empty, and
    /// [`Error::FieldCountMismatch`] when a record's field count differs from
    /// its header.
    pub fn set_records<R: Record>(&mut self, records: &[R]) -> Result<()> {
        if records.is_empty() {
            return Err(Error::EmptyRecords);
        }
        let header = R::header();
        let rows = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let fields = record.fields();
                if fields.len() == header.len() {
                    Ok(fields)
                } else {
                    Err(Error::FieldCountMismatch {
                        index,
                        expected: header.len(),
                        found: fields.len(),
                    })
                }
            })
            .collect::<Result<Vec<_>>>()?;

        self.set_header(&header);
        self.append_bulk(rows);
        Ok(())
    }

    /// Number of body rows appended so far.
    pub fn num_lines(&self) -> usize {
        self.rows.len()
    }

    /// Removes every body row.
    ///
    /// Header and footer are kept. Column widths follow the configured
    /// [`ClearPolicy`].
    pub fn clear_rows(&mut self) {
        debug!(
            rows = self.rows.len(),
            policy = ?self.config.clear_policy,
            "clearing rows"
        );
        self.rows.clear();
        match self.config.clear_policy {
            ClearPolicy::KeepColumnWidths => self.dims.clear_body_heights(),
            ClearPolicy::ResetColumnWidths => {
                self.dims.reset_widths();
                for (key, cells) in [(RowKey::Header, &self.header), (RowKey::Footer, &self.footer)] {
                    for (column, lines) in cells.iter().enumerate() {
                        self.dims.track(column, key, max_width(lines), lines.len());
                    }
                }
            }
        }
    }

    /// Width of every column, by index.
    pub fn column_widths(&self) -> &[usize] {
        self.dims.widths()
    }

    /// Height in lines of `row`, zero if it does not exist.
    pub fn row_height(&self, row: RowKey) -> usize {
        self.dims.height(row)
    }

    /// Sets the wrap width for cells appended from now on.
    pub fn set_col_width(&mut self, width: usize) {
        self.config.max_width = width;
    }

    /// Makes `column` at least `width` columns wide.
    pub fn set_col_min_width(&mut self, column: usize, width: usize) {
        self.dims.set_min_width(column, width);
    }

    /// Sets the header alignment. `Default` centers.
    pub fn set_header_alignment(&mut self, alignment: Alignment) {
        self.config.header_alignment = alignment;
    }

    /// Sets the footer alignment. `Default` centers.
    pub fn set_footer_alignment(&mut self, alignment: Alignment) {
        self.config.footer_alignment = alignment;
    }

    /// Sets the body alignment for columns without their own.
    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.config.alignment = alignment;
    }

    /// Sets per-column body alignments, by column index.
    pub fn set_column_alignment(&mut self, alignments: &[Alignment]) {
        self.config.column_alignments = alignments.to_vec();
    }

    /// Sets the line terminator.
    pub fn set_newline(&mut self, newline: impl Into<String>) {
        self.config.newline = newline.into();
    }

    /// Enables or disables the separator under the header.
    pub fn set_header_line(&mut self, line: bool) {
        self.config.header_line = line;
    }

    /// Enables or disables a separator after every body row.
    pub fn set_row_line(&mut self, line: bool) {
        self.config.row_line = line;
    }

    /// Enables or disables merging of repeated cells.
    ///
    /// Enabling keeps a column restriction set earlier.
    pub fn set_auto_merge_cells(&mut self, auto: bool) {
        match (auto, &self.config.merge) {
            (false, _) => self.config.merge = MergeMode::Disabled,
            (true, MergeMode::Disabled) => self.config.merge = MergeMode::AllColumns,
            (true, _) => {}
        }
    }

    /// Enables merging for `columns` only; an empty list merges every column.
    pub fn set_auto_merge_cells_by_column_index(&mut self, columns: &[usize]) {
        self.config.merge = MergeMode::columns(columns.iter().copied());
    }

    /// Enables or disables compact mode, which drops vertical borders from
    /// content lines.
    pub fn set_no_white_space(&mut self, allow: bool) {
        self.config.no_white_space = allow;
    }

    /// Sets the token written after every cell in compact mode.
    pub fn set_table_padding(&mut self, padding: impl Into<String>) {
        self.config.table_padding = padding.into();
    }

    /// Enables or disables wrapping for cells appended from now on.
    pub fn set_auto_wrap_text(&mut self, wrap: bool) {
        self.config.auto_wrap = wrap;
    }

    /// Enables or disables reflow for cells appended from now on.
    pub fn set_reflow_during_auto_wrap(&mut self, reflow: bool) {
        self.config.reflow = reflow;
    }

    /// Enables or disables title formatting of header and footer labels.
    pub fn set_auto_format_headers(&mut self, auto: bool) {
        self.config.auto_format_headers = auto;
    }

    /// Sets per-column styles for header labels.
    pub fn set_header_color(&mut self, styles: Vec<ContentStyle>) {
        self.config.header_styles = styles;
    }

    /// Sets per-column styles for footer labels.
    pub fn set_footer_color(&mut self, styles: Vec<ContentStyle>) {
        self.config.footer_styles = styles;
    }

    /// Sets per-column styles for body cells.
    pub fn set_column_color(&mut self, styles: Vec<ContentStyle>) {
        self.config.column_styles = styles;
    }

    /// Sets what clearing rows does to column widths.
    pub fn set_clear_policy(&mut self, policy: ClearPolicy) {
        self.config.clear_policy = policy;
    }
}
