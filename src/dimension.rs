//! Running column widths and row heights.
//!
//! Every cell added to a table passes through [`Dimensions::track`], which
//! max-merges the cell's width into its column and its line count into its
//! row. Both maps only ever grow while cells are added, so by render time they
//! describe the final grid.

use std::collections::{BTreeMap, HashMap};

/// Key of a row in the height map.
///
/// Header and footer live in the same map as body rows without borrowing any
/// of the body's index space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKey {
    /// The header block.
    Header,
    /// The footer block.
    Footer,
    /// A body row, by zero-based append order.
    Body(usize),
}

/// Column widths and row heights accumulated from tracked cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dimensions {
    widths: Vec<usize>,
    heights: HashMap<RowKey, usize>,
    min_widths: BTreeMap<usize, usize>,
}

impl Dimensions {
    /// Creates empty dimensions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a cell of `width` columns and `height` lines at (`column`, `row`).
    pub fn track(&mut self, column: usize, row: RowKey, width: usize, height: usize) {
        self.widen(column, width);
        let h = self.heights.entry(row).or_insert(0);
        *h = (*h).max(height);
    }

    /// Guarantees `column` is at least `width` wide, now and after a reset.
    pub fn set_min_width(&mut self, column: usize, width: usize) {
        let min = self.min_widths.entry(column).or_insert(0);
        *min = (*min).max(width);
        self.widen(column, width);
    }

    fn widen(&mut self, column: usize, width: usize) {
        if self.widths.len() <= column {
            self.widths.resize(column + 1, 0);
        }
        self.widths[column] = self.widths[column].max(width);
    }

    /// Width of every column seen so far, by column index.
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// Width of `column`, zero when it has never been seen.
    pub fn width(&self, column: usize) -> usize {
        self.widths.get(column).copied().unwrap_or(0)
    }

    /// Number of columns seen so far.
    pub fn column_count(&self) -> usize {
        self.widths.len()
    }

    /// Height of `row` in lines, zero when it has never been tracked.
    pub fn height(&self, row: RowKey) -> usize {
        self.heights.get(&row).copied().unwrap_or(0)
    }

    /// Forgets the height of `row`, so the next tracked cell sets it afresh.
    pub fn clear_height(&mut self, row: RowKey) {
        self.heights.remove(&row);
    }

    /// Forgets every body row height, keeping header and footer.
    pub fn clear_body_heights(&mut self) {
        self.heights.retain(|key, _| !matches!(key, RowKey::Body(_)));
    }

    /// Drops all widths and body heights, re-seeding the configured minimums.
    ///
    /// Header and footer cells must be re-tracked by the caller.
    pub fn reset_widths(&mut self) {
        self.widths.clear();
        self.clear_body_heights();
        let mins: Vec<(usize, usize)> = self.min_widths.iter().map(|(c, w)| (*c, *w)).collect();
        for (column, width) in mins {
            self.widen(column, width);
        }
    }
}
