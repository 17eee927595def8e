#![warn(missing_docs)]

//! # boxtable
//!
//! Bordered, fixed-width text tables for terminals and logs.
//!
//! Cells are plain strings, optionally carrying ANSI formatting. The table
//! wraps each cell as it is added, tracks the widest line of every column and
//! the tallest cell of every row, and renders a box-drawn grid to any
//! [`std::io::Write`] destination.
//!
//! ## Features
//!
//! - **Width-aware layout**: escape sequences are ignored and wide glyphs count
//!   double when measuring cells
//! - **Wrapping and reflow** of long cell text at a configurable width
//! - **Numeric-aware alignment**: numbers and percentages align right by default
//! - **Vertical merging** of repeated cells, with the border between them removed
//! - **Header and footer** blocks with optional title formatting and colors
//! - **Compact mode** without vertical borders, for machine-friendly output
//!
//! ## Quick Start
//!
//! ```rust
//! use boxtable::Table;
//!
//! let mut table = Table::new(std::io::stdout());
//! table.set_header(["name", "age"]);
//! table.append_bulk([["Alice", "30"], ["Bob", "45"]]);
//! table.render()?;
//! # Ok::<(), boxtable::Error>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`width`] | Display width of formatted text |
//! | [`wrap`] | Paragraph splitting and greedy word wrapping |
//! | [`dimension`] | Running column widths and row heights |
//! | [`align`] | Padding and alignment classification |
//! | [`border`] | Horizontal border lines |
//! | [`style`] | Title formatting and escape wrapping |
//! | [`config`] | Rendering options |
//! | [`record`] | Typed records as table rows |
//! | [`table`] | The table itself |

pub mod align;
pub mod border;
pub mod config;
pub mod dimension;
mod error;
pub mod record;
pub mod style;
pub mod table;
pub mod width;
pub mod wrap;

pub use align::Alignment;
pub use config::{ClearPolicy, Config, MergeMode, MAX_ROW_WIDTH};
pub use dimension::RowKey;
pub use error::{Error, Result};
pub use record::Record;
pub use table::Table;
