//! The table: accumulated cells, their layout, and rendering.
//!
//! A [`Table`] owns its destination writer. Cells are wrapped and measured as
//! they are added, so column widths and row heights are final by the time
//! [`Table::render`] streams the bordered grid to the writer. Rendering does
//! not change the table; calling it twice writes the same bytes twice.
//!
//! # Basic Usage
//!
//! ```rust
//! use boxtable::Table;
//!
//! let mut table = Table::new(Vec::new());
//! table.set_header(["name", "age"]);
//! table.append(["Alice", "30"]);
//! table.append(["Bob", "45"]);
//! table.set_auto_format_headers(false);
//! table.render()?;
//!
//! let out = String::from_utf8(table.into_inner()).unwrap();
//! assert_eq!(
//!     out,
//!     "┌───────┬─────┐\n\
//!      │ name  │ age │\n\
//!      ├───────┼─────┤\n\
//!      │ Alice │  30 │\n\
//!      │ Bob   │  45 │\n\
//!      └───────┴─────┘\n"
//! );
//! # Ok::<(), boxtable::Error>(())
//! ```
//!
//! # Merging
//!
//! With a merge mode enabled, a cell repeating the one directly above it in a
//! merging column is left blank, and with row lines on the border segment
//! between them is dropped:
//!
//! ```text
//! ┌───┬───┐
//! │ A │ x │
//! │   ├───┤
//! │   │ y │
//! └───┴───┘
//! ```

mod model;
mod view;


pub use model::Table;
