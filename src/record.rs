//! Adapter from typed records to header and row strings.
//!
//! Implement [`Record`] for a type to hand a slice of it to
//! [`Table::set_records`](crate::Table::set_records).
//!
//! ```rust
//! use boxtable::{Record, Table};
//!
//! struct Job {
//!     name: &'static str,
//!     retries: u32,
//! }
//!
//! impl Record for Job {
//!     fn header() -> Vec<String> {
//!         vec!["name".into(), "retries".into()]
//!     }
//!
//!     fn fields(&self) -> Vec<String> {
//!         vec![self.name.to_string(), self.retries.to_string()]
//!     }
//! }
//!
//! let mut table = Table::new(Vec::<u8>::new());
//! table.set_records(&[Job { name: "backup", retries: 3 }])?;
//! assert_eq!(table.num_lines(), 1);
//! # Ok::<(), boxtable::Error>(())
//! ```

/// A value that can be laid out as one table row.
pub trait Record {
    /// Column labels, shared by every value of the type.
    fn header() -> Vec<String>;

    /// Display text of each field, in header order.
    fn fields(&self) -> Vec<String>;
}

impl<R: Record> Record for &R {
    fn header() -> Vec<String> {
        R::header()
    }

    fn fields(&self) -> Vec<String> {
        (*self).fields()
    }
}
