use std::io;

use thiserror::Error;

/// Errors reported by a [`Table`](crate::Table).
#[derive(Debug, Error)]
pub enum Error {
    /// The destination rejected a write. Bytes written before the failure
    /// stay written.
    #[error("failed to write table output: {0}")]
    Io(#[from] io::Error),

    /// [`Table::set_records`](crate::Table::set_records) was given no records.
    #[error("no records to tabulate")]
    EmptyRecords,

    /// A record produced a different number of fields than its header.
    #[error("record {index} has {found} fields, expected {expected}")]
    FieldCountMismatch {
        /// Position of the offending record.
        index: usize,
        /// Number of header columns.
        expected: usize,
        /// Number of fields the record produced.
        found: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
