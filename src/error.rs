//!
//! The Error module contains [TableError], the single error type surfaced by this crate.
//!

use std::io;

use crate::records::RecordID;

/// Errors that can be returned by a [Table](crate::Table) or by the loader and shell around it
///
/// The table itself only ever produces [InvalidKey](TableError::InvalidKey), [NotFound](TableError::NotFound)
/// and [InvalidConfig](TableError::InvalidConfig).  The remaining variants come from file and CSV handling.
#[derive(Debug, derive_more::Display, derive_more::From, derive_more::Error)]
pub enum TableError {
    /// The identifier is not a parseable non-negative integer
    #[display(fmt = "invalid key {:?}, course ids must be non-negative integers", _0)]
    #[from(ignore)]
    InvalidKey(#[error(not(source))] String),
    /// No entry with this key exists.  A normal, expected outcome of lookup and delete
    #[display(fmt = "course {} not found", _0)]
    #[from(ignore)]
    NotFound(#[error(not(source))] RecordID),
    /// The [TableConfig](crate::TableConfig) can't produce a usable table
    #[display(fmt = "invalid table config: {}", _0)]
    #[from(ignore)]
    InvalidConfig(#[error(not(source))] String),
    #[display(fmt = "IO error: {}", _0)]
    Io(io::Error),
    #[display(fmt = "CSV error: {}", _0)]
    Csv(csv::Error),
    /// A data row that the loader refused to insert
    #[display(fmt = "malformed row at line {}: {}", line, reason)]
    #[from(ignore)]
    MalformedRow { line : u64, reason : String },
}

/// The Result type used throughout this crate
pub type Result<T> = std::result::Result<T, TableError>;
