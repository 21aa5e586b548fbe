//! Result and Error types for the mass module

use std::path::PathBuf;

/// Type alias for `Result<T, mass::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `ripl-mass`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Mass table does not exist
    #[error("missing input file {path:?}")]
    MissingInputFile { path: PathBuf },

    /// A mandatory field could not be decoded
    #[error("malformed \"{field}\" field on line {line}")]
    MalformedRecord {
        line: usize,
        field: &'static str,
        #[source]
        reason: ripl_support::Error,
    },

    /// No entries were found after the header
    #[error("no mass entries found in {path:?}")]
    EmptyTable { path: PathBuf },

    /// File name does not match a known mass table
    #[error("unrecognised mass table {path:?}")]
    UnknownFormat { path: PathBuf },
}
