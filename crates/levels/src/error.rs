//! Result and Error types for the levels module

use std::path::PathBuf;

use crate::common::RecordKind;

/// Type alias for `Result<T, levels::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `ripl-levels`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Failure to (de)serialise a JSON level document
    #[error("failed serde JSON operation")]
    Json(#[from] serde_json::Error),

    /// Per-charge level file does not exist
    #[error("missing input file {path:?}")]
    MissingInputFile { path: PathBuf },

    /// A field could not be decoded, aborting the rest of the file
    #[error("malformed {record} record on line {line}")]
    MalformedRecord {
        record: RecordKind,
        line: usize,
        #[source]
        reason: Malformed,
    },

    /// Declared counts point past the end of the file
    #[error("expected {record} record on line {line} but the file has ended")]
    UnexpectedEndOfFile { record: RecordKind, line: usize },
}

/// Reason a single record line failed to decode
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Malformed {
    /// Line does not cover the column layout of the record
    #[error(transparent)]
    Columns(#[from] ripl_support::Error),

    /// Named field failed numeric coercion or is blank where mandatory
    #[error("invalid \"{field}\" field")]
    Field {
        field: &'static str,
        #[source]
        source: ripl_support::Error,
    },
}
