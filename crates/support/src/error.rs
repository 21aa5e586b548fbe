//! Result and Error types for the support module

/// Type alias for `Result<T, support::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `ripl-support`
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Line ends before the expected column is complete
    #[error("line too short for column starting at {column} (expected {expected} characters, found {found})")]
    ShortLine {
        column: usize,
        expected: usize,
        found: usize,
    },

    /// Field content is not a valid number
    #[error("unable to parse {value:?} as a number")]
    InvalidNumber { value: String },

    /// Field is blank where a value is mandatory
    #[error("mandatory field is blank")]
    BlankField,
}
