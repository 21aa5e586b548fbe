//! Result and Error types for the command line tool

/// Type alias for `Result<T, Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `ripl3-json`
pub enum Error {
    /// Failure reading, writing, or querying level data
    #[error(transparent)]
    Levels(#[from] ripl::levels::Error),

    /// Failure reading a mass table
    #[error(transparent)]
    Mass(#[from] ripl::mass::Error),

    /// Logger could not be installed
    #[error("failed to initialise logging")]
    Logger(#[from] log::SetLoggerError),

    /// Terminal I/O failure, mostly from the progress bar
    #[error("failure in terminal I/O")]
    Io(#[from] std::io::Error),

    /// Progress bar could not be built
    #[error("failed to initialise progress bar: {0}")]
    Progress(String),
}
