//! Error types for git-find.

use thiserror::Error;

/// git-find error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: environment variable {0} is not set")]
    MissingRoot(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for git-find operations.
pub type Result<T> = std::result::Result<T, Error>;
