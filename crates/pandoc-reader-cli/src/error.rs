//! Error types for pandoc-reader-cli

use thiserror::Error;

/// Result type alias for pandoc-reader-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pandoc-reader-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from the reader crates
    #[error(transparent)]
    Reader(#[from] pandoc_reader::Error),

    /// Output could not be encoded as JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
