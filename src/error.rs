//! Error types for unfurnish library.

use std::io;
use thiserror::Error;

/// Result type alias for unfurnish operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading, cleaning or writing element sequences.
///
/// The cleaning stages themselves never fail; errors only come from the
/// edges (option validation, JSON decoding, file access).
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Element JSON could not be decoded or encoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A cleanup option is out of its valid range.
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// The input is structurally unusable (e.g. not an element list).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
