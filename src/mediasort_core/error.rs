use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MediasortError {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Filesystem errors
    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Not a regular file: {0}")]
    NotAFile(PathBuf),

    // Configuration errors
    #[error("Unknown duplicate policy: {0}")]
    UnknownPolicy(String),
}

/// Result type for mediasort operations.
pub type Result<T> = std::result::Result<T, MediasortError>;
