//! Errors raised at the I/O boundary.
//!
//! The editing core never fails; everything here comes from the file system, the canvas
//! socket or the configuration file. None of them is fatal to a running session.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Boundary errors.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// A file could not be read; the open document is left untouched.
    #[error("failed to read {}: {source}", path.display())]
    FileRead {
        /// File that was being opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A file could not be written; the document stays modified.
    #[error("failed to write {}: {source}", path.display())]
    FileWrite {
        /// File that was being saved.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The canvas connection failed or was closed.
    #[error("canvas connection error: {0}")]
    Connection(#[from] io::Error),

    /// The configuration file is unreadable or malformed.
    #[error("invalid config {}: {message}", path.display())]
    Config {
        /// Configuration file path.
        path: PathBuf,
        /// What went wrong.
        message: String,
    },
}

/// Result alias for boundary operations.
pub type Result<T> = std::result::Result<T, CanvasError>;
