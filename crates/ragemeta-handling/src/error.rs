//! Error types for handling file loading and export.

use thiserror::Error;

/// Errors that can occur when loading or exporting handling files.
#[derive(Debug, Error)]
pub enum Error {
    /// Document-level XML error (malformed markup, write failure).
    #[error("{0}")]
    Xml(#[from] ragemeta_xml::Error),

    /// File did not have the expected extension.
    #[error("invalid extension: expected .{expected}, got .{actual}")]
    InvalidExtension { expected: String, actual: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for handling file operations.
pub type Result<T> = std::result::Result<T, Error>;
