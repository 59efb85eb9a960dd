//! Error types for XML parsing and writing.

use thiserror::Error;

/// Errors that can occur when parsing or writing XML documents.
#[derive(Debug, Error)]
pub enum Error {
    /// XML parsing or writing error.
    #[error("XML error: {0}")]
    Xml(String),

    /// Document contained no root element.
    #[error("no root element found in document")]
    NoRoot,
}

/// Result type for XML operations.
pub type Result<T> = std::result::Result<T, Error>;
