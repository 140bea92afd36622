//! Error types for blockdown

use thiserror::Error;

/// Main error type for blockdown operations
#[derive(Error, Debug)]
pub enum BlockdownError {
    /// Request used an HTTP method other than POST
    #[error("method not allowed: {0}")]
    MethodNotAllowed(String),

    /// Request carried a content type that is not JSON
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),

    /// Request carried no markdown payload
    #[error("missing \"md\" field in request body")]
    MissingMarkdown,

    /// Conversion failed while shaping the block output
    #[error("conversion failed: {0}")]
    Convert(String),
}

impl BlockdownError {
    /// HTTP status code this error maps to at the adapter boundary.
    pub fn status(&self) -> u16 {
        match self {
            BlockdownError::MethodNotAllowed(_) => 405,
            BlockdownError::UnsupportedContentType(_) => 415,
            BlockdownError::MissingMarkdown => 400,
            BlockdownError::Convert(_) => 500,
        }
    }
}

/// Result type alias for blockdown operations
pub type Result<T> = std::result::Result<T, BlockdownError>;
