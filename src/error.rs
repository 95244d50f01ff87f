use thiserror::Error;

/// Result type for jast operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the toolkit
///
/// The two built-in passes never fail on a well-formed tree; the taxonomy
/// exists so custom traversal hooks have something to abort with. A hook
/// error propagates to the caller verbatim, and mutations already committed
/// to earlier type declarations in the same unit stay in place.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Synthesis error: {message}")]
    Synthesis { message: String },

    #[error("Analysis error: {message}")]
    Analysis { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl Error {
    /// Create a synthesis error
    pub fn synthesis_error(message: impl Into<String>) -> Self {
        Self::Synthesis { message: message.into() }
    }

    /// Create an analysis error
    pub fn analysis_error(message: impl Into<String>) -> Self {
        Self::Analysis { message: message.into() }
    }

    /// Create an internal error
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::Internal { message: message.into() }
    }
}
