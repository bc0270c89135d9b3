//! Error types for solocase.

use thiserror::Error;

/// Result type alias using solocase's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for solocase operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Embedding generation failed. The semantic matcher propagates this
    /// rather than degrading; stale or empty matches would corrupt citations.
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// Text generation failed for a transient reason (server error, timeout).
    #[error("Inference error: {0}")]
    Inference(String),

    /// Text generation rejected for quota or billing reasons. Kept distinct
    /// from [`Error::Inference`] so the orchestrator can serve the static
    /// fallback response instead of an apology.
    #[error("Quota exceeded: {0}")]
    Quota(String),

    /// A record store query failed. The knowledge retriever catches this,
    /// logs it, and reports the section as degraded.
    #[error("Store error: {0}")]
    Store(String),

    /// Vector index and excerpt table are out of lock-step. Raised at index
    /// load time only; a deployment fault, never a query-time error.
    #[error("Index integrity error: {vectors} vectors but {excerpts} excerpts")]
    IndexIntegrity { vectors: usize, excerpts: usize },

    /// Search operation failed
    #[error("Search error: {0}")]
    Search(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP/network request failed
    #[error("Request error: {0}")]
    Request(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the caller may retry the failed operation.
    pub fn is_transient(&self) -> bool {
        matches!(self, Error::Inference(_) | Error::Request(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}
