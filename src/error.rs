//! Error types for the Arogya action server

use thiserror::Error;

/// Result type alias for action server operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the action server
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Knowledge base file missing, unreadable, or malformed
    #[error("knowledge base unavailable: {0}")]
    KnowledgeUnavailable(String),

    /// Requested action name is not registered
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
