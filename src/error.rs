//! Error types for the triage service.
//!
//! Classification itself cannot fail; everything here comes from building
//! the service (configuration, keyword index, listener setup).

use thiserror::Error;

/// Main error type for triage-ai operations.
#[derive(Debug, Error)]
pub enum TriageAiError {
    /// Configuration values that cannot produce a working classifier
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Keyword automaton construction failed
    #[error("Keyword index error: {0}")]
    KeywordIndex(#[from] aho_corasick::BuildError),

    /// Bind address could not be parsed
    #[error("Invalid address {addr:?}: {message}")]
    InvalidAddress { addr: String, message: String },

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for triage-ai operations
pub type Result<T> = std::result::Result<T, TriageAiError>;
