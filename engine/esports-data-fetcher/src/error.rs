//! Error types for the esports data fetcher

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for fetcher operations
pub type Result<T> = std::result::Result<T, FetchError>;

/// Errors that can occur while mirroring the esports bucket
#[derive(Error, Debug)]
pub enum FetchError {
    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport-level failure talking to the remote store
    #[error("HTTP request for {url} failed: {message}")]
    Http { url: String, message: String },

    /// Response body was not a valid gzip stream
    #[error("Failed to decompress {resource}: {source}")]
    Decompress {
        resource: String,
        #[source]
        source: std::io::Error,
    },

    /// Local filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Mapping file missing or unreadable
    #[error("Failed to read mapping file {path}: {source}")]
    MappingFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Mapping file is not a JSON array of game records
    #[error("Failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new HTTP error
    pub fn http(url: impl Into<String>, msg: impl ToString) -> Self {
        Self::Http { url: url.into(), message: msg.to_string() }
    }

    /// Whether the error only affects the resource being fetched.
    ///
    /// Recoverable errors are logged by the orchestrator and the run moves on to
    /// the next resource; everything else aborts the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Http { .. } | Self::Decompress { .. })
    }
}
