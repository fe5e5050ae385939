//! Error type definitions
//!
//! Defines the main error types used throughout the extractor.

use thiserror::Error;

/// Main error type for the extractor
#[derive(Error, Debug)]
pub enum Error {
    /// The URL does not belong to the supported provider
    #[error("Not a valid Vavoo URL: {url}")]
    InvalidSourceUrl { url: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Session management errors
    #[error("Session error: {0}")]
    Session(String),

    /// Proxy configuration errors
    #[error("Proxy error: {config}")]
    Proxy { config: String },

    /// Network/HTTP client errors
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an invalid source URL error
    pub fn invalid_source_url(url: impl Into<String>) -> Self {
        Self::InvalidSourceUrl { url: url.into() }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new session error
    pub fn session(msg: impl Into<String>) -> Self {
        Self::Session(msg.into())
    }

    /// Create a proxy error
    pub fn proxy(config: impl Into<String>) -> Self {
        Self::Proxy {
            config: config.into(),
        }
    }

    /// Whether the caller should route the URL to a different extractor
    pub fn is_invalid_source(&self) -> bool {
        matches!(self, Self::InvalidSourceUrl { .. })
    }
}
