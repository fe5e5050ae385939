//! Request type definitions
//!
//! Defines the options accepted alongside a URL to resolve.

use serde::{Deserialize, Serialize};

/// Extractor-specific options for a resolution call.
///
/// Accepted for forward compatibility; the current direct-mode resolution
/// does not act on any of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractOptions {
    /// Ask the relay to redirect to the stream instead of proxying it
    pub redirect_stream: Option<bool>,

    /// Free-form extractor parameters
    pub extras: Option<serde_json::Value>,
}

impl ExtractOptions {
    /// Create options with every field unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Set redirect flag
    pub fn with_redirect_stream(mut self, redirect_stream: bool) -> Self {
        self.redirect_stream = Some(redirect_stream);
        self
    }

    /// Set extras
    pub fn with_extras(mut self, extras: serde_json::Value) -> Self {
        self.extras = Some(extras);
        self
    }
}
