//! Response type definitions
//!
//! Defines the resolution result handed to the downstream stream relay.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Relay strategy the downstream component should use to serve a stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelayMode {
    /// Proxy the raw stream bytes
    #[serde(rename = "proxy_stream_endpoint")]
    ProxyStream,
    /// Rewrite and proxy an HLS manifest
    #[serde(rename = "hls_manifest_proxy")]
    HlsManifest,
    /// Rewrite and proxy a DASH manifest
    #[serde(rename = "mpd_manifest_proxy")]
    MpdManifest,
}

impl RelayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProxyStream => "proxy_stream_endpoint",
            Self::HlsManifest => "hls_manifest_proxy",
            Self::MpdManifest => "mpd_manifest_proxy",
        }
    }
}

impl fmt::Display for RelayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of resolving a provider URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    /// URL the relay should fetch
    pub destination_url: String,

    /// Headers the relay must send when fetching the stream
    pub request_headers: BTreeMap<String, String>,

    /// Relay strategy for the stream
    #[serde(rename = "mediaflow_endpoint")]
    pub relay_mode: RelayMode,
}

impl ResolutionResult {
    /// Create a new resolution result
    pub fn new(
        destination_url: impl Into<String>,
        request_headers: BTreeMap<String, String>,
        relay_mode: RelayMode,
    ) -> Self {
        Self {
            destination_url: destination_url.into(),
            request_headers,
            relay_mode,
        }
    }
}

/// Error response printed by the command-line tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
