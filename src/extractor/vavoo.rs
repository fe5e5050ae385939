//! Vavoo extractor
//!
//! Vavoo links play as-is once the fetch presents the provider's app
//! identity (`VAVOO/2.6`) over IPv4, so resolution runs in direct mode: the
//! input URL is returned unchanged together with the stream headers. The
//! token exchange the provider also supports is not performed.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashMap;
//! use vavoo_extractor::{ExtractOptions, VavooExtractor};
//!
//! let extractor = VavooExtractor::new(HashMap::new(), Vec::new());
//! let result = extractor
//!     .resolve("https://vavoo.to/play/abc123/index.m3u8", &ExtractOptions::new())
//!     .unwrap();
//!
//! assert_eq!(result.destination_url, "https://vavoo.to/play/abc123/index.m3u8");
//! assert_eq!(result.request_headers["user-agent"], "VAVOO/2.6");
//! ```

use crate::{
    Result,
    config::{SessionSettings, Settings},
    extractor::StreamExtractor,
    session::{HttpSession, SessionManager},
    types::{ExtractOptions, RelayMode, ResolutionResult},
};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Marker every supported URL contains
pub const VAVOO_DOMAIN: &str = "vavoo.to";

/// App identity the provider expects on stream fetches
pub const VAVOO_STREAM_USER_AGENT: &str = "VAVOO/2.6";

/// Referer sent with stream fetches
pub const VAVOO_REFERER: &str = "https://vavoo.to/";

/// Extractor for `vavoo.to` links
#[derive(Debug)]
pub struct VavooExtractor {
    /// Caller supplied headers, kept for forward compatibility
    request_headers: HashMap<String, String>,
    /// Relay strategy for resolved streams
    relay_mode: RelayMode,
    /// Lazily created HTTP session
    sessions: SessionManager,
}

impl VavooExtractor {
    /// Create an extractor with default session settings
    ///
    /// # Arguments
    ///
    /// * `request_headers` - Caller headers, passed through untouched
    /// * `proxies` - Proxy URIs; empty for direct connections
    pub fn new(request_headers: HashMap<String, String>, proxies: Vec<String>) -> Self {
        Self::with_session_settings(request_headers, proxies, SessionSettings::default())
    }

    /// Create an extractor from loaded settings
    pub fn from_settings(request_headers: HashMap<String, String>, settings: &Settings) -> Self {
        Self::with_session_settings(
            request_headers,
            settings.extractor.proxies.clone(),
            settings.session.clone(),
        )
    }

    fn with_session_settings(
        request_headers: HashMap<String, String>,
        proxies: Vec<String>,
        settings: SessionSettings,
    ) -> Self {
        Self {
            request_headers,
            relay_mode: RelayMode::ProxyStream,
            sessions: SessionManager::new(proxies, settings),
        }
    }

    /// Resolve a Vavoo URL in direct mode.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSourceUrl`](crate::Error::InvalidSourceUrl)
    /// when `url` does not contain `vavoo.to`. No network activity happens
    /// in either case.
    pub fn resolve(&self, url: &str, _options: &ExtractOptions) -> Result<ResolutionResult> {
        if !url.contains(VAVOO_DOMAIN) {
            return Err(crate::Error::invalid_source_url(url));
        }

        tracing::info!("Using Direct Mode (original URL): {}", url);

        Ok(ResolutionResult::new(url, stream_headers(), self.relay_mode))
    }

    /// Live HTTP session, created on first use
    pub async fn session(&self) -> Result<Arc<HttpSession>> {
        self.sessions.acquire().await
    }

    /// Close the HTTP session, if one is open
    pub async fn close_session(&self) {
        self.sessions.close().await;
    }

    pub fn session_manager(&self) -> &SessionManager {
        &self.sessions
    }

    pub fn request_headers(&self) -> &HashMap<String, String> {
        &self.request_headers
    }

    /// Headers every session sends by default.
    ///
    /// Derived from [`SessionSettings::user_agent`], the value
    /// [`HttpSession::build`] configures the client with.
    pub fn base_headers(&self) -> HashMap<String, String> {
        HashMap::from([(
            "user-agent".to_string(),
            self.sessions.settings().user_agent.clone(),
        )])
    }

    pub fn relay_mode(&self) -> RelayMode {
        self.relay_mode
    }

    pub fn proxies(&self) -> &[String] {
        self.sessions.proxies()
    }
}

/// Headers the relay must send when fetching a Vavoo stream
fn stream_headers() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("user-agent".to_string(), VAVOO_STREAM_USER_AGENT.to_string()),
        ("referer".to_string(), VAVOO_REFERER.to_string()),
    ])
}

#[async_trait]
impl StreamExtractor for VavooExtractor {
    fn name(&self) -> &'static str {
        "Vavoo"
    }

    fn matches(&self, url: &str) -> bool {
        url.contains(VAVOO_DOMAIN)
    }

    async fn extract(&self, url: &str, options: &ExtractOptions) -> Result<ResolutionResult> {
        self.resolve(url, options)
    }

    async fn close(&self) {
        self.close_session().await;
    }
}
