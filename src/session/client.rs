//! HTTP session construction
//!
//! An [`HttpSession`] is a configured `reqwest::Client` together with the
//! [`SessionProfile`] it was built from. Sessions are either tunnelled
//! through a single proxy or use a direct connection pool with IPv4-only,
//! cached DNS resolution.

use crate::{Result, config::SessionSettings, session::dns::CachingResolver};
use reqwest::Client;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Idle window for connections to a proxy, reqwest's own default
const PROXY_POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(90);

/// Configuration a session was built with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionProfile {
    /// Proxy the session tunnels through, `None` for direct sessions
    pub proxy: Option<String>,
    /// Whether name resolution is restricted to IPv4
    pub ipv4_only: bool,
    /// DNS cache TTL, `None` when not cached
    pub dns_cache_ttl: Option<Duration>,
    /// Idle keep-alive window for pooled connections
    pub pool_idle_timeout: Duration,
    /// Idle connections kept per host, `None` for unbounded
    pub max_idle_per_host: Option<usize>,
    /// Total request timeout
    pub total_timeout: Duration,
    /// Connection establishment timeout
    pub connect_timeout: Duration,
    /// Socket read timeout
    pub read_timeout: Duration,
    /// Default user agent
    pub user_agent: String,
}

impl SessionProfile {
    /// Whether the session connects without a proxy
    pub fn is_direct(&self) -> bool {
        self.proxy.is_none()
    }
}

/// A live, reusable HTTP client session
#[derive(Debug)]
pub struct HttpSession {
    id: u64,
    client: Client,
    profile: SessionProfile,
    closed: AtomicBool,
}

impl HttpSession {
    /// Build a session, tunnelled through `proxy` when one is given
    pub fn build(id: u64, settings: &SessionSettings, proxy: Option<&str>) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(settings.total_timeout())
            .connect_timeout(settings.connect_timeout())
            .read_timeout(settings.read_timeout());

        let profile = match proxy {
            Some(proxy_url) => {
                let proxy = reqwest::Proxy::all(proxy_url)
                    .map_err(|e| crate::Error::proxy(format!("{}: {}", proxy_url, e)))?;
                builder = builder
                    .proxy(proxy)
                    .pool_idle_timeout(PROXY_POOL_IDLE_TIMEOUT);

                SessionProfile {
                    proxy: Some(proxy_url.to_string()),
                    ipv4_only: false,
                    dns_cache_ttl: None,
                    pool_idle_timeout: PROXY_POOL_IDLE_TIMEOUT,
                    max_idle_per_host: None,
                    total_timeout: settings.total_timeout(),
                    connect_timeout: settings.connect_timeout(),
                    read_timeout: settings.read_timeout(),
                    user_agent: settings.user_agent.clone(),
                }
            }
            None => {
                builder = builder
                    .no_proxy()
                    .pool_max_idle_per_host(usize::MAX)
                    .pool_idle_timeout(settings.keepalive_timeout())
                    .dns_resolver(Arc::new(CachingResolver::new(
                        settings.dns_cache_ttl(),
                        settings.ipv4_only,
                    )));

                SessionProfile {
                    proxy: None,
                    ipv4_only: settings.ipv4_only,
                    dns_cache_ttl: settings.dns_cache_ttl(),
                    pool_idle_timeout: settings.keepalive_timeout(),
                    max_idle_per_host: None,
                    total_timeout: settings.total_timeout(),
                    connect_timeout: settings.connect_timeout(),
                    read_timeout: settings.read_timeout(),
                    user_agent: settings.user_agent.clone(),
                }
            }
        };

        let client = builder
            .build()
            .map_err(|e| crate::Error::session(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            id,
            client,
            profile,
            closed: AtomicBool::new(false),
        })
    }

    /// Identifier unique within the owning manager
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Configuration the session was built with
    pub fn profile(&self) -> &SessionProfile {
        &self.profile
    }

    /// The underlying client, unless the session has been closed
    pub fn client(&self) -> Result<&Client> {
        if self.is_closed() {
            return Err(crate::Error::session("session is closed"));
        }
        Ok(&self.client)
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Mark the session closed. Idempotent.
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::AcqRel) {
            tracing::debug!("Closed HTTP session #{}", self.id);
        }
    }
}
