//! Cached DNS resolution with optional IPv4-only filtering
//!
//! Direct sessions plug [`CachingResolver`] into reqwest so that every lookup
//! goes through the system resolver once per TTL. The provider's edge
//! misbehaves over IPv6, so by default AAAA answers are dropped before a
//! connection is attempted.

use reqwest::dns::{Addrs, Name, Resolve, Resolving};
use std::collections::HashMap;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Cached lookup result
#[derive(Debug, Clone)]
struct CachedLookup {
    addrs: Vec<SocketAddr>,
    resolved_at: Instant,
}

/// DNS resolver that caches answers and can drop IPv6 addresses
#[derive(Debug, Clone)]
pub struct CachingResolver {
    cache: Arc<RwLock<HashMap<String, CachedLookup>>>,
    ttl: Option<Duration>,
    ipv4_only: bool,
}

impl CachingResolver {
    /// Create a resolver; `ttl = None` disables caching
    pub fn new(ttl: Option<Duration>, ipv4_only: bool) -> Self {
        Self {
            cache: Arc::new(RwLock::new(HashMap::new())),
            ttl,
            ipv4_only,
        }
    }

    pub fn ipv4_only(&self) -> bool {
        self.ipv4_only
    }

    /// Cache TTL, `None` when caching is disabled
    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    /// Resolve `host` to socket addresses (port 0)
    pub async fn lookup(&self, host: &str) -> io::Result<Vec<SocketAddr>> {
        if let Some(ttl) = self.ttl {
            let cache = self.cache.read().await;
            if let Some(entry) = cache.get(host)
                && entry.resolved_at.elapsed() < ttl
            {
                tracing::debug!("DNS cache hit for {}", host);
                return Ok(entry.addrs.clone());
            }
        }

        let addrs: Vec<SocketAddr> = tokio::net::lookup_host((host, 0))
            .await?
            .filter(|addr| !self.ipv4_only || addr.is_ipv4())
            .collect();

        if addrs.is_empty() {
            let family = if self.ipv4_only { "IPv4 " } else { "" };
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no {}address found for {}", family, host),
            ));
        }

        tracing::debug!("Resolved {} to {} address(es)", host, addrs.len());

        if let Some(ttl) = self.ttl {
            let mut cache = self.cache.write().await;
            cache.retain(|_, entry| entry.resolved_at.elapsed() < ttl);
            cache.insert(
                host.to_string(),
                CachedLookup {
                    addrs: addrs.clone(),
                    resolved_at: Instant::now(),
                },
            );
        }

        Ok(addrs)
    }

    /// Number of hosts currently cached
    pub async fn cached_hosts(&self) -> usize {
        self.cache.read().await.len()
    }
}

impl Resolve for CachingResolver {
    fn resolve(&self, name: Name) -> Resolving {
        let resolver = self.clone();
        let host = name.as_str().to_string();
        Box::pin(async move {
            let addrs = resolver.lookup(&host).await?;
            let addrs: Addrs = Box::new(addrs.into_iter());
            Ok::<_, Box<dyn std::error::Error + Send + Sync>>(addrs)
        })
    }
}
