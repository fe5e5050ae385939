//! # Session Management Module
//!
//! Owns the single HTTP session an extractor uses for outbound calls.
//!
//! ## Lifecycle
//!
//! - The session is created on first [`SessionManager::acquire`] and reused
//!   by every later call until it is closed.
//! - A proxy, when configured, is picked once per session at creation time.
//! - [`SessionManager::close`] releases the session; the next acquire builds
//!   a fresh one and may pick a different proxy.
//!
//! The slot is guarded by an async mutex held across check-and-create, so
//! concurrent first callers wait for the one session being built instead of
//! each building (and leaking) their own.
//!
//! ## Examples
//!
//! ```rust
//! use vavoo_extractor::session::SessionManager;
//! use vavoo_extractor::config::SessionSettings;
//!
//! # tokio_test::block_on(async {
//! let manager = SessionManager::new(Vec::new(), SessionSettings::default());
//!
//! let first = manager.acquire().await?;
//! let second = manager.acquire().await?;
//! assert_eq!(first.id(), second.id());
//!
//! manager.close().await;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! # });
//! ```

use crate::{Result, config::SessionSettings, session::client::HttpSession};
use rand::seq::IndexedRandom;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;

/// Lazily created, reusable HTTP session
#[derive(Debug)]
pub struct SessionManager {
    /// Proxy URIs, read-only after construction
    proxies: Vec<String>,
    /// Settings every new session is built from
    settings: SessionSettings,
    /// Current session, absent or open
    session: Mutex<Option<Arc<HttpSession>>>,
    /// Number of sessions built so far
    sessions_created: AtomicU64,
}

impl SessionManager {
    /// Creates a new session manager.
    ///
    /// No session is built until the first [`acquire`](Self::acquire).
    ///
    /// # Arguments
    ///
    /// * `proxies` - Proxy URIs to choose from; empty means direct connections
    /// * `settings` - Timeouts, pool and DNS settings for new sessions
    pub fn new(proxies: Vec<String>, settings: SessionSettings) -> Self {
        Self {
            proxies,
            settings,
            session: Mutex::new(None),
            sessions_created: AtomicU64::new(0),
        }
    }

    /// Returns the live session, building one if none is open.
    ///
    /// # Errors
    ///
    /// Fails only when the client cannot be constructed, e.g. a proxy entry
    /// reqwest cannot parse ([`Error::Proxy`](crate::Error::Proxy)).
    /// Connection problems surface later, when the session is used.
    pub async fn acquire(&self) -> Result<Arc<HttpSession>> {
        let mut slot = self.session.lock().await;

        if let Some(session) = slot.as_ref()
            && !session.is_closed()
        {
            tracing::debug!("Reusing HTTP session #{}", session.id());
            return Ok(Arc::clone(session));
        }

        // A closed session must not outlive this call, even if the rebuild fails
        if let Some(stale) = slot.take() {
            tracing::warn!("HTTP session #{} was closed, replacing it", stale.id());
        }

        let id = self.sessions_created.fetch_add(1, Ordering::Relaxed) + 1;
        let proxy = self.pick_proxy();

        match proxy {
            Some(proxy) => tracing::info!("Using proxy {} for Vavoo session #{}", proxy, id),
            None => tracing::info!("Creating direct Vavoo session #{}", id),
        }

        let session = Arc::new(HttpSession::build(id, &self.settings, proxy)?);
        *slot = Some(Arc::clone(&session));

        Ok(session)
    }

    /// Closes the current session, if any. Idempotent.
    pub async fn close(&self) {
        let mut slot = self.session.lock().await;
        if let Some(session) = slot.take() {
            session.close();
            tracing::debug!("Released HTTP session #{}", session.id());
        }
    }

    /// Current open session without creating one
    pub async fn current(&self) -> Option<Arc<HttpSession>> {
        let slot = self.session.lock().await;
        slot.as_ref().filter(|s| !s.is_closed()).cloned()
    }

    /// Number of sessions built over the manager's lifetime
    pub fn sessions_created(&self) -> u64 {
        self.sessions_created.load(Ordering::Relaxed)
    }

    pub fn proxies(&self) -> &[String] {
        &self.proxies
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Uniformly random proxy, `None` when the list is empty
    fn pick_proxy(&self) -> Option<&str> {
        self.proxies.choose(&mut rand::rng()).map(String::as_str)
    }
}
