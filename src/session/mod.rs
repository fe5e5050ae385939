//! Session management for outbound HTTP calls
//!
//! This module owns the extractor's reusable HTTP session: how it is built
//! (direct or proxied), how names are resolved, and its acquire/close
//! lifecycle.

pub mod client;
pub mod dns;
pub mod manager;

pub use client::{HttpSession, SessionProfile};
pub use dns::CachingResolver;
pub use manager::SessionManager;
