//! Vavoo Extractor - Rust Implementation
//!
//! Resolves `vavoo.to` stream links into a fetchable destination URL plus the
//! headers a downstream relay must send, and keeps a reusable, proxy-aware
//! HTTP session for any outbound calls resolution needs.
//!
//! # Architecture
//!
//! - **Session manager**: one lazily created HTTP session per extractor,
//!   either tunnelled through a randomly picked proxy or direct with an
//!   IPv4-only, cached DNS resolver
//! - **Resolver**: validates the provider domain and returns the stream
//!   destination in direct mode
//!
//! # Usage
//!
//! ```bash
//! vavoo-extract "https://vavoo.to/play/abc123/index.m3u8"
//! ```
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashMap;
//! use vavoo_extractor::{ExtractOptions, VavooExtractor};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let extractor = VavooExtractor::new(HashMap::new(), vec!["socks5://127.0.0.1:1080".into()]);
//! let url = "https://vavoo.to/play/abc123/index.m3u8";
//! let result = extractor.resolve(url, &ExtractOptions::new())?;
//! println!("{} via {}", result.destination_url, result.relay_mode);
//! extractor.close_session().await;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod session;
pub mod types;
pub mod utils;

pub use config::Settings;
pub use error::{Error, Result};
pub use extractor::{StreamExtractor, VavooExtractor};
pub use session::{HttpSession, SessionManager};
pub use types::{ErrorResponse, ExtractOptions, RelayMode, ResolutionResult};
