//! Stream extractors
//!
//! An extractor turns a provider-specific URL into a directly fetchable
//! stream URL plus the headers needed to fetch it. The pipeline holds
//! extractors as `Arc<dyn StreamExtractor>` and picks one by [`matches`].
//!
//! [`matches`]: StreamExtractor::matches

pub mod vavoo;

pub use vavoo::VavooExtractor;

use crate::{
    Result,
    types::{ExtractOptions, ResolutionResult},
};
use async_trait::async_trait;

/// Common interface for provider extractors
#[async_trait]
pub trait StreamExtractor: Send + Sync {
    /// Provider name, for logs
    fn name(&self) -> &'static str;

    /// Whether `url` belongs to this extractor's provider
    fn matches(&self, url: &str) -> bool;

    /// Resolve `url` into a fetchable destination
    async fn extract(&self, url: &str, options: &ExtractOptions) -> Result<ResolutionResult>;

    /// Release any network resources held by the extractor
    async fn close(&self);
}
