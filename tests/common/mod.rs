//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

/// Test helper functions
#[allow(dead_code)]
pub mod helpers {
    use std::collections::HashMap;
    use vavoo_extractor::{VavooExtractor, config::Settings};

    /// A URL the extractor accepts
    pub const VAVOO_URL: &str = "https://vavoo.to/play/abc123/index.m3u8";

    /// Create a direct extractor with default settings
    pub fn create_test_extractor() -> VavooExtractor {
        VavooExtractor::new(HashMap::new(), Vec::new())
    }

    /// Create an extractor choosing among the given proxies
    pub fn create_proxied_extractor(proxies: &[&str]) -> VavooExtractor {
        let mut settings = Settings::default();
        settings.extractor.proxies = proxies.iter().map(|p| p.to_string()).collect();
        VavooExtractor::from_settings(HashMap::new(), &settings)
    }
}
