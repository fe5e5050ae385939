//! Configuration settings structure
//!
//! Defines the main settings structure and loading logic for the extractor.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Browser identity the HTTP session presents by default
pub const DEFAULT_SESSION_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Main configuration settings for the extractor
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Extractor configuration
    pub extractor: ExtractorSettings,
    /// HTTP session configuration
    pub session: SessionSettings,
    /// Logging configuration
    pub logging: LoggingSettings,
}

/// Extractor configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorSettings {
    /// Proxy URIs (`scheme://[user:pass@]host:port`), one is picked per session
    pub proxies: Vec<String>,
}

/// HTTP session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Default user agent sent by the session
    pub user_agent: String,
    /// Total request timeout in seconds
    pub total_timeout_secs: u64,
    /// Connection establishment timeout in seconds
    pub connect_timeout_secs: u64,
    /// Socket read timeout in seconds
    pub read_timeout_secs: u64,
    /// Idle keep-alive window for pooled connections in seconds
    pub keepalive_timeout_secs: u64,
    /// DNS cache TTL in seconds, 0 disables caching
    pub dns_cache_ttl_secs: u64,
    /// Resolve hostnames to IPv4 addresses only
    pub ipv4_only: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level
    pub level: String,
    /// Enable verbose logging
    pub verbose: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_SESSION_USER_AGENT.to_string(),
            total_timeout_secs: 60,
            connect_timeout_secs: 30,
            read_timeout_secs: 30,
            keepalive_timeout_secs: 60,
            dns_cache_ttl_secs: 10,
            ipv4_only: true,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            verbose: false,
        }
    }
}

impl SessionSettings {
    pub fn total_timeout(&self) -> Duration {
        Duration::from_secs(self.total_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }

    pub fn keepalive_timeout(&self) -> Duration {
        Duration::from_secs(self.keepalive_timeout_secs)
    }

    /// DNS cache TTL, `None` when caching is disabled
    pub fn dns_cache_ttl(&self) -> Option<Duration> {
        (self.dns_cache_ttl_secs > 0).then(|| Duration::from_secs(self.dns_cache_ttl_secs))
    }
}

impl Settings {
    /// Create new settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from environment variables
    pub fn from_env() -> crate::Result<Self> {
        Self::default().merge_with_env()
    }

    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            crate::Error::Config(format!("Invalid config file {}: {}", path.display(), e))
        })
    }

    /// Apply environment variable overrides on top of these settings
    pub fn merge_with_env(mut self) -> crate::Result<Self> {
        if let Ok(proxies) = std::env::var("VAVOO_PROXIES") {
            self.extractor.proxies = parse_proxy_list(&proxies);
        }

        if let Ok(user_agent) = std::env::var("VAVOO_USER_AGENT") {
            self.session.user_agent = user_agent;
        }

        if let Ok(timeout) = std::env::var("VAVOO_TOTAL_TIMEOUT") {
            self.session.total_timeout_secs = parse_secs("VAVOO_TOTAL_TIMEOUT", &timeout)?;
        }

        if let Ok(timeout) = std::env::var("VAVOO_CONNECT_TIMEOUT") {
            self.session.connect_timeout_secs = parse_secs("VAVOO_CONNECT_TIMEOUT", &timeout)?;
        }

        if let Ok(timeout) = std::env::var("VAVOO_READ_TIMEOUT") {
            self.session.read_timeout_secs = parse_secs("VAVOO_READ_TIMEOUT", &timeout)?;
        }

        if let Ok(ipv4_only) = std::env::var("VAVOO_IPV4_ONLY") {
            self.session.ipv4_only = ipv4_only
                .parse()
                .map_err(|e| crate::Error::Config(format!("Invalid VAVOO_IPV4_ONLY: {}", e)))?;
        }

        if let Ok(level) = std::env::var("VAVOO_LOG_LEVEL") {
            self.logging.level = level;
        }

        Ok(self)
    }

    /// Check that the settings describe a usable session
    pub fn validate(&self) -> crate::Result<()> {
        let session = &self.session;

        if session.total_timeout_secs == 0
            || session.connect_timeout_secs == 0
            || session.read_timeout_secs == 0
        {
            return Err(crate::Error::config("Timeouts must be greater than zero"));
        }

        if session.connect_timeout_secs > session.total_timeout_secs
            || session.read_timeout_secs > session.total_timeout_secs
        {
            return Err(crate::Error::config(
                "Connect and read timeouts must not exceed the total timeout",
            ));
        }

        if session.user_agent.trim().is_empty() {
            return Err(crate::Error::config("Session user agent must not be empty"));
        }

        Ok(())
    }
}

/// Split a comma separated proxy list, dropping blank entries
pub fn parse_proxy_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_secs(var: &str, value: &str) -> crate::Result<u64> {
    value
        .trim()
        .parse()
        .map_err(|e| crate::Error::Config(format!("Invalid {}: {}", var, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.extractor.proxies.is_empty());
        assert_eq!(settings.session.total_timeout(), Duration::from_secs(60));
        assert_eq!(settings.session.connect_timeout(), Duration::from_secs(30));
        assert_eq!(settings.session.read_timeout(), Duration::from_secs(30));
        assert_eq!(settings.session.keepalive_timeout(), Duration::from_secs(60));
        assert!(settings.session.ipv4_only);
        assert_eq!(settings.session.user_agent, DEFAULT_SESSION_USER_AGENT);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_dns_cache_ttl_disabled() {
        let mut settings = Settings::new();
        assert_eq!(settings.session.dns_cache_ttl(), Some(Duration::from_secs(10)));

        settings.session.dns_cache_ttl_secs = 0;
        assert_eq!(settings.session.dns_cache_ttl(), None);
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut settings = Settings::default();
        settings.session.connect_timeout_secs = 0;
        assert!(matches!(settings.validate(), Err(crate::Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_read_timeout_above_total() {
        let mut settings = Settings::default();
        settings.session.read_timeout_secs = 120;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_user_agent() {
        let mut settings = Settings::default();
        settings.session.user_agent = "  ".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_from_env_starts_from_defaults() {
        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.session.total_timeout_secs, 60);
        assert_eq!(settings.session.dns_cache_ttl_secs, 10);
    }

    #[test]
    fn test_parse_proxy_list() {
        let proxies = parse_proxy_list(" socks5://p1:1080, ,http://user:pass@p2:8080,");
        assert_eq!(proxies, vec!["socks5://p1:1080", "http://user:pass@p2:8080"]);
        assert!(parse_proxy_list("").is_empty());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[extractor]
proxies = ["socks5://p1:1080"]
"#,
        )
        .unwrap();

        assert_eq!(settings.extractor.proxies, vec!["socks5://p1:1080"]);
        assert_eq!(settings.session.total_timeout_secs, 60);
        assert_eq!(settings.logging.level, "info");
    }
}
