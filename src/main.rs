//! Command-line tool for resolving Vavoo links
//!
//! Resolves a single URL and prints the result as JSON.
//!
//! # Usage
//!
//! ```bash
//! vavoo-extract "https://vavoo.to/play/abc123/index.m3u8" --proxy socks5://127.0.0.1:1080
//! ```
//!
//! # Output
//!
//! ```json
//! {
//!   "destination_url": "https://vavoo.to/play/abc123/index.m3u8",
//!   "request_headers": {"referer": "https://vavoo.to/", "user-agent": "VAVOO/2.6"},
//!   "mediaflow_endpoint": "proxy_stream_endpoint"
//! }
//! ```

use clap::Parser;
use std::path::PathBuf;
use vavoo_extractor::cli::{ExtractArgs, run_extract_mode};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "vavoo-extract")]
struct Cli {
    /// Vavoo URL to resolve
    #[arg(value_name = "URL")]
    url: String,

    /// Proxy URL for the HTTP session (repeatable, one is picked at random)
    #[arg(short, long = "proxy", value_name = "PROXY")]
    proxies: Vec<String>,

    /// Caller request header as 'Name: value' (repeatable)
    #[arg(short = 'H', long = "header", value_name = "HEADER")]
    headers: Vec<String>,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl From<Cli> for ExtractArgs {
    fn from(cli: Cli) -> Self {
        Self {
            url: cli.url,
            proxies: cli.proxies,
            headers: cli.headers,
            config: cli.config,
            verbose: cli.verbose,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_extract_mode(cli.into()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["vavoo-extract", "https://vavoo.to/play/1"]);
        assert_eq!(cli.url, "https://vavoo.to/play/1");
        assert!(cli.proxies.is_empty());
        assert!(cli.headers.is_empty());
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_repeated_proxies() {
        let cli = Cli::parse_from([
            "vavoo-extract",
            "https://vavoo.to/play/1",
            "--proxy",
            "socks5://p1:1080",
            "-p",
            "socks5://p2:1080",
            "-H",
            "Origin: https://example.com",
            "-v",
        ]);

        let args = ExtractArgs::from(cli);
        assert_eq!(args.proxies, vec!["socks5://p1:1080", "socks5://p2:1080"]);
        assert_eq!(args.headers, vec!["Origin: https://example.com"]);
        assert!(args.verbose);
    }

    #[test]
    fn test_cli_requires_url() {
        assert!(Cli::try_parse_from(["vavoo-extract"]).is_err());
    }
}
