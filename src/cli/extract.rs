//! Extract mode CLI logic
//!
//! Resolves a single URL and prints the result as JSON on stdout. Logs go
//! to stderr so the output can be piped.

use crate::{
    ErrorResponse, ExtractOptions, Settings, VavooExtractor,
    config::{self, CliOverrides, LoadedConfig},
    utils::version,
};
use anyhow::{Result, bail};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Arguments for extract mode
#[derive(Debug, Default)]
pub struct ExtractArgs {
    pub url: String,
    pub proxies: Vec<String>,
    pub headers: Vec<String>,
    pub config: Option<PathBuf>,
    pub verbose: bool,
}

/// Run extract mode with the given arguments
///
/// Every failure, including bad configuration or headers, ends with an
/// [`ErrorResponse`] on stdout and exit code 1.
pub async fn run_extract_mode(args: ExtractArgs) -> Result<()> {
    let loaded = match load_settings(&args) {
        Ok(loaded) => loaded,
        Err(e) => exit_with_error("Failed to load configuration", &e.to_string()),
    };
    init_logging(&loaded.settings, args.verbose);
    loaded.log_source();

    tracing::debug!("vavoo-extract v{} resolving {}", version::get_version(), args.url);

    let request_headers = match parse_headers(&args.headers) {
        Ok(headers) => headers,
        Err(e) => exit_with_error("Invalid request headers", &e.to_string()),
    };
    let extractor = VavooExtractor::from_settings(request_headers, &loaded.settings);

    let outcome = extractor.resolve(&args.url, &ExtractOptions::new());
    extractor.close_session().await;

    match outcome {
        Ok(result) => {
            println!("{}", serde_json::to_string(&result)?);
            Ok(())
        }
        Err(e) => exit_with_error("Failed to resolve URL", &e.to_string()),
    }
}

/// Load settings from the config file and environment, then apply CLI overrides
pub fn load_settings(args: &ExtractArgs) -> crate::Result<LoadedConfig> {
    let overrides = CliOverrides {
        proxies: args.proxies.clone(),
        verbose: args.verbose,
    };
    config::load(args.config.as_deref(), &overrides)
}

fn exit_with_error(context: &str, message: &str) -> ! {
    eprintln!("{}. Error: {}", context, message);
    if let Ok(json) = serde_json::to_string(&ErrorResponse::new(message)) {
        println!("{}", json);
    }
    std::process::exit(1);
}

/// Parse `Name: value` header arguments
pub fn parse_headers(raw: &[String]) -> Result<HashMap<String, String>> {
    let mut headers = HashMap::new();
    for entry in raw {
        let Some((name, value)) = entry.split_once(':') else {
            bail!("Invalid header '{}', expected 'Name: value'", entry);
        };
        let name = name.trim();
        if name.is_empty() {
            bail!("Invalid header '{}', name is empty", entry);
        }
        headers.insert(name.to_ascii_lowercase(), value.trim().to_string());
    }
    Ok(headers)
}

fn init_logging(settings: &Settings, verbose: bool) {
    let default_level = if verbose || settings.logging.verbose {
        "debug".to_string()
    } else {
        settings.logging.level.clone()
    };

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
