//! Settings resolution for the command-line tool
//!
//! Layers, lowest to highest: defaults, the TOML file, `VAVOO_*` environment
//! variables, then values given on the command line. The result is validated
//! once every layer is applied.
//!
//! Loading happens before the tracing subscriber exists, so the loader does
//! not log. It reports where the settings came from in [`ConfigSource`] and
//! the caller logs that once logging is up.

use crate::{Result, config::Settings};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Values taken from the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Replaces the configured proxy list when non-empty
    pub proxies: Vec<String>,
    pub verbose: bool,
}

/// Where the file layer came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Settings file that was read
    File(PathBuf),
    /// Explicitly requested file that does not exist
    Missing(PathBuf),
    /// No file requested and none at the default location
    Defaults,
}

/// Validated settings plus their origin
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub settings: Settings,
    pub source: ConfigSource,
}

impl LoadedConfig {
    /// Log how the settings were assembled
    pub fn log_source(&self) {
        match &self.source {
            ConfigSource::File(path) => info!("Loaded configuration from {}", path.display()),
            ConfigSource::Missing(path) => {
                warn!("Configuration file not found: {}, using defaults", path.display())
            }
            ConfigSource::Defaults => debug!("No configuration file, using defaults"),
        }
        debug!("Final configuration: {:?}", self.settings);
    }
}

/// Resolve settings from every layer.
///
/// Without an explicit `config_file` the file at [`default_config_path`] is
/// used when it exists.
///
/// # Errors
///
/// Returns [`Error::Config`](crate::Error::Config) for an unparseable file,
/// a malformed environment value or settings that fail validation.
pub fn load(config_file: Option<&Path>, overrides: &CliOverrides) -> Result<LoadedConfig> {
    let source = match config_file {
        Some(path) if path.exists() => ConfigSource::File(path.to_path_buf()),
        Some(path) => ConfigSource::Missing(path.to_path_buf()),
        None => default_config_path()
            .filter(|path| path.exists())
            .map_or(ConfigSource::Defaults, ConfigSource::File),
    };

    let settings = match &source {
        ConfigSource::File(path) => Settings::from_file(path)?,
        ConfigSource::Missing(_) | ConfigSource::Defaults => Settings::default(),
    };

    let mut settings = settings.merge_with_env()?;

    if !overrides.proxies.is_empty() {
        settings.extractor.proxies = overrides.proxies.clone();
    }
    if overrides.verbose {
        settings.logging.verbose = true;
    }

    settings.validate()?;

    Ok(LoadedConfig { settings, source })
}

/// Default configuration file location (`<config dir>/vavoo-extractor/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vavoo-extractor").join("config.toml"))
}
