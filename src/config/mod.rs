//! Configuration management for the extractor
//!
//! This module handles loading and managing configuration settings
//! for the library and the command-line tool.

pub mod loader;
pub mod settings;

pub use loader::{CliOverrides, ConfigSource, LoadedConfig, default_config_path, load};
pub use settings::{
    DEFAULT_SESSION_USER_AGENT, ExtractorSettings, LoggingSettings, SessionSettings, Settings,
};
