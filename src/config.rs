//! Configuration management
//!
//! This module handles loading and managing configuration from:
//! - Command-line arguments
//! - Configuration files (TOML)
//! - Defaults

use crate::error::{Error, Result};
use crate::render::{GraphOptions, RenderStyle};
use crate::sink::file::DEFAULT_EXTENSION;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    /// Render options applied to every machine unless it sets its own
    #[serde(default)]
    pub defaults: OptionOverrides,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where and how rendered documents are written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// File extension, without the leading dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Output grammar
    #[serde(default)]
    pub style: RenderStyle,
}

/// Partial render options; unset fields leave the underlying value alone
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OptionOverrides {
    pub fontname: Option<String>,
    pub directed: Option<bool>,
    pub event_shape: Option<String>,
    pub state_shape: Option<String>,
    pub style: Option<RenderStyle>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions

fn default_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// Default implementations

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            extension: default_extension(),
            style: RenderStyle::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl OptionOverrides {
    /// Overwrite the fields of `options` that are set here
    pub fn apply_to(&self, options: &mut GraphOptions) {
        if let Some(fontname) = &self.fontname {
            options.fontname = fontname.clone();
        }
        if let Some(directed) = self.directed {
            options.directed = directed;
        }
        if let Some(shape) = &self.event_shape {
            options.event_shape = shape.clone();
        }
        if let Some(shape) = &self.state_shape {
            options.state_shape = shape.clone();
        }
        if let Some(style) = self.style {
            options.style = style;
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let contents = std::fs::read_to_string(&path)
            .map_err(|e| Error::Config(format!("Failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config file {:?}: {}", path, e)))?;

        Ok(config)
    }

    /// Load configuration from default locations
    ///
    /// Searches in order:
    /// 1. ./state-table-viz.toml
    /// 2. ~/.state-table-viz/config.toml
    /// 3. /etc/state-table-viz/config.toml
    pub fn load() -> Result<Self> {
        let mut paths = vec![PathBuf::from("state-table-viz.toml")];
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".state-table-viz").join("config.toml"));
        }
        paths.push(PathBuf::from("/etc/state-table-viz/config.toml"));

        for path in paths {
            if path.exists() {
                tracing::info!("Loading config from {:?}", path);
                return Self::from_file(path);
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Config::default())
    }

    /// Base render options for a machine: built-in defaults, then the
    /// configured output style, then `[defaults]`.
    pub fn base_options(&self, name: &str) -> GraphOptions {
        let mut options = GraphOptions::named(name).with_style(self.output.style);
        self.defaults.apply_to(&mut options);
        options
    }
}
