use anyhow::{anyhow, Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Directory of hand-tagged training documents
    #[serde(default = "default_training_dir")]
    pub training_dir: String,

    /// Directory annotated output files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Lexical lookup config
    #[serde(default)]
    pub lookup: LookupConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Lexical lookup service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LookupConfig {
    /// Whether ambiguous names are checked against the lookup service
    #[serde(default)]
    pub enabled: bool,

    /// Service endpoint URL
    #[serde(default = "default_lookup_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: default_lookup_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn default_training_dir() -> String {
    "train/tagged".to_string()
}

fn default_output_dir() -> String {
    "tagged".to_string()
}

fn default_lookup_endpoint() -> String {
    "https://en.wikipedia.org/w/api.php".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {:?}", path))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }

    /// Load an existing config file or fall back to defaults when the
    /// file is absent.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.training_dir.is_empty() {
            return Err(anyhow!("Training directory must not be empty"));
        }
        if self.output_dir.is_empty() {
            return Err(anyhow!("Output directory must not be empty"));
        }
        if self.lookup.enabled && self.lookup.endpoint.is_empty() {
            return Err(anyhow!("Lookup endpoint is required when lookup is enabled"));
        }
        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            training_dir: default_training_dir(),
            output_dir: default_output_dir(),
            lookup: LookupConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
