//! Configuration file support.
//!
//! Settings are stored as JSON. Every field except `version` may be omitted and
//! falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};
use zoop_view::{ZoomPolicy, DEFAULT_ZOOM_STEP};

/// Log level setting for the replay tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including per-delta trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Gesture and logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoopConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Fraction of the view extent changed per zoom step
    #[serde(default = "default_zoom_step")]
    pub zoom_step: f64,

    /// Smallest width/height reachable by zooming in, unbounded when absent
    #[serde(default)]
    pub min_extent: Option<f64>,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_zoom_step() -> f64 {
    DEFAULT_ZOOM_STEP
}

impl ZoopConfig {
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            zoom_step: default_zoom_step(),
            min_extent: None,
            log_level: LogLevel::default(),
        }
    }

    /// Zoom tunables for the view transformer.
    pub fn zoom_policy(&self) -> ZoomPolicy {
        ZoomPolicy {
            step: self.zoom_step,
            min_extent: self.min_extent,
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        if !(config.zoom_step > 0.0 && config.zoom_step < 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "zoom_step",
                message: format!("{} is outside (0, 1)", config.zoom_step),
            });
        }

        let bad_min = config
            .min_extent
            .filter(|min| !(min.is_finite() && *min > 0.0));
        if let Some(min) = bad_min {
            return Err(ConfigError::InvalidValue {
                field: "min_extent",
                message: format!("{} is not a positive number", min),
            });
        }

        Ok(config)
    }

    /// Load configuration from a JSON file.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Save configuration to a JSON file, creating parent directories.
    pub fn save_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = self.to_json()?;
        std::fs::write(path, json)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }
}

impl Default for ZoopConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// A field parsed but holds an unusable value
    #[error("Invalid {field}: {message}")]
    InvalidValue {
        field: &'static str,
        message: String,
    },

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
