//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::policies::GuardMode;
use crate::domain::services::OccupancyThresholds;
use crate::error::FlockResult;
use crate::logging::{LogFormat, LogLevel};

use super::loader::{self, ConfigWarning};

/// Where the snapshot and backups live
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StorageConfig {
    /// Snapshot file; the platform data directory when unset
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Default directory for `export`; the working directory when unset
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

/// Terminal rendering
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayConfig {
    #[serde(default = "default_occupancy_warning")]
    pub occupancy_warning: u32,

    #[serde(default = "default_occupancy_critical")]
    pub occupancy_critical: u32,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            occupancy_warning: default_occupancy_warning(),
            occupancy_critical: default_occupancy_critical(),
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_occupancy_warning() -> u32 {
    70
}

fn default_occupancy_critical() -> u32 {
    90
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub level: LogLevel,

    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StoreConfig {
    #[serde(default)]
    pub guard: GuardMode,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub store: StoreConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> FlockResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> FlockResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Explicit file, else user config, else defaults; then env overrides
    pub fn resolve(explicit: Option<&Path>) -> FlockResult<(Self, Vec<ConfigWarning>)> {
        loader::resolve(explicit)
    }

    /// Apply environment variable overrides (FLOCKBOOK_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    pub fn occupancy_thresholds(&self) -> OccupancyThresholds {
        OccupancyThresholds {
            warning: self.display.occupancy_warning,
            critical: self.display.occupancy_critical,
        }
    }
}
