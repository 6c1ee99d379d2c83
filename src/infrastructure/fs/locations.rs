//! Where flockbook keeps its files.
//!
//! The snapshot defaults to `<data_dir>/flockbook/farm.json`, the user config
//! to `$XDG_CONFIG_HOME/flockbook/config.toml`. Both can be overridden through
//! the environment, which is also how the integration tests isolate themselves.

use std::path::PathBuf;

/// Overrides the snapshot location entirely.
pub const DATA_PATH_VAR: &str = "FLOCKBOOK_DATA_PATH";

const APP_DIR: &str = "flockbook";
const SNAPSHOT_FILE: &str = "farm.json";

/// Snapshot path from `FLOCKBOOK_DATA_PATH`, else the platform data directory.
pub fn default_data_path() -> PathBuf {
    if let Some(path) = std::env::var_os(DATA_PATH_VAR).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    dirs::data_dir()
        .map(|d| d.join(APP_DIR).join(SNAPSHOT_FILE))
        .unwrap_or_else(|| PathBuf::from(APP_DIR).join(SNAPSHOT_FILE))
}

/// XDG config directory, falling back to `$HOME/.config`
pub fn config_home() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
}

pub fn user_config_path() -> Option<PathBuf> {
    config_home().map(|d| d.join(APP_DIR).join("config.toml"))
}
