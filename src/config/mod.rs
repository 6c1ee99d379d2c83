//! Configuration module for flockbook
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (FLOCKBOOK_*)
//! 3. User config (`$XDG_CONFIG_HOME/flockbook/config.toml`) or `--config PATH`
//! 4. Built-in defaults (lowest priority)

mod env_choice;
mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use env_choice::{closest, levenshtein, read_choice, EnvChoice};
pub use loader::{with_env_overrides_from, ConfigWarning};
pub use types::{ColorMode, Config, DisplayConfig, LoggingConfig, StorageConfig, StoreConfig};
