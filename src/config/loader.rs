//! Configuration loading

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::policies::GuardMode;
use crate::error::{FlockError, FlockResult};
use crate::infrastructure::fs::user_config_path;
use crate::logging::LogFormat;

use super::env_choice::{closest, read_choice};
use super::types::{ColorMode, Config};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> FlockResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| FlockError::InvalidConfig {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Explicit path (must exist), else the user config if present, else defaults.
pub fn resolve(explicit: Option<&Path>) -> FlockResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match explicit {
        Some(path) => load_with_warnings(path)?,
        None => match user_config_path().filter(|p| p.exists()) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading user config");
                load_with_warnings(&path)?
            }
            None => (Config::default(), Vec::new()),
        },
    };
    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (FLOCKBOOK_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok(), &mut std::io::stderr())
}

/// Same as [`with_env_overrides`] with an injectable environment (for testing)
pub fn with_env_overrides_from<F, W>(mut config: Config, get_env: F, writer: &mut W) -> Config
where
    F: Fn(&str) -> Option<String>,
    W: Write,
{
    if let Some(path) = get_env("FLOCKBOOK_DATA_PATH").filter(|v| !v.is_empty()) {
        config.storage.path = Some(PathBuf::from(path));
    }

    if let Some(dir) = get_env("FLOCKBOOK_EXPORT_DIR").filter(|v| !v.is_empty()) {
        config.storage.export_dir = Some(PathBuf::from(dir));
    }

    if let Some(color) = get_env("FLOCKBOOK_COLOR") {
        config.display.color = read_choice::<ColorMode, _>(&color, writer);
    }

    if let Some(format) = get_env("FLOCKBOOK_LOG_FORMAT") {
        config.logging.format = read_choice::<LogFormat, _>(&format, writer);
    }

    if let Some(guard) = get_env("FLOCKBOOK_GUARD") {
        config.store.guard = read_choice::<GuardMode, _>(&guard, writer);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "storage",
        "path",
        "export_dir",
        "display",
        "occupancy_warning",
        "occupancy_critical",
        "color",
        "unicode",
        "logging",
        "level",
        "format",
        "store",
        "guard",
    ];

    closest(unknown, CANDIDATES).map(str::to_string)
}
