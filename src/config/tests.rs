//! Tests for the config module

use super::loader::{load_with_warnings, with_env_overrides_from};
use super::types::*;
use crate::domain::policies::GuardMode;
use crate::error::FlockError;
use crate::logging::{LogFormat, LogLevel};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.storage.path, None);
    assert_eq!(config.display.occupancy_warning, 70);
    assert_eq!(config.display.occupancy_critical, 90);
    assert!(config.display.unicode);
    assert_eq!(config.logging.level, LogLevel::Warn);
    assert_eq!(config.store.guard, GuardMode::Permissive);
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[storage]
path = "/srv/farm/farm.json"
export_dir = "/srv/farm/backups"

[display]
occupancy_warning = 60
occupancy_critical = 85
color = "never"
unicode = false

[logging]
level = "debug"
format = "json"

[store]
guard = "strict"
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.storage.path, Some(PathBuf::from("/srv/farm/farm.json")));
    assert_eq!(config.display.color, ColorMode::Never);
    assert!(!config.display.unicode);
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.store.guard, GuardMode::Strict);

    let thresholds = config.occupancy_thresholds();
    assert_eq!((thresholds.warning, thresholds.critical), (60, 85));
}

#[test]
fn test_partial_section_keeps_defaults() {
    let config: Config = toml::from_str("[display]\ncolor = \"always\"\n").unwrap();
    assert_eq!(config.display.color, ColorMode::Always);
    assert_eq!(config.display.occupancy_critical, 90);
    assert!(config.display.unicode);
}

#[test]
fn test_unknown_key_warns_with_suggestion() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[display]\nocupancy_warning = 75\n").unwrap();

    let (config, warnings) = load_with_warnings(&path).unwrap();
    assert_eq!(config.display.occupancy_warning, 70);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "ocupancy_warning");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("occupancy_warning"));
    assert!(warnings[0].to_string().contains("did you mean 'occupancy_warning'"));
}

#[test]
fn test_malformed_config_is_invalid_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[store]\nguard = \"sometimes\"\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, FlockError::InvalidConfig { .. }));
}

#[test]
fn test_explicit_missing_config_is_an_error() {
    let dir = tempdir().unwrap();
    let err = Config::resolve(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(matches!(err, FlockError::Io(_)));
}

#[test]
fn test_env_overrides_apply() {
    let mut out = Vec::new();
    let config = with_env_overrides_from(
        Config::default(),
        env(&[
            ("FLOCKBOOK_DATA_PATH", "/tmp/farm.json"),
            ("FLOCKBOOK_EXPORT_DIR", "/tmp/backups"),
            ("FLOCKBOOK_COLOR", "never"),
            ("FLOCKBOOK_LOG_FORMAT", "json"),
            ("FLOCKBOOK_GUARD", "strict"),
        ]),
        &mut out,
    );

    assert_eq!(config.storage.path, Some(PathBuf::from("/tmp/farm.json")));
    assert_eq!(config.storage.export_dir, Some(PathBuf::from("/tmp/backups")));
    assert_eq!(config.display.color, ColorMode::Never);
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.store.guard, GuardMode::Strict);
    assert!(out.is_empty());
}

#[test]
fn test_invalid_env_value_warns_and_falls_back() {
    let mut base = Config::default();
    base.store.guard = GuardMode::Strict;

    let mut out = Vec::new();
    let config = with_env_overrides_from(base, env(&[("FLOCKBOOK_GUARD", "strickt")]), &mut out);

    assert_eq!(config.store.guard, GuardMode::Permissive);
    let msg = String::from_utf8(out).unwrap();
    assert!(msg.contains("FLOCKBOOK_GUARD"));
    assert!(msg.contains("Did you mean 'strict'?"));
}

#[test]
fn test_empty_data_path_is_ignored() {
    let mut out = Vec::new();
    let config =
        with_env_overrides_from(Config::default(), env(&[("FLOCKBOOK_DATA_PATH", "")]), &mut out);
    assert_eq!(config.storage.path, None);
}
