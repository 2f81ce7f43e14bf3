use crate::domain::SortOrder;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Default UI poll interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

const SETTINGS_FILENAME: &str = "settings.json";

/// User settings stored in settings.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Last chosen list order, restored on start
    #[serde(default)]
    pub sort_order: SortOrder,

    /// How often the UI wakes up to redraw
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

fn default_tick_ms() -> u64 {
    DEFAULT_TICK_MS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sort_order: SortOrder::default(),
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

/// Path of settings.json inside the storage directory
pub fn settings_file(dir: &Path) -> PathBuf {
    dir.join(SETTINGS_FILENAME)
}

/// Load settings, returning defaults when the file doesn't exist
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Settings::default());
    }

    let content = std::fs::read_to_string(path)?;
    let settings: Settings = serde_json::from_str(&content)?;
    Ok(settings)
}

/// Load settings, falling back to defaults on any error
pub fn load_settings_or_default<P: AsRef<Path>>(path: P) -> Settings {
    let path = path.as_ref();
    load_settings(path).unwrap_or_else(|e| {
        warn!("Ignoring unreadable settings {}: {:#}", path.display(), e);
        Settings::default()
    })
}

/// Save settings to settings.json
pub fn save_settings<P: AsRef<Path>>(path: P, settings: &Settings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    crate::persistence::atomic_write(path, &json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_load_nonexistent_settings() {
        let temp_dir = tempdir().unwrap();
        let settings = load_settings(settings_file(temp_dir.path())).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.tick_ms, 250);
    }

    #[test]
    fn test_save_and_load_settings() {
        let temp_dir = tempdir().unwrap();
        let path = settings_file(temp_dir.path());

        let settings = Settings {
            sort_order: SortOrder::Alpha,
            tick_ms: 100,
        };
        save_settings(&path, &settings).unwrap();

        assert_eq!(load_settings(&path).unwrap(), settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp_dir = tempdir().unwrap();
        let path = settings_file(temp_dir.path());
        std::fs::write(&path, r#"{"sort_order":"alpha"}"#).unwrap();

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.sort_order, SortOrder::Alpha);
        assert_eq!(settings.tick_ms, DEFAULT_TICK_MS);
    }

    #[test]
    fn test_malformed_settings_fall_back() {
        let temp_dir = tempdir().unwrap();
        let path = settings_file(temp_dir.path());
        std::fs::write(&path, "sort_order = alpha").unwrap();

        assert!(load_settings(&path).is_err());
        assert_eq!(load_settings_or_default(&path), Settings::default());
    }
}
