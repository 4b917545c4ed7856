//! User settings for tally
//!
//! A small key-value document persisted separately from the shared database.
//! Read on startup, written only by `config set` and `config reset`.

use serde::{Deserialize, Serialize};

use super::paths::TallyPaths;
use crate::error::{TallyError, TallyResult};

/// The config keys accepted by `config set`, in display order
pub const SETTING_KEYS: [&str; 4] = [
    "default_account",
    "default_category",
    "confirm_undo",
    "show_balance_after_add",
];

/// User settings for tally
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Account used when -a is not specified
    #[serde(default)]
    pub default_account: Option<String>,

    /// Category used when -c is not specified
    #[serde(default)]
    pub default_category: Option<String>,

    /// Ask before deleting entries with `undo`
    #[serde(default = "default_confirm_undo")]
    pub confirm_undo: bool,

    /// Print the account's balance after `add`
    #[serde(default)]
    pub show_balance_after_add: bool,
}

fn default_confirm_undo() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_account: None,
            default_category: None,
            confirm_undo: default_confirm_undo(),
            show_balance_after_add: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &TallyPaths) -> TallyResult<Self> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| TallyError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| TallyError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TallyPaths) -> TallyResult<()> {
        paths.ensure_config_dir()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TallyError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TallyError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Restore built-in defaults by removing the settings file
    pub fn reset(paths: &TallyPaths) -> TallyResult<()> {
        let settings_path = paths.settings_file();
        if settings_path.exists() {
            std::fs::remove_file(&settings_path)
                .map_err(|e| TallyError::Io(format!("Failed to remove settings file: {}", e)))?;
        }
        Ok(())
    }
}

/// Coerce a user-supplied string into a boolean config value
///
/// Accepts `true/1/yes/on` and `false/0/no/off`, case-insensitively.
pub fn parse_bool(value: &str) -> TallyResult<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(TallyError::Validation(format!(
            "'{}' is not a boolean; use 'true' or 'false'",
            value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_paths() -> (TempDir, TallyPaths) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_locations(
            temp_dir.path().join("db.db"),
            temp_dir.path().join("cfg"),
        );
        (temp_dir, paths)
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.default_account, None);
        assert_eq!(settings.default_category, None);
        assert!(settings.confirm_undo);
        assert!(!settings.show_balance_after_add);
    }

    #[test]
    fn test_save_and_load() {
        let (_temp_dir, paths) = test_paths();

        let mut settings = Settings::default();
        settings.default_account = Some("Checking".into());
        settings.confirm_undo = false;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let (_temp_dir, paths) = test_paths();
        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn test_reset_removes_file() {
        let (_temp_dir, paths) = test_paths();

        let mut settings = Settings::default();
        settings.default_category = Some("Food".into());
        settings.save(&paths).unwrap();
        assert!(paths.settings_file().exists());

        Settings::reset(&paths).unwrap();
        assert!(!paths.settings_file().exists());
        assert_eq!(
            Settings::load_or_create(&paths).unwrap(),
            Settings::default()
        );
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("true").unwrap());
        assert!(parse_bool("YES").unwrap());
        assert!(parse_bool("1").unwrap());
        assert!(!parse_bool("off").unwrap());
        assert!(!parse_bool("0").unwrap());
        assert!(parse_bool("maybe").is_err());
    }
}
