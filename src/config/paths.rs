//! Path management for tally
//!
//! Two locations matter: the shared Satchel database (owned by the Satchel
//! application) and tally's own config file.
//!
//! ## Path Resolution Order
//!
//! 1. `TALLY_DB` / `TALLY_CONFIG_DIR` environment variables (if set)
//! 2. Platform per-user directories via the `directories` crate
//!    (Linux: `~/.local/share/satchel/db.db` and `~/.config/tally/`)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::{TallyError, TallyResult};

/// Name of the config document inside the config directory
const SETTINGS_FILE: &str = "config.json";

/// Resolved file locations for one invocation
#[derive(Debug, Clone)]
pub struct TallyPaths {
    /// The shared Satchel database file
    db_path: PathBuf,
    /// Directory holding tally's own config file
    config_dir: PathBuf,
}

impl TallyPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the per-user directories cannot be determined
    /// (no home directory).
    pub fn new() -> TallyResult<Self> {
        let db_path = match std::env::var_os("TALLY_DB") {
            Some(custom) => PathBuf::from(custom),
            None => default_db_path()?,
        };

        let config_dir = match std::env::var_os("TALLY_CONFIG_DIR") {
            Some(custom) => PathBuf::from(custom),
            None => default_config_dir()?,
        };

        Ok(Self {
            db_path,
            config_dir,
        })
    }

    /// Create TallyPaths with explicit locations (useful for testing)
    pub fn with_locations(db_path: PathBuf, config_dir: PathBuf) -> Self {
        Self {
            db_path,
            config_dir,
        }
    }

    /// The shared database file
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Tally's config directory
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// The settings file inside the config directory
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    /// Ensure the config directory exists
    pub fn ensure_config_dir(&self) -> TallyResult<()> {
        std::fs::create_dir_all(&self.config_dir)
            .map_err(|e| TallyError::Io(format!("Failed to create config directory: {}", e)))
    }
}

/// Default location of the Satchel database
fn default_db_path() -> TallyResult<PathBuf> {
    let dirs = ProjectDirs::from("", "", "satchel").ok_or_else(|| {
        TallyError::Config("Could not determine the user data directory".into())
    })?;
    Ok(dirs.data_local_dir().join("db.db"))
}

/// Default location of tally's own config directory
fn default_config_dir() -> TallyResult<PathBuf> {
    let dirs = ProjectDirs::from("", "", "tally").ok_or_else(|| {
        TallyError::Config("Could not determine the user config directory".into())
    })?;
    Ok(dirs.config_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_locations() {
        let temp_dir = TempDir::new().unwrap();
        let db = temp_dir.path().join("db.db");
        let cfg = temp_dir.path().join("cfg");
        let paths = TallyPaths::with_locations(db.clone(), cfg.clone());

        assert_eq!(paths.db_path(), db);
        assert_eq!(paths.config_dir(), cfg);
        assert_eq!(paths.settings_file(), cfg.join("config.json"));
    }

    #[test]
    fn test_ensure_config_dir() {
        let temp_dir = TempDir::new().unwrap();
        let cfg = temp_dir.path().join("nested").join("cfg");
        let paths = TallyPaths::with_locations(temp_dir.path().join("db.db"), cfg.clone());

        paths.ensure_config_dir().unwrap();
        assert!(cfg.exists());
    }
}
