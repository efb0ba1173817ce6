//! Path management for Personance
//!
//! ## Path Resolution Order
//!
//! 1. `PERSONANCE_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory (`~/.config/personance` on Linux,
//!    `~/Library/Application Support/personance` on macOS, `%APPDATA%` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::PersonanceError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "PERSONANCE_DATA_DIR";

/// Manages all paths used by Personance
#[derive(Debug, Clone)]
pub struct PersonancePaths {
    base_dir: PathBuf,
}

impl PersonancePaths {
    /// Resolve the base directory from the environment or the platform default
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, PersonanceError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => ProjectDirs::from("", "", "personance")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    PersonanceError::Config("Could not determine a home directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn records_json(&self) -> PathBuf {
        self.data_dir().join("records.json")
    }

    pub fn plans_json(&self) -> PathBuf {
        self.data_dir().join("plans.json")
    }

    pub fn records_csv(&self) -> PathBuf {
        self.data_dir().join("records.csv")
    }

    pub fn plans_csv(&self) -> PathBuf {
        self.data_dir().join("plans.csv")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), PersonanceError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PersonanceError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| PersonanceError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if Personance has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PersonancePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(
            paths.records_json(),
            temp_dir.path().join("data").join("records.json")
        );
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);
        let paths = PersonancePaths::new().unwrap();
        env::remove_var(DATA_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PersonancePaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(!paths.is_initialized());
    }
}
