//! Path management for Kakeibo
//!
//! ## Path Resolution Order
//!
//! 1. `KAKEIBO_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory reported by the `directories`
//!    crate (`~/.config/kakeibo` on Linux, `~/Library/Application
//!    Support/kakeibo` on macOS, `%APPDATA%\kakeibo\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::KakeiboError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "KAKEIBO_DATA_DIR";

/// Manages all paths used by Kakeibo
#[derive(Debug, Clone)]
pub struct KakeiboPaths {
    base_dir: PathBuf,
}

impl KakeiboPaths {
    /// Resolve the base directory from the environment or the platform default
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, KakeiboError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
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

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Create the base directory if it does not exist yet
    pub fn ensure_directories(&self) -> Result<(), KakeiboError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| KakeiboError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if Kakeibo has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, KakeiboError> {
    ProjectDirs::from("", "", "kakeibo")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| KakeiboError::Config("Could not determine a home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KakeiboPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();

        env::set_var(DATA_DIR_ENV, temp_dir.path());
        let paths = KakeiboPaths::new().unwrap();
        env::remove_var(DATA_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KakeiboPaths::with_base_dir(temp_dir.path().join("nested").join("kakeibo"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
    }
}
