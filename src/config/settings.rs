//! User settings for Kakeibo
//!
//! Holds the fiscal-year start month and display preferences. Every field has
//! a default so older or hand-written config files keep loading.

use serde::{Deserialize, Serialize};

use super::paths::KakeiboPaths;
use crate::error::KakeiboError;
use crate::models::money::DEFAULT_CURRENCY_SYMBOL;
use crate::models::FiscalStartMonth;
use crate::storage::write_json_atomic;

/// User settings for Kakeibo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Month the fiscal year starts on (1-12)
    #[serde(default)]
    pub fiscal_start_month: FiscalStartMonth,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Default `tracing` filter directive, overridden by `KAKEIBO_LOG`
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_log_filter() -> String {
    "kakeibo=warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            fiscal_start_month: FiscalStartMonth::default(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    ///
    /// Defaults are not written back; call [`Settings::save`] for that.
    pub fn load_or_create(paths: &KakeiboPaths) -> Result<Self, KakeiboError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| KakeiboError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| KakeiboError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &KakeiboPaths) -> Result<(), KakeiboError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Replace the fiscal start month, e.g. from a command-line override
    pub fn with_fiscal_start_month(mut self, month: Option<FiscalStartMonth>) -> Self {
        if let Some(month) = month {
            self.fiscal_start_month = month;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.fiscal_start_month, FiscalStartMonth::APRIL);
        assert_eq!(settings.currency_symbol, "¥");
        assert_eq!(settings.log_filter, "kakeibo=warn");
    }

    #[test]
    fn test_missing_file_gives_defaults_without_writing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KakeiboPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KakeiboPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.fiscal_start_month = FiscalStartMonth::JANUARY;
        settings.currency_symbol = "$".into();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.fiscal_start_month, FiscalStartMonth::JANUARY);
        assert_eq!(loaded.currency_symbol, "$");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KakeiboPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"fiscal_start_month": 10}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.fiscal_start_month.month(), 10);
        assert_eq!(loaded.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_invalid_fiscal_month_is_a_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = KakeiboPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"fiscal_start_month": 0}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, KakeiboError::Config(_)));
    }

    #[test]
    fn test_override_fiscal_month() {
        let settings = Settings::default().with_fiscal_start_month(Some(FiscalStartMonth::JANUARY));
        assert_eq!(settings.fiscal_start_month, FiscalStartMonth::JANUARY);

        let unchanged = Settings::default().with_fiscal_start_month(None);
        assert_eq!(unchanged.fiscal_start_month, FiscalStartMonth::APRIL);
    }
}
