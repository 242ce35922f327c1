//! Application configuration.
//!
//! Loaded from a TOML file, then overridden by `ROSTER_*` environment
//! variables, then by command-line flags. [`AppConfig::validate`] reports
//! every problem at once.

use adapter_catalog::{DEFAULT_BASE_URL, DEFAULT_LIST_LIMIT};
use roster_core::ordering::RosterOrder;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "slayer-roster.toml";

/// Largest roster page accepted.
pub const MAX_LIST_LIMIT: usize = 1000;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Catalog base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Roster page size
    #[serde(default = "default_list_limit")]
    pub list_limit: usize,

    /// Roster ordering
    #[serde(default)]
    pub roster_order: RosterOrder,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log file path
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_list_limit() -> usize {
    DEFAULT_LIST_LIMIT
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> PathBuf {
    std::env::temp_dir().join("slayer-roster.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            list_limit: default_list_limit(),
            roster_order: RosterOrder::default(),
            log_level: default_log_level(),
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load `path` if it exists, otherwise return defaults.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `ROSTER_*` overrides read through `lookup`.
    ///
    /// Values that do not parse are reported together instead of being
    /// ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut errors = Vec::new();

        if let Some(base_url) = lookup("ROSTER_BASE_URL") {
            self.base_url = base_url;
        }

        if let Some(limit) = lookup("ROSTER_LIST_LIMIT") {
            match limit.trim().parse() {
                Ok(limit) => self.list_limit = limit,
                Err(e) => errors.push(format!("ROSTER_LIST_LIMIT '{}': {}", limit, e)),
            }
        }

        if let Some(order) = lookup("ROSTER_ORDER") {
            match order.parse() {
                Ok(order) => self.roster_order = order,
                Err(e) => errors.push(format!("ROSTER_ORDER: {}", e)),
            }
        }

        if let Some(log_level) = lookup("ROSTER_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Some(log_file) = lookup("ROSTER_LOG_FILE") {
            self.log_file = PathBuf::from(log_file);
        }

        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            errors.push(format!(
                "Invalid base_url '{}'. Must start with http:// or https://",
                self.base_url
            ));
        }

        if self.list_limit == 0 {
            errors.push("list_limit must be greater than 0".to_string());
        }
        if self.list_limit > MAX_LIST_LIMIT {
            errors.push(format!(
                "list_limit {} exceeds maximum allowed ({})",
                self.list_limit, MAX_LIST_LIMIT
            ));
        }

        if self.log_file.as_os_str().is_empty() {
            errors.push("log_file cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Directive string for the tracing filter.
    pub fn log_directives(&self) -> String {
        let level = self.log_level.to_lowercase();
        ["service_tui", "adapter_catalog", "roster_core"]
            .iter()
            .map(|target| format!("{}={}", target, level))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Configuration error type
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.base_url, "https://www.demonslayer-api.com/api/v1");
        assert_eq!(config.list_limit, 45);
        assert_eq!(config.roster_order, RosterOrder::Catalog);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "list_limit = 10\nroster_order = \"catalog\"").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.list_limit, 10);
        assert_eq!(config.roster_order, RosterOrder::Catalog);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "list_limit = \"many\"").unwrap();

        assert!(matches!(
            AppConfig::load(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(AppConfig::load(&missing), Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.list_limit, 45);
    }

    #[test]
    fn test_env_override() {
        std::env::set_var("ROSTER_LIST_LIMIT", "12");
        std::env::set_var("ROSTER_ORDER", "catalog");
        let config = AppConfig::default().with_env_override();
        std::env::remove_var("ROSTER_LIST_LIMIT");
        std::env::remove_var("ROSTER_ORDER");

        let config = config.unwrap();
        assert_eq!(config.list_limit, 12);
        assert_eq!(config.roster_order, RosterOrder::Catalog);
    }

    fn overrides<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_overrides_apply_every_field() {
        let config = AppConfig::default()
            .with_overrides(overrides(&[
                ("ROSTER_BASE_URL", "http://localhost:8080/api"),
                ("ROSTER_LIST_LIMIT", " 7 "),
                ("ROSTER_ORDER", "alphabetical"),
                ("ROSTER_LOG_LEVEL", "debug"),
                ("ROSTER_LOG_FILE", "/var/log/roster.log"),
            ]))
            .unwrap();

        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.list_limit, 7);
        assert_eq!(config.roster_order, RosterOrder::Alphabetical);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_file, PathBuf::from("/var/log/roster.log"));
    }

    #[test]
    fn test_unparseable_overrides_are_reported() {
        let result = AppConfig::default().with_overrides(overrides(&[
            ("ROSTER_LIST_LIMIT", "forty"),
            ("ROSTER_ORDER", "random"),
        ]));

        match result {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 2);
                assert!(errors[0].contains("ROSTER_LIST_LIMIT 'forty'"));
                assert!(errors[1].contains("unknown roster order 'random'"));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let config = AppConfig::default().with_overrides(|_| None).unwrap();
        assert_eq!(config.list_limit, DEFAULT_LIST_LIMIT);
        assert_eq!(config.roster_order, RosterOrder::default());
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let mut config = AppConfig::default();
        config.log_level = "loud".to_string();

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert!(errors.iter().any(|e| e.contains("log_level")))
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_invalid_base_url() {
        let mut config = AppConfig::default();
        config.base_url = "ftp://catalog".to_string();

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert!(errors.iter().any(|e| e.contains("base_url")))
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_limit_bounds() {
        let mut config = AppConfig::default();
        config.list_limit = 0;
        assert!(config.validate().is_err());

        config.list_limit = MAX_LIST_LIMIT + 1;
        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert!(errors.iter().any(|e| e.contains("exceeds maximum")))
            }
            other => panic!("Expected validation error, got {:?}", other),
        }

        config.list_limit = MAX_LIST_LIMIT;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_multiple_errors() {
        let mut config = AppConfig::default();
        config.log_level = "invalid".to_string();
        config.base_url = "bad-url".to_string();
        config.list_limit = 0;
        config.log_file = PathBuf::new();

        match config.validate() {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 4),
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_log_directives() {
        let mut config = AppConfig::default();
        config.log_level = "DEBUG".to_string();
        assert_eq!(
            config.log_directives(),
            "service_tui=debug,adapter_catalog=debug,roster_core=debug"
        );
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::Validation(vec!["Error 1".to_string(), "Error 2".to_string()]);
        assert_eq!(error.to_string(), "Validation errors: Error 1; Error 2");
    }
}
