//! Environment-driven runtime settings.
//!
//! # Invariants
//! - Blank or missing variables fall back to defaults; config loading never
//!   fails.
//! - Default paths live under the OS temp directory, which is absolute.

use feedback_survey_core::default_log_level;
use feedback_survey_core::store::DATABASE_NAME;
use std::path::PathBuf;

pub const DB_PATH_VAR: &str = "FEEDBACK_SURVEY_DB_PATH";
pub const LOG_LEVEL_VAR: &str = "FEEDBACK_SURVEY_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "FEEDBACK_SURVEY_LOG_DIR";

const LOG_DIR_NAME: &str = "feedback_survey_logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite file holding both collections.
    pub db_path: PathBuf,
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            db_path: non_blank(DB_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| std::env::temp_dir().join(format!("{DATABASE_NAME}.sqlite3"))),
            log_level: non_blank(LOG_LEVEL_VAR)
                .unwrap_or_else(|| default_log_level().to_string()),
            log_dir: non_blank(LOG_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| std::env::temp_dir().join(LOG_DIR_NAME)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, DB_PATH_VAR, LOG_DIR_VAR, LOG_LEVEL_VAR};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect::<HashMap<_, _>>();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_use_temp_dir() {
        let config = config_from(&[]);
        assert_eq!(
            config.db_path,
            std::env::temp_dir().join("feedback_system.sqlite3")
        );
        assert!(config.log_dir.is_absolute());
        assert!(!config.log_level.is_empty());
    }

    #[test]
    fn explicit_values_are_trimmed() {
        let config = config_from(&[
            (DB_PATH_VAR, " /var/lib/fs/feedback.db "),
            (LOG_LEVEL_VAR, "warn"),
            (LOG_DIR_VAR, "/var/log/fs"),
        ]);
        assert_eq!(config.db_path, PathBuf::from("/var/lib/fs/feedback.db"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, PathBuf::from("/var/log/fs"));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = config_from(&[(DB_PATH_VAR, "   "), (LOG_LEVEL_VAR, "")]);
        assert_eq!(config, config_from(&[]));
    }
}
