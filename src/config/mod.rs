//! Configuration management for the travelog application.
//!
//! This module loads and validates configuration settings from environment
//! variables, with sensible defaults. Command-line flags override what is
//! loaded here (see `main.rs`).
//!
//! # Environment Variables
//!
//! - `TRAVELOG_SEED_FILE`: JSON snapshot to start from instead of the built-in data
//! - `TRAVELOG_RETENTION_DAYS`: Days a trashed entry is kept (defaults to 30)
//! - `TRAVELOG_LOG_FORMAT`: `text` or `json` (defaults to `text`)
//! - `TRAVELOG_ASSUME_YES`: `1` or `true` confirms destructive operations without asking

use crate::constants::{
    DEFAULT_TRASH_RETENTION_DAYS, ENV_VAR_ASSUME_YES, ENV_VAR_LOG_FORMAT, ENV_VAR_RETENTION_DAYS,
    ENV_VAR_SEED_FILE, LOG_FORMAT_JSON, LOG_FORMAT_TEXT, MAX_TRASH_RETENTION_DAYS,
    REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use chrono::Duration;
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the travelog application.
///
/// # Examples
///
/// ```
/// use travelog::Config;
///
/// let config = Config::default();
/// assert_eq!(config.retention_days, 30);
/// assert!(config.validate().is_ok());
/// ```
pub struct Config {
    /// Seed snapshot to load; `None` starts from the built-in dataset.
    pub seed_file: Option<PathBuf>,

    /// Days a trashed entry is kept before it counts as expired.
    pub retention_days: i64,

    /// Log output format, `text` or `json`.
    pub log_format: String,

    /// Confirm destructive operations without prompting.
    pub assume_yes: bool,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field(
                "seed_file",
                &self.seed_file.as_ref().map(|_| REDACTED_PLACEHOLDER),
            )
            .field("retention_days", &self.retention_days)
            .field("log_format", &self.log_format)
            .field("assume_yes", &self.assume_yes)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed_file: None,
            retention_days: DEFAULT_TRASH_RETENTION_DAYS,
            log_format: LOG_FORMAT_TEXT.to_string(),
            assume_yes: false,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The seed path is expanded with `shellexpand`, so `~` and `$VAR`
    /// references work.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The seed path cannot be expanded
    /// - The retention period is not a whole number
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use travelog::Config;
    ///
    /// match Config::load() {
    ///     Ok(config) => println!("Trash keeps entries for {} days", config.retention_days),
    ///     Err(err) => eprintln!("Failed to load config: {}", err),
    /// }
    /// ```
    pub fn load() -> AppResult<Self> {
        let seed_file = match env::var(ENV_VAR_SEED_FILE) {
            Ok(raw) if !raw.trim().is_empty() => {
                let expanded = shellexpand::full(raw.trim())
                    .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;
                Some(PathBuf::from(expanded.into_owned()))
            }
            _ => None,
        };

        let retention_days = match env::var(ENV_VAR_RETENTION_DAYS) {
            Ok(raw) => raw.trim().parse::<i64>().map_err(|_| {
                AppError::Config(format!(
                    "{} must be a whole number of days, got '{}'",
                    ENV_VAR_RETENTION_DAYS, raw
                ))
            })?,
            Err(_) => DEFAULT_TRASH_RETENTION_DAYS,
        };

        let log_format = env::var(ENV_VAR_LOG_FORMAT)
            .map(|raw| raw.trim().to_lowercase())
            .unwrap_or_else(|_| LOG_FORMAT_TEXT.to_string());

        let assume_yes = env::var(ENV_VAR_ASSUME_YES)
            .map(|raw| matches!(raw.trim().to_lowercase().as_str(), "1" | "true"))
            .unwrap_or(false);

        Ok(Config {
            seed_file,
            retention_days,
            log_format,
            assume_yes,
        })
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` with one of the following messages:
    /// - "Trash retention must be at least one day"
    /// - "Trash retention cannot exceed ... days"
    /// - "Unknown log format ..." for anything but `text` or `json`
    /// - "Seed file path is empty"
    pub fn validate(&self) -> AppResult<()> {
        self.retention()?;

        if self.log_format != LOG_FORMAT_TEXT && self.log_format != LOG_FORMAT_JSON {
            return Err(AppError::Config(format!(
                "Unknown log format '{}' (expected {} or {})",
                self.log_format, LOG_FORMAT_TEXT, LOG_FORMAT_JSON
            )));
        }

        if let Some(path) = &self.seed_file {
            if path.as_os_str().is_empty() {
                return Err(AppError::Config("Seed file path is empty".to_string()));
            }
        }

        Ok(())
    }

    /// The trash retention window.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when `retention_days` is below one or above
    /// `MAX_TRASH_RETENTION_DAYS`.
    pub fn retention(&self) -> AppResult<Duration> {
        if self.retention_days < 1 {
            return Err(AppError::Config(
                "Trash retention must be at least one day".to_string(),
            ));
        }
        if self.retention_days > MAX_TRASH_RETENTION_DAYS {
            return Err(AppError::Config(format!(
                "Trash retention cannot exceed {} days, got {}",
                MAX_TRASH_RETENTION_DAYS, self.retention_days
            )));
        }
        Ok(Duration::days(self.retention_days))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use tempfile::tempdir;

    fn setup() {
        env::remove_var(ENV_VAR_SEED_FILE);
        env::remove_var(ENV_VAR_RETENTION_DAYS);
        env::remove_var(ENV_VAR_LOG_FORMAT);
        env::remove_var(ENV_VAR_ASSUME_YES);
    }

    #[test]
    fn test_debug_impl_redacts_seed_path() {
        let config = Config {
            seed_file: Some(PathBuf::from("/home/username/private/trip.json")),
            ..Config::default()
        };

        let debug_output = format!("{:?}", config);

        assert!(debug_output.contains(REDACTED_PLACEHOLDER));
        assert!(!debug_output.contains("/home/username/private/trip.json"));
    }

    #[test]
    #[serial]
    fn test_load_defaults() {
        setup();

        let config = Config::load().unwrap();

        assert!(config.seed_file.is_none());
        assert_eq!(config.retention_days, 30);
        assert_eq!(config.log_format, "text");
        assert!(!config.assume_yes);
        assert_eq!(config.retention().unwrap(), Duration::days(30));
    }

    #[test]
    #[serial]
    fn test_load_reads_environment() {
        setup();
        let temp_dir = tempdir().unwrap();
        let seed_path = temp_dir.path().join("seed.json");

        env::set_var(ENV_VAR_SEED_FILE, seed_path.to_string_lossy().to_string());
        env::set_var(ENV_VAR_RETENTION_DAYS, "7");
        env::set_var(ENV_VAR_LOG_FORMAT, "JSON");
        env::set_var(ENV_VAR_ASSUME_YES, "true");
        let config = Config::load().unwrap();
        setup();

        assert_eq!(config.seed_file, Some(seed_path));
        assert_eq!(config.retention_days, 7);
        assert_eq!(config.log_format, "json");
        assert!(config.assume_yes);
    }

    #[test]
    #[serial]
    fn test_load_expands_seed_path() {
        setup();
        let orig_home = env::var("HOME").ok();
        env::set_var("HOME", "/tmp/travelog-home");
        env::set_var(ENV_VAR_SEED_FILE, "~/seed.json");

        let config = Config::load().unwrap();

        setup();
        match orig_home {
            Some(val) => env::set_var("HOME", val),
            None => env::remove_var("HOME"),
        }
        assert_eq!(
            config.seed_file,
            Some(PathBuf::from("/tmp/travelog-home/seed.json"))
        );
    }

    #[test]
    #[serial]
    fn test_load_rejects_non_numeric_retention() {
        setup();
        env::set_var(ENV_VAR_RETENTION_DAYS, "a month");

        let result = Config::load();
        setup();

        match result {
            Err(AppError::Config(message)) => assert!(message.contains("whole number")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_zero_retention() {
        let config = Config {
            retention_days: 0,
            ..Config::default()
        };

        match config.validate() {
            Err(AppError::Config(message)) => assert!(message.contains("at least one day")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_oversized_retention_is_an_error_not_a_panic() {
        let config = Config {
            retention_days: 200_000_000_000,
            ..Config::default()
        };

        match config.validate() {
            Err(AppError::Config(message)) => assert!(message.contains("cannot exceed 36500 days")),
            other => panic!("Expected Config error, got {:?}", other),
        }
        assert!(matches!(config.retention(), Err(AppError::Config(_))));

        let longest = Config {
            retention_days: MAX_TRASH_RETENTION_DAYS,
            ..Config::default()
        };
        assert_eq!(longest.retention().unwrap().num_days(), 36_500);
    }

    #[test]
    fn test_validate_rejects_unknown_log_format() {
        let config = Config {
            log_format: "xml".to_string(),
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_seed_path() {
        let config = Config {
            seed_file: Some(PathBuf::new()),
            ..Config::default()
        };

        match config.validate() {
            Err(AppError::Config(message)) => assert!(message.contains("Seed file path is empty")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
