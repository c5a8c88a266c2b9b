//! Layered configuration.
//!
//! Sources, lowest precedence first: built-in defaults,
//! `<config_dir>/likeboard/likeboard.toml`, `./likeboard.toml`, the file
//! given with `--config`, then `LIKEBOARD_*` environment variables.

use config::{Config, Environment, File};
use likeboard_core::{Platform, UserRole};
use likeboard_error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

/// Prefix of environment overrides, e.g. `LIKEBOARD_DATA_FILE`.
pub const ENV_PREFIX: &str = "LIKEBOARD";

const CONFIG_FILE: &str = "likeboard.toml";
const LOG_FILE: &str = "likeboard.log";

/// Runtime settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct LikeboardConfig {
    /// JSON file holding all posts
    data_file: PathBuf,
    /// Role used when `--role` is not given
    default_role: String,
    /// Tab shown when the dashboard opens
    default_platform: String,
    /// Log filter used when `RUST_LOG` is unset
    log_level: String,
    /// Dashboard refresh interval in milliseconds
    tick_rate_ms: u64,
    /// Load the demonstration posts when the dashboard opens on an empty store
    seed_on_empty: bool,
    /// Show the moderator rules the first time the dashboard runs
    show_rules_on_first_launch: bool,
}

impl LikeboardConfig {
    /// Load configuration from every source.
    ///
    /// # Errors
    ///
    /// Returns an error if `explicit` is missing or any source is malformed.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(explicit, Environment::with_prefix(ENV_PREFIX))
    }

    /// Load configuration with a caller-supplied environment source.
    pub fn load_with_env(explicit: Option<&Path>, env: Environment) -> Result<Self, ConfigError> {
        let data_file = default_data_dir().join("posts.json");
        let mut builder = Config::builder()
            .set_default("data_file", data_file.to_string_lossy().to_string())
            .and_then(|b| b.set_default("default_role", "admin"))
            .and_then(|b| b.set_default("default_platform", "facebook"))
            .and_then(|b| b.set_default("log_level", "info"))
            .and_then(|b| b.set_default("tick_rate_ms", 250))
            .and_then(|b| b.set_default("seed_on_empty", true))
            .and_then(|b| b.set_default("show_rules_on_first_launch", true))
            .map_err(|e| ConfigError::new(format!("Invalid default: {}", e)))?;

        if let Some(dir) = dirs::config_dir() {
            builder = builder
                .add_source(File::from(dir.join("likeboard").join(CONFIG_FILE)).required(false));
        }
        builder = builder.add_source(File::from(PathBuf::from(CONFIG_FILE)).required(false));

        if let Some(path) = explicit {
            debug!(path = %path.display(), "Using explicit config file");
            builder = builder.add_source(File::from(path.to_path_buf()).required(true));
        }

        let config: Self = builder
            .add_source(env.try_parsing(true))
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| ConfigError::new(format!("Failed to load configuration: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would fail later.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.role()?;
        self.platform()?;
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::new("tick_rate_ms must be greater than 0"));
        }
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::new("log_level must not be empty"));
        }
        Ok(())
    }

    /// Parsed default role.
    pub fn role(&self) -> Result<UserRole, ConfigError> {
        UserRole::from_str(&self.default_role)
            .map_err(|_| ConfigError::new(format!("Unknown role '{}'", self.default_role)))
    }

    /// Parsed default platform.
    pub fn platform(&self) -> Result<Platform, ConfigError> {
        Platform::parse(&self.default_platform)
            .map_err(|e| ConfigError::new(e.kind.to_string()))
    }

    /// Dashboard refresh interval.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Log file for the dashboard, next to the data file.
    pub fn log_file(&self) -> PathBuf {
        match self.data_file.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.join(LOG_FILE),
            _ => PathBuf::from(LOG_FILE),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("likeboard"))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    #[test]
    fn test_defaults() {
        let config = LikeboardConfig::load_with_env(None, env(&[])).unwrap();
        assert_eq!(config.role().unwrap(), UserRole::Admin);
        assert_eq!(config.platform().unwrap(), Platform::Facebook);
        assert_eq!(config.tick_rate(), Duration::from_millis(250));
        assert!(config.data_file().ends_with("posts.json"));
    }

    #[test]
    fn test_env_overrides() {
        let config = LikeboardConfig::load_with_env(
            None,
            env(&[
                ("LIKEBOARD_DEFAULT_ROLE", "moderator"),
                ("LIKEBOARD_TICK_RATE_MS", "100"),
                ("LIKEBOARD_SEED_ON_EMPTY", "false"),
                ("LIKEBOARD_DATA_FILE", "/tmp/lb/posts.json"),
            ]),
        )
        .unwrap();
        assert_eq!(config.role().unwrap(), UserRole::Moderator);
        assert_eq!(*config.tick_rate_ms(), 100);
        assert!(!config.seed_on_empty());
        assert_eq!(config.log_file(), PathBuf::from("/tmp/lb/likeboard.log"));
    }

    #[test]
    fn test_unknown_role_rejected() {
        let err = LikeboardConfig::load_with_env(None, env(&[("LIKEBOARD_DEFAULT_ROLE", "owner")]))
            .unwrap_err();
        assert!(err.message.contains("owner"));
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        assert!(
            LikeboardConfig::load_with_env(None, env(&[("LIKEBOARD_TICK_RATE_MS", "0")])).is_err()
        );
    }
}
