use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidLogRotation(String),

    #[error("Database path cannot be empty")]
    EmptyDatabasePath,

    #[error("Invalid max_connections: {0}. Must be at least 1")]
    InvalidMaxConnections(u32),

    #[error("Invalid max_daily_tasks: {0}. Must be between 1 and 5")]
    InvalidMaxDailyTasks(usize),
}

/// Directory holding project-local configuration and data.
pub const CONFIG_DIR: &str = ".sitegenome";

/// Prefix for environment overrides, e.g. `SITEGENOME_LOGGING__LEVEL`.
pub const ENV_PREFIX: &str = "SITEGENOME_";

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .sitegenome/config.yaml (project config, created by init)
    /// 3. .sitegenome/local.yaml (project local overrides, optional)
    /// 4. Environment variables (SITEGENOME_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Self::figment()
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(format!("{CONFIG_DIR}/config.yaml")))
            .merge(Yaml::file(format!("{CONFIG_DIR}/local.yaml")))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.as_ref().display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.database.path.is_empty() {
            return Err(ConfigError::EmptyDatabasePath);
        }

        if config.database.max_connections == 0 {
            return Err(ConfigError::InvalidMaxConnections(config.database.max_connections));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&config.logging.rotation.as_str()) {
            return Err(ConfigError::InvalidLogRotation(config.logging.rotation.clone()));
        }

        if !(1..=5).contains(&config.gamification.max_daily_tasks) {
            return Err(ConfigError::InvalidMaxDailyTasks(config.gamification.max_daily_tasks));
        }

        Ok(())
    }
}
