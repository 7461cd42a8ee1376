use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::models::LoggingConfig;

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format (json, pretty)
    #[serde(default = "default_format")]
    pub format: LogFormat,

    /// Directory for log files (optional, if None logs only to stderr)
    pub log_dir: Option<PathBuf>,

    /// Enable terminal logging on stderr
    #[serde(default = "default_true")]
    pub enable_terminal: bool,

    /// Log rotation policy
    #[serde(default)]
    pub rotation: RotationPolicy,

    /// Days to keep rotated log files
    #[serde(default = "default_retention_days")]
    pub retention_days: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RotationPolicy {
    #[default]
    Daily,
    Hourly,
    Never,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            log_dir: None,
            enable_terminal: true,
            rotation: RotationPolicy::default(),
            retention_days: default_retention_days(),
        }
    }
}

impl From<&LoggingConfig> for LogConfig {
    fn from(config: &LoggingConfig) -> Self {
        let format = match config.format.as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        };
        let rotation = match config.rotation.as_str() {
            "hourly" => RotationPolicy::Hourly,
            "never" => RotationPolicy::Never,
            _ => RotationPolicy::Daily,
        };

        Self {
            level: config.level.clone(),
            format,
            log_dir: config.log_dir.as_ref().map(PathBuf::from),
            enable_terminal: true,
            rotation,
            retention_days: config.retention_days,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

const fn default_format() -> LogFormat {
    LogFormat::Pretty
}

const fn default_retention_days() -> u32 {
    30
}

const fn default_true() -> bool {
    true
}
