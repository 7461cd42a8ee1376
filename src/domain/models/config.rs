use serde::{Deserialize, Serialize};

/// Main configuration structure for sitegenome
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Engagement features run after each completed analysis
    #[serde(default)]
    pub gamification: GamificationConfig,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DatabaseConfig {
    /// Path to `SQLite` database file
    #[serde(default = "default_database_path")]
    pub path: String,

    /// Maximum number of database connections in pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_database_path() -> String {
    ".sitegenome/sitegenome.db".to_string()
}

const fn default_max_connections() -> u32 {
    5
}

impl DatabaseConfig {
    /// sqlx connection URL for the configured path.
    pub fn url(&self) -> String {
        format!("sqlite:{}", self.path)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
            max_connections: default_max_connections(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files; stderr only when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<String>,

    /// File rotation: daily, hourly or never
    #[serde(default = "default_rotation")]
    pub rotation: String,

    /// Number of days to retain logs
    #[serde(default = "default_retention_days")]
    pub retention_days: u32,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

const fn default_retention_days() -> u32 {
    30
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_rotation(),
            retention_days: default_retention_days(),
        }
    }
}

/// Gamification feature switches
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GamificationConfig {
    /// Maximum suggestions generated per daily batch (1-5)
    #[serde(default = "default_max_daily_tasks")]
    pub max_daily_tasks: usize,

    #[serde(default = "default_true")]
    pub streaks_enabled: bool,

    #[serde(default = "default_true")]
    pub tasks_enabled: bool,

    #[serde(default = "default_true")]
    pub badges_enabled: bool,
}

const fn default_max_daily_tasks() -> usize {
    2
}

const fn default_true() -> bool {
    true
}

impl Default for GamificationConfig {
    fn default() -> Self {
        Self {
            max_daily_tasks: default_max_daily_tasks(),
            streaks_enabled: true,
            tasks_enabled: true,
            badges_enabled: true,
        }
    }
}
