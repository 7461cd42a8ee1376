//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON or compact human-readable output on stderr
//! - Optional rolling JSON file output with retention cleanup

pub mod config;
pub mod logger;
pub mod retention;

pub use config::{LogConfig, LogFormat, RotationPolicy};
pub use logger::LoggerImpl;
pub use retention::prune_expired_logs;
