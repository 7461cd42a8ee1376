//! Infrastructure layer module
//!
//! Process-level concerns shared by the CLI and library callers:
//! - Configuration management (figment)
//! - Logging infrastructure (tracing-subscriber, tracing-appender)

pub mod config;
pub mod logging;
