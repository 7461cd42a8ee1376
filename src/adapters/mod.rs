//! Infrastructure adapters for external systems.

pub mod notifications;
pub mod sqlite;
