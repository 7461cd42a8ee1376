//! Domain layer for the sitegenome engagement engine
//!
//! Core models, invariants and the port traits that adapters implement.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{DomainError, DomainResult};
