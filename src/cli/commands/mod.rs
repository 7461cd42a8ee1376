//! CLI command implementations.

pub mod analysis;
pub mod badges;
pub mod init;
pub mod streak;
pub mod tasks;
