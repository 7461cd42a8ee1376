//! Domain errors for the sitegenome engagement engine.

use thiserror::Error;

/// Domain-level errors that can occur in the engagement engine.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Website profile not found: {0}")]
    ProfileNotFound(uuid::Uuid),

    #[error("Daily task not found: {0}")]
    TaskNotFound(uuid::Uuid),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Concurrency conflict: {entity} {id} was modified")]
    ConcurrencyConflict { entity: String, id: String },

    #[error("Notification failed: {0}")]
    NotificationFailed(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        DomainError::DatabaseError(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}
