//! User-facing notification port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::BadgeNotification;

/// Surfaces newly unlocked badges to the user (toast, log line, etc.).
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: &BadgeNotification) -> DomainResult<()>;
}
