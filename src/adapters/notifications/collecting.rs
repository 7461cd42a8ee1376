//! In-memory notifier that keeps every announcement it receives.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::errors::DomainResult;
use crate::domain::models::BadgeNotification;
use crate::domain::ports::Notifier;

#[derive(Debug, Clone, Default)]
pub struct CollectingNotifier {
    received: Arc<Mutex<Vec<BadgeNotification>>>,
}

impl CollectingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything received so far.
    pub async fn received(&self) -> Vec<BadgeNotification> {
        self.received.lock().await.clone()
    }

    /// Remove and return everything received so far.
    pub async fn drain(&self) -> Vec<BadgeNotification> {
        std::mem::take(&mut *self.received.lock().await)
    }
}

#[async_trait]
impl Notifier for CollectingNotifier {
    async fn notify(&self, notification: &BadgeNotification) -> DomainResult<()> {
        self.received.lock().await.push(notification.clone());
        Ok(())
    }
}
