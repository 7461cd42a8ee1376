//! Notifier that emits badge announcements as structured log events.

use async_trait::async_trait;
use tracing::info;

use crate::domain::errors::DomainResult;
use crate::domain::models::BadgeNotification;
use crate::domain::ports::Notifier;

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

#[async_trait]
impl Notifier for TracingNotifier {
    async fn notify(&self, notification: &BadgeNotification) -> DomainResult<()> {
        info!(
            user_id = %notification.user_id,
            badge_id = %notification.badge_id,
            glyph = %notification.glyph,
            "badge unlocked: {}",
            notification.title
        );
        Ok(())
    }
}
