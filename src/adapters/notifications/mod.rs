//! Notifier adapters for surfacing unlocked badges.

pub mod collecting;
pub mod tracing_notifier;

pub use collecting::CollectingNotifier;
pub use tracing_notifier::TracingNotifier;
