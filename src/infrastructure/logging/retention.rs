//! Retention cleanup for rolled log files

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use std::path::Path;
use tracing::{debug, info};

use super::logger::LOG_FILE_PREFIX;

/// Delete rolled log files in `log_dir` last modified before the retention window.
///
/// Only files whose name starts with the application log prefix are touched.
/// Returns the number of files removed.
pub async fn prune_expired_logs(log_dir: impl AsRef<Path>, retention_days: u32) -> Result<usize> {
    let log_dir = log_dir.as_ref();

    if !log_dir.exists() {
        return Ok(0);
    }

    let cutoff = Utc::now() - Duration::days(i64::from(retention_days));
    let mut removed = 0;

    let mut entries = tokio::fs::read_dir(log_dir)
        .await
        .context("failed to read log directory")?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .context("failed to read directory entry")?
    {
        let path = entry.path();
        let is_log = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(LOG_FILE_PREFIX));
        if !is_log {
            continue;
        }

        let modified: DateTime<Utc> = entry
            .metadata()
            .await
            .context("failed to get file metadata")?
            .modified()
            .context("failed to get file modification time")?
            .into();

        if modified < cutoff {
            tokio::fs::remove_file(&path)
                .await
                .with_context(|| format!("failed to delete {}", path.display()))?;
            debug!(path = %path.display(), "deleted expired log file");
            removed += 1;
        }
    }

    if removed > 0 {
        info!(count = removed, retention_days, "pruned expired log files");
    }

    Ok(removed)
}
