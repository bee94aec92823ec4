//! Periodic removal of expired login sessions.
//!
//! Expired sessions are already ignored on lookup; this job keeps the map
//! from growing with sessions whose owners never come back.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::auth::session::SessionManager;

/// How often the purge job runs.
pub const PURGE_INTERVAL: Duration = Duration::from_secs(300); // 5 minutes

/// Run the session purge loop until `cancel` is triggered.
pub async fn run(sessions: Arc<SessionManager>, period: Duration, cancel: CancellationToken) {
    tracing::info!(interval_secs = period.as_secs(), "Session purge job started");

    let mut interval = tokio::time::interval(period);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Session purge job stopping");
                break;
            }
            _ = interval.tick() => {
                let purged = sessions.purge_expired().await;
                if purged > 0 {
                    tracing::info!(purged, "Session purge: removed expired sessions");
                } else {
                    tracing::debug!("Session purge: nothing to remove");
                }
            }
        }
    }
}
