use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use respawn_core::types::{Timestamp, Username};
use tokio::sync::RwLock;
use uuid::Uuid;

/// A logged-in clan member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Opaque id carried in the session cookie.
    pub id: String,
    pub username: Username,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
}

impl Session {
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        self.expires_at <= now
    }
}

/// In-memory session registry.
///
/// Sessions do not survive a restart; members simply log in again.
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc`.
pub struct SessionManager {
    sessions: RwLock<HashMap<String, Session>>,
    ttl: Duration,
}

impl SessionManager {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Start a session for an already-authenticated user.
    pub async fn create(&self, username: &str) -> Session {
        let now = Utc::now();
        let session = Session {
            id: Uuid::new_v4().simple().to_string(),
            username: username.to_string(),
            created_at: now,
            expires_at: now
                .checked_add_signed(self.ttl)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        };
        self.sessions
            .write()
            .await
            .insert(session.id.clone(), session.clone());
        tracing::info!(username, "Session created");
        session
    }

    /// Look up a live session. Expired sessions are dropped and reported as absent.
    pub async fn get(&self, id: &str) -> Option<Session> {
        let now = Utc::now();
        {
            let sessions = self.sessions.read().await;
            match sessions.get(id) {
                None => return None,
                Some(session) if !session.is_expired_at(now) => return Some(session.clone()),
                Some(_) => {}
            }
        }

        if let Some(expired) = self.sessions.write().await.remove(id) {
            tracing::debug!(username = %expired.username, "Session expired");
        }
        None
    }

    /// End a session. Unknown ids are ignored.
    pub async fn remove(&self, id: &str) -> Option<Session> {
        let removed = self.sessions.write().await.remove(id);
        if let Some(session) = &removed {
            tracing::info!(username = %session.username, "Session ended");
        }
        removed
    }

    /// Drop every session that has expired. Returns how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired_at(now));
        before - sessions.len()
    }

    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
