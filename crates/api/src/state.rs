use std::sync::Arc;

use respawn_core::catalog::BossCatalog;
use respawn_core::credentials::CredentialTable;
use respawn_db::TimerStore;

use crate::auth::session::SessionManager;
use crate::config::ServerConfig;
use crate::views::Views;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (catalog and credentials live here too).
    pub config: Arc<ServerConfig>,
    /// Whole-file timer store.
    pub store: Arc<TimerStore>,
    /// Active login sessions.
    pub sessions: Arc<SessionManager>,
    /// Compiled page templates.
    pub views: Arc<Views>,
}

impl AppState {
    /// Build state from configuration, opening the configured timer file.
    pub fn new(config: ServerConfig) -> Result<Self, handlebars::TemplateError> {
        let store = respawn_db::create_store(config.timers_file.clone());
        let sessions = SessionManager::new(config.session_ttl);
        let views = Views::new()?;

        Ok(Self {
            config: Arc::new(config),
            store: Arc::new(store),
            sessions: Arc::new(sessions),
            views: Arc::new(views),
        })
    }

    pub fn catalog(&self) -> &BossCatalog {
        &self.config.catalog
    }

    pub fn credentials(&self) -> &CredentialTable {
        &self.config.credentials
    }
}
