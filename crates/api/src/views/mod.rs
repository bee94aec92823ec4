//! Server-rendered HTML pages.
//!
//! Templates are compiled once at startup into a [`Views`] registry held in
//! [`crate::state::AppState`]. Each page has a serializable model whose field
//! names match the placeholders in [`templates`].

pub mod templates;

use handlebars::{Handlebars, RenderError, TemplateError};
use respawn_core::catalog::BossDefinition;
use respawn_core::time_format::{format_display, format_form_input};
use respawn_core::timer::{DerivedTimerView, TimerBoard, NOT_AVAILABLE};
use respawn_core::types::Timestamp;
use serde::Serialize;

use crate::flash::FlashMessage;

/// Title shown on the dashboard.
pub const DASHBOARD_TITLE: &str = "Boss Respawn Timers";

const DASHBOARD: &str = "dashboard";
const LOGIN: &str = "login";
const RESET: &str = "reset";

/// Compiled page templates.
pub struct Views {
    registry: Handlebars<'static>,
}

impl Views {
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(false);

        registry.register_partial("styles", templates::STYLES)?;
        registry.register_partial("flash", templates::FLASH)?;
        registry.register_partial("userbar", templates::USERBAR)?;
        registry.register_partial("boss_table", templates::BOSS_TABLE)?;
        registry.register_partial("countdown_script", templates::COUNTDOWN_SCRIPT)?;

        registry.register_template_string(DASHBOARD, templates::DASHBOARD)?;
        registry.register_template_string(LOGIN, templates::LOGIN)?;
        registry.register_template_string(RESET, templates::RESET)?;

        Ok(Self { registry })
    }

    pub fn dashboard(&self, page: &DashboardPage) -> Result<String, RenderError> {
        self.registry.render(DASHBOARD, page)
    }

    pub fn login(&self, page: &LoginPage) -> Result<String, RenderError> {
        self.registry.render(LOGIN, page)
    }

    pub fn reset(&self, page: &ResetPage) -> Result<String, RenderError> {
        self.registry.render(RESET, page)
    }
}

// ---------------------------------------------------------------------------
// Page models
// ---------------------------------------------------------------------------

/// One table row on the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct BossRow {
    pub name: String,
    /// `due` or `upcoming`, used as the row's CSS class.
    pub status: &'static str,
    pub last_kill: String,
    pub recorded_by: String,
    pub respawn_at: String,
    pub window_end: String,
    pub respawn_left: String,
    pub window_left: String,
    /// Raw seconds for the client-side countdown; `None` renders empty.
    pub respawn_secs: Option<i64>,
    pub window_secs: Option<i64>,
    pub reset_url: String,
}

impl From<&DerivedTimerView> for BossRow {
    fn from(view: &DerivedTimerView) -> Self {
        Self {
            name: view.name.clone(),
            status: if view.is_due() { "due" } else { "upcoming" },
            last_kill: view.last_kill_display(),
            recorded_by: view
                .recorded_by
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            respawn_at: view.respawn_at_display(),
            window_end: view.window_end_display(),
            respawn_left: view.respawn_display(),
            window_left: view.window_display(),
            respawn_secs: view.respawn_remaining_secs,
            window_secs: view.window_remaining_secs,
            reset_url: reset_path(&view.name),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DashboardPage {
    pub title: &'static str,
    pub user: Option<String>,
    pub flash: Option<FlashMessage>,
    pub due: Vec<BossRow>,
    pub upcoming: Vec<BossRow>,
    pub generated_at: String,
}

impl DashboardPage {
    pub fn new(board: &TimerBoard, user: Option<String>, flash: Option<FlashMessage>) -> Self {
        Self {
            title: DASHBOARD_TITLE,
            user,
            flash,
            due: board.due.iter().map(BossRow::from).collect(),
            upcoming: board.upcoming.iter().map(BossRow::from).collect(),
            generated_at: format_display(Some(board.generated_at)),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct LoginPage {
    pub flash: Option<FlashMessage>,
    /// Echoed back after a failed attempt.
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct ResetPage {
    pub boss: BossDefinition,
    pub user: Option<String>,
    pub flash: Option<FlashMessage>,
    pub last_kill: String,
    pub action: String,
    /// Current server time in the form's input format.
    pub now: String,
}

impl ResetPage {
    pub fn new(
        boss: &BossDefinition,
        last_kill: Option<Timestamp>,
        user: Option<String>,
        flash: Option<FlashMessage>,
        now: Timestamp,
    ) -> Self {
        Self {
            boss: boss.clone(),
            user,
            flash,
            last_kill: format_display(last_kill),
            action: reset_path(&boss.name),
            now: format_form_input(now),
        }
    }
}

/// Path of a boss's reset page. Catalog names never contain `/`.
pub fn reset_path(boss: &str) -> String {
    format!("/reset/{boss}")
}
