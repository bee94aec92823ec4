//! Handlers for the per-boss reset flow.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Form;
use chrono::Utc;
use respawn_core::time_format::{check_kill_time, now_truncated, parse_form_input};
use serde::Deserialize;

use crate::error::AppResult;
use crate::flash::Flash;
use crate::middleware::auth::{CurrentSession, PendingFlash};
use crate::state::AppState;
use crate::views::{reset_path, ResetPage};

/// Form body for `POST /reset/{boss}`.
#[derive(Debug, Default, Deserialize)]
pub struct ResetForm {
    /// `YYYY-MM-DDTHH:MM` in UTC. Blank or absent means "now".
    #[serde(default)]
    pub kill_time: Option<String>,
}

/// GET /reset/{boss}
///
/// Confirmation page. Anonymous visitors see a login prompt instead of the form.
pub async fn confirm(
    State(state): State<AppState>,
    Path(boss): Path<String>,
    session: CurrentSession,
    pending: PendingFlash,
) -> AppResult<Response> {
    let Some(definition) = state.catalog().find(&boss) else {
        tracing::debug!(boss = %boss, "Reset page requested for unknown boss");
        let secure = state.config.cookie_secure;
        return Ok(Flash::BossNotFound.redirect("/", state.catalog(), secure));
    };

    let timers = state.store.load_all(state.catalog()).await?;
    let last_kill = timers
        .get(&definition.name)
        .and_then(Option::as_ref)
        .map(|record| record.kill_time);

    let user = session.username().map(str::to_string);
    let flash = pending
        .resolve(&state, user.as_deref())
        .map(|flash| flash.message());

    let page = ResetPage::new(definition, last_kill, user, flash, Utc::now());
    let html = state.views.reset(&page)?;
    Ok(super::html_page(StatusCode::OK, html, &pending))
}

/// POST /reset/{boss}
///
/// Records a kill for `boss` attributed to the logged-in member. The kill
/// time defaults to the current server time. Unknown bosses are reported
/// before the session is checked; anonymous writes go to `/login` and
/// mutate nothing.
pub async fn reset(
    State(state): State<AppState>,
    Path(boss): Path<String>,
    CurrentSession(session): CurrentSession,
    Form(input): Form<ResetForm>,
) -> AppResult<Response> {
    let secure = state.config.cookie_secure;

    if state.catalog().find(&boss).is_none() {
        tracing::warn!(boss = %boss, "Reset of unknown boss");
        return Ok(Flash::BossNotFound.redirect("/", state.catalog(), secure));
    }

    let Some(session) = session else {
        tracing::warn!(boss = %boss, "Reset attempted without a session");
        return Ok(Flash::LoginRequired.redirect("/login", state.catalog(), secure));
    };

    let submitted = input.kill_time.as_deref().unwrap_or_default();
    let kill_time = match parse_form_input(submitted) {
        Ok(Some(kill_time)) => check_kill_time(kill_time, Utc::now()),
        Ok(None) => Ok(now_truncated()),
        Err(err) => Err(err),
    };
    let kill_time = match kill_time {
        Ok(kill_time) => kill_time,
        Err(err) => {
            tracing::debug!(boss = %boss, error = %err, "Rejected kill time");
            let back = reset_path(&boss);
            return Ok(Flash::InvalidKillTime.redirect(&back, state.catalog(), secure));
        }
    };

    state
        .store
        .record_kill(state.catalog(), &boss, kill_time, &session.username)
        .await?;

    Ok(Flash::TimerReset(boss).redirect("/", state.catalog(), secure))
}
