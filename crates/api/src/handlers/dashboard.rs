//! Handler for the timer dashboard page.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use chrono::Utc;
use respawn_core::timer::build_board;

use crate::error::AppResult;
use crate::middleware::auth::{CurrentSession, PendingFlash};
use crate::state::AppState;
use crate::views::DashboardPage;

/// GET /
///
/// Loads every timer, derives the board against the current time and
/// renders the due and upcoming tables.
pub async fn index(
    State(state): State<AppState>,
    session: CurrentSession,
    pending: PendingFlash,
) -> AppResult<Response> {
    let timers = state.store.load_all(state.catalog()).await?;
    let board = build_board(state.catalog(), &timers, Utc::now());

    let user = session.username().map(str::to_string);
    let flash = pending
        .resolve(&state, user.as_deref())
        .map(|flash| flash.message());

    tracing::debug!(
        due = board.due.len(),
        upcoming = board.upcoming.len(),
        "Rendering dashboard"
    );

    let html = state.views.dashboard(&DashboardPage::new(&board, user, flash))?;
    Ok(super::html_page(StatusCode::OK, html, &pending))
}
