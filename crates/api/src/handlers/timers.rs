//! JSON read endpoints for timers and the boss catalog.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use respawn_core::catalog::BossDefinition;
use respawn_core::timer::{build_board, TimerBoard};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/timers
///
/// The same board the dashboard renders, with raw timestamps and seconds.
pub async fn list_timers(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<TimerBoard>>> {
    let timers = state.store.load_all(state.catalog()).await?;
    let board = build_board(state.catalog(), &timers, Utc::now());
    Ok(Json(DataResponse { data: board }))
}

/// GET /api/v1/bosses
pub async fn list_bosses(
    State(state): State<AppState>,
) -> Json<DataResponse<Vec<BossDefinition>>> {
    Json(DataResponse {
        data: state.catalog().list().to_vec(),
    })
}
