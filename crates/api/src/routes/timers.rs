//! Route definitions for the JSON timer data.

use axum::routing::get;
use axum::Router;

use crate::handlers::timers;
use crate::state::AppState;

/// Routes mounted at `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/timers", get(timers::list_timers))
        .route("/bosses", get(timers::list_bosses))
}
