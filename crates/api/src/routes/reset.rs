//! Route definitions for the reset flow.

use axum::routing::get;
use axum::Router;

use crate::handlers::reset;
use crate::state::AppState;

/// ```text
/// GET  /reset/{boss}  -> confirm
/// POST /reset/{boss}  -> reset (requires login)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/reset/{boss}", get(reset::confirm).post(reset::reset))
}
