pub mod auth;
pub mod health;
pub mod reset;
pub mod timers;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the HTML page routes, mounted at the root.
///
/// ```text
/// /                   dashboard
/// /login              login form, submit (GET, POST)
/// /logout             end session (GET)
/// /reset/{boss}       confirmation, record kill (GET, POST; POST requires login)
/// ```
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::dashboard::index))
        .merge(auth::router())
        .merge(reset::router())
}

/// Build the `/api/v1` route tree.
///
/// ```text
/// /timers             derived timer board (GET)
/// /bosses             boss catalog (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(timers::router())
}
