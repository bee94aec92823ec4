//! Request handlers.
//!
//! Page handlers render HTML through [`crate::views::Views`] and answer
//! writes with `303 See Other` plus a flash notice. The `timers` handlers
//! serve the same data as JSON.

pub mod auth;
pub mod dashboard;
pub mod reset;
pub mod timers;

use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::{AppendHeaders, Html, IntoResponse, Response};

use crate::auth::cookies::{clear_cookie, FLASH_COOKIE};
use crate::middleware::auth::PendingFlash;

/// Wrap rendered HTML, consuming the pending flash notice if there was one.
pub(crate) fn html_page(status: StatusCode, html: String, pending: &PendingFlash) -> Response {
    if pending.is_present() {
        (
            status,
            AppendHeaders([(SET_COOKIE, clear_cookie(FLASH_COOKIE))]),
            Html(html),
        )
            .into_response()
    } else {
        (status, Html(html)).into_response()
    }
}
