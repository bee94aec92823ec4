//! Handlers for logging in and out.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{AppendHeaders, IntoResponse, Response};
use axum::Form;
use respawn_core::error::CoreError;
use serde::Deserialize;

use crate::auth::cookies::{clear_cookie, read_cookie, session_cookie, SESSION_COOKIE};
use crate::error::AppResult;
use crate::flash::{Flash, FlashMessage};
use crate::middleware::auth::PendingFlash;
use crate::state::AppState;
use crate::views::LoginPage;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Form body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /login
pub async fn login_page(
    State(state): State<AppState>,
    pending: PendingFlash,
) -> AppResult<Response> {
    let page = LoginPage {
        flash: pending.resolve(&state, None).map(|flash| flash.message()),
        username: String::new(),
    };
    let html = state.views.login(&page)?;
    Ok(super::html_page(StatusCode::OK, html, &pending))
}

/// POST /login
///
/// Checks the submitted credentials against the clan table. Success starts
/// a session and redirects to the dashboard; failure re-renders the form.
pub async fn login(
    State(state): State<AppState>,
    pending: PendingFlash,
    Form(input): Form<LoginForm>,
) -> AppResult<Response> {
    let username = input.username.trim();

    if username.is_empty() || input.password.is_empty() {
        return login_failed(
            &state,
            &pending,
            StatusCode::BAD_REQUEST,
            username,
            "Username and password are required.",
        );
    }

    let username = match state.credentials().authenticate(username, &input.password) {
        Ok(username) => username,
        Err(err) => {
            tracing::warn!(username, "Login failed");
            let message = match err {
                CoreError::Unauthorized(msg) => msg,
                other => other.to_string(),
            };
            return login_failed(&state, &pending, StatusCode::UNAUTHORIZED, username, &message);
        }
    };

    let session = state.sessions.create(&username).await;
    let cookie = session_cookie(
        &session.id,
        state.sessions.ttl().num_seconds(),
        state.config.cookie_secure,
    );

    let redirect =
        Flash::LoggedIn(username).redirect("/", state.catalog(), state.config.cookie_secure);
    Ok((AppendHeaders([(SET_COOKIE, cookie)]), redirect).into_response())
}

/// GET /logout
///
/// Ends the session (if any) and clears the session cookie.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(id) = read_cookie(&headers, SESSION_COOKIE) {
        state.sessions.remove(&id).await;
    }

    let redirect = Flash::LoggedOut.redirect("/", state.catalog(), state.config.cookie_secure);
    (
        AppendHeaders([(SET_COOKIE, clear_cookie(SESSION_COOKIE))]),
        redirect,
    )
        .into_response()
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn login_failed(
    state: &AppState,
    pending: &PendingFlash,
    status: StatusCode,
    username: &str,
    message: &str,
) -> AppResult<Response> {
    let page = LoginPage {
        flash: Some(FlashMessage {
            category: "danger",
            message: message.to_string(),
        }),
        username: username.to_string(),
    };
    let html = state.views.login(&page)?;
    Ok(super::html_page(status, html, pending))
}
