//! Session extractors for Axum handlers.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::auth::cookies::{read_cookie, FLASH_COOKIE, SESSION_COOKIE};
use crate::auth::session::Session;
use crate::flash::Flash;
use crate::state::AppState;

/// The visitor's session, if they are logged in. Never rejects.
///
/// ```ignore
/// async fn page(CurrentSession(session): CurrentSession) -> Html<String> {
///     let user = session.map(|s| s.username);
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Option<Session>);

impl CurrentSession {
    pub fn username(&self) -> Option<&str> {
        self.0.as_ref().map(|s| s.username.as_str())
    }
}

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = match read_cookie(&parts.headers, SESSION_COOKIE) {
            Some(id) => state.sessions.get(&id).await,
            None => None,
        };
        Ok(CurrentSession(session))
    }
}

/// Raw flash code from the request, if any. Pages that show it must clear
/// the cookie in their response.
#[derive(Debug, Clone, Default)]
pub struct PendingFlash(pub Option<String>);

impl PendingFlash {
    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    pub fn resolve(&self, state: &AppState, username: Option<&str>) -> Option<Flash> {
        self.0
            .as_deref()
            .and_then(|code| Flash::decode(code, state.catalog(), username))
    }
}

impl FromRequestParts<AppState> for PendingFlash {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(PendingFlash(read_cookie(&parts.headers, FLASH_COOKIE)))
    }
}
