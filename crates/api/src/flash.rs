//! One-shot notices shown on the page after a redirect.
//!
//! A notice travels in a short-lived cookie as a small code. Notices that
//! name a boss carry its catalog index rather than the name, so the cookie
//! value never needs escaping and cannot inject arbitrary text.

use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, IntoResponse, Redirect, Response};
use respawn_core::catalog::BossCatalog;
use serde::Serialize;

use crate::auth::cookies::flash_cookie;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flash {
    TimerReset(String),
    BossNotFound,
    InvalidKillTime,
    LoginRequired,
    LoggedIn(String),
    LoggedOut,
}

/// Template-facing form of a notice.
#[derive(Debug, Clone, Serialize)]
pub struct FlashMessage {
    /// CSS suffix: `success`, `danger` or `info`.
    pub category: &'static str,
    pub message: String,
}

impl Flash {
    /// Cookie code, or `None` if the notice names a boss the catalog lacks.
    pub fn encode(&self, catalog: &BossCatalog) -> Option<String> {
        let code = match self {
            Flash::TimerReset(boss) => format!("reset.{}", catalog.position(boss)?),
            Flash::BossNotFound => "not_found".into(),
            Flash::InvalidKillTime => "bad_time".into(),
            Flash::LoginRequired => "login_required".into(),
            Flash::LoggedIn(_) => "logged_in".into(),
            Flash::LoggedOut => "logged_out".into(),
        };
        Some(code)
    }

    /// Parse a cookie code. `username` fills in the logged-in greeting.
    pub fn decode(code: &str, catalog: &BossCatalog, username: Option<&str>) -> Option<Self> {
        match code {
            "not_found" => Some(Flash::BossNotFound),
            "bad_time" => Some(Flash::InvalidKillTime),
            "login_required" => Some(Flash::LoginRequired),
            "logged_in" => username.map(|u| Flash::LoggedIn(u.to_string())),
            "logged_out" => Some(Flash::LoggedOut),
            other => {
                let index: usize = other.strip_prefix("reset.")?.parse().ok()?;
                catalog
                    .get(index)
                    .map(|boss| Flash::TimerReset(boss.name.clone()))
            }
        }
    }

    pub fn message(&self) -> FlashMessage {
        let (category, message) = match self {
            Flash::TimerReset(boss) => ("success", format!("{boss} timer reset!")),
            Flash::BossNotFound => ("danger", "Boss not found.".to_string()),
            Flash::InvalidKillTime => ("danger", "Invalid kill time format.".to_string()),
            Flash::LoginRequired => ("danger", "Please log in to reset timers.".to_string()),
            Flash::LoggedIn(user) => ("success", format!("Logged in as {user}.")),
            Flash::LoggedOut => ("info", "Logged out.".to_string()),
        };
        FlashMessage { category, message }
    }

    /// `303 See Other` to `to`, carrying this notice.
    pub fn redirect(&self, to: &str, catalog: &BossCatalog, secure: bool) -> Response {
        match self.encode(catalog) {
            Some(code) => (
                AppendHeaders([(SET_COOKIE, flash_cookie(&code, secure))]),
                Redirect::to(to),
            )
                .into_response(),
            None => Redirect::to(to).into_response(),
        }
    }
}
