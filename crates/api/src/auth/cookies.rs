//! Cookie helpers for the session id and one-shot flash notices.

use axum::http::header::COOKIE;
use axum::http::HeaderMap;

/// Cookie holding the session id.
pub const SESSION_COOKIE: &str = "respawn_session";

/// Cookie holding a pending flash notice code.
pub const FLASH_COOKIE: &str = "respawn_flash";

/// Flash notices only need to survive one redirect.
const FLASH_MAX_AGE_SECS: i64 = 60;

/// Find a cookie value in the request's `Cookie` headers.
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// `Set-Cookie` value for a new session.
pub fn session_cookie(id: &str, max_age_secs: i64, secure: bool) -> String {
    build(SESSION_COOKIE, id, max_age_secs, secure)
}

/// `Set-Cookie` value carrying a flash code.
pub fn flash_cookie(code: &str, secure: bool) -> String {
    build(FLASH_COOKIE, code, FLASH_MAX_AGE_SECS, secure)
}

/// `Set-Cookie` value that deletes a cookie.
pub fn clear_cookie(name: &str) -> String {
    format!("{name}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

fn build(name: &str, value: &str, max_age_secs: i64, secure: bool) -> String {
    let mut cookie = format!("{name}={value}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_secs}");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}
