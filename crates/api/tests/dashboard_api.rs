//! Integration tests for the dashboard page.

mod common;

use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{body_string, get, get_with_cookie, seed_timers, set_cookies};
use respawn_core::time_format::format_stored;

#[tokio::test]
async fn dashboard_renders_every_boss() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(&dir);

    let response = get(app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/html"));

    let html = body_string(response).await;
    assert!(html.contains("Boss Respawn Timers"));
    for boss in ["170", "180", "210", "215"] {
        assert!(html.contains(&format!(r#"href="/reset/{boss}""#)), "missing {boss}");
    }
    assert!(html.contains("No bosses are up right now."));
    assert!(html.contains(r#"<a href="/login">Log in</a>"#));
}

#[tokio::test]
async fn dashboard_shows_due_boss_and_recorder() {
    let dir = tempfile::tempdir().unwrap();
    let kill = Utc::now() - Duration::hours(3);
    let seed = serde_json::json!({
        "170": { "killTime": format_stored(kill), "user": "dontcallmeblack" },
        "180": null,
        "210": null,
        "215": null,
    });
    seed_timers(&dir, &seed.to_string());
    let app = common::build_test_app(&dir);

    let html = body_string(get(app, "/").await).await;
    assert!(html.contains(r#"<tr class="due""#));
    assert!(html.contains("dontcallmeblack"));
    assert!(html.contains("Ready!"));
    assert!(html.contains(&kill.format("%Y-%m-%d %H:%M UTC").to_string()));
}

#[tokio::test]
async fn flash_notice_is_shown_once_and_cleared() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(&dir);

    let response = get_with_cookie(app.clone(), "/", Some("respawn_flash=reset.1")).await;
    assert!(set_cookies(&response)
        .iter()
        .any(|c| c.starts_with("respawn_flash=;") && c.contains("Max-Age=0")));

    let html = body_string(response).await;
    assert!(html.contains("180 timer reset!"));

    let html = body_string(get(app, "/").await).await;
    assert!(!html.contains("timer reset!"));
}

#[tokio::test]
async fn forged_flash_code_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let app = common::build_test_app(&dir);

    let response = get_with_cookie(app, "/", Some("respawn_flash=reset.42")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_string(response).await;
    assert!(!html.contains("class=\"flash "));
}

#[tokio::test]
async fn malformed_retired_entry_does_not_break_dashboard() {
    let dir = tempfile::tempdir().unwrap();
    seed_timers(
        &dir,
        r#"{"170": null, "180": null, "210": null, "215": null, "retired": "garbage"}"#,
    );
    let app = common::build_test_app(&dir);

    let response = get(app.clone(), "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(app, "/api/v1/timers").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn kill_stored_at_end_of_time_range_still_renders() {
    let dir = tempfile::tempdir().unwrap();
    seed_timers(
        &dir,
        r#"{"170": {"killTime": "+262142-12-31T23:59:00", "user": "neveon"}, "180": null, "210": null, "215": null}"#,
    );
    let app = common::build_test_app(&dir);

    let response = get(app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("neveon"));
}
