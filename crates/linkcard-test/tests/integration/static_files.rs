//! Tests for the static UI and health endpoints.

use std::path::PathBuf;

use salvo::http::StatusCode;
use serde_json::json;

use super::helpers::*;

/// Writes a throwaway UI directory and returns its path.
fn write_ui_dir(test_name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "linkcard-{test_name}-{}",
        std::process::id()
    ));
    std::fs::create_dir_all(&dir).expect("create ui dir");
    std::fs::write(dir.join("index.html"), "<h1>linkcard</h1>").expect("write index");
    std::fs::write(dir.join("app.js"), "console.log('ui');").expect("write app.js");
    dir
}

#[test_log::test(tokio::test)]
async fn healthcheck_reports_ok() {
    let service = create_test_service();

    let response = get(&service, "/api/healthcheck")
        .await
        .assert_status(StatusCode::OK);
    assert_eq!(response.json(), json!({"status": "ok"}));
}

#[test_log::test(tokio::test)]
async fn static_dir_serves_index_and_assets() {
    let dir = write_ui_dir("serves");
    let mut settings = test_config();
    settings.server.static_dir = Some(dir.to_string_lossy().into_owned());
    let service = create_test_service_with(settings);

    let index = get(&service, "/").await.assert_status(StatusCode::OK);
    assert_eq!(index.body_string(), "<h1>linkcard</h1>");

    let script = get(&service, "/app.js").await.assert_status(StatusCode::OK);
    assert_eq!(script.body_string(), "console.log('ui');");

    // API routes still win over the static fallback
    let _ = get(&service, "/api/healthcheck")
        .await
        .assert_status(StatusCode::OK);
    let _ = get(&service, "/vcard/unknown")
        .await
        .assert_status(StatusCode::NOT_FOUND);

    std::fs::remove_dir_all(dir).ok();
}

#[test_log::test(tokio::test)]
async fn no_static_dir_means_no_ui() {
    let service = create_test_service();

    let _ = get(&service, "/index.html")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
