//! Integration tests for configuration preview and apply.

mod helpers;

use http::StatusCode;
use serde_json::json;

use smbshare_entity::share::{AccessLevel, AccessModelInput, SecurityMode, Share};

fn private_share() -> Share {
    Share::new("vault", "/mnt/vault")
        .with_security(SecurityMode::Private)
        .with_user_access(AccessModelInput::from_pairs([
            ("admin", AccessLevel::ReadWrite),
            ("auditor", AccessLevel::ReadOnly),
            ("intruder", AccessLevel::NoAccess),
        ]))
}

#[tokio::test]
async fn test_preview_renders_valid_and_reports_skipped() {
    let app = helpers::TestApp::with_shares(vec![
        private_share(),
        Share::new("outside", "/home/outside"),
    ])
    .await;

    let response = app.request("GET", "/api/config/preview", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let data = &response.body["data"];
    let text = data["text"].as_str().expect("text");
    assert!(text.contains("[vault]\n"));
    assert!(text.contains("    path = /mnt/vault\n"));
    assert!(text.contains("    guest ok = no\n"));
    assert!(text.contains("    valid users = admin auditor\n"));
    assert!(text.contains("    write list = admin\n"));
    assert!(!text.contains("intruder"));
    assert!(!text.contains("[outside]"));

    assert_eq!(data["share_count"], 1);
    assert_eq!(data["warnings"][0]["name"], "outside");
    assert_eq!(data["warnings"][0]["errors"], json!(["invalid_path"]));

    assert!(app.written_config().is_none());
}

#[tokio::test]
async fn test_apply_writes_preview_text() {
    let app = helpers::TestApp::with_shares(vec![private_share(), Share::new("pub", "/mnt/pub")])
        .await;

    let preview = app.request("GET", "/api/config/preview", None).await;
    let response = app.request("POST", "/api/config/apply", None).await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["data"]["share_count"], 2);
    assert_eq!(response.body["data"]["reloaded"], false);

    let written = app.written_config().expect("config written");
    assert_eq!(Some(written.as_str()), preview.body["data"]["text"].as_str());
    assert!(written.contains("[vault]\n"));
    assert!(written.contains("\n\n[pub]\n"));
}

#[cfg(unix)]
#[tokio::test]
async fn test_failed_reload_is_bad_gateway() {
    let app = helpers::TestApp::with_reload(&["false"]).await;
    app.request(
        "POST",
        "/api/shares",
        Some(json!({ "name": "a", "path": "/mnt/a" })),
    )
    .await;

    let response = app.request("POST", "/api/config/apply", None).await;
    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    assert_eq!(response.body["error"], "EXTERNAL_SERVICE_ERROR");
    assert!(app.written_config().expect("file kept").contains("[a]"));
}

#[tokio::test]
async fn test_principal_injection_is_neutralized() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/shares",
            Some(json!({
                "name": "target",
                "path": "/mnt/target",
                "security": "secure",
                "comment": "ok\n[evil]\npath = /",
                "user_access": { "admin\nwrite list = hacker": "read-write" }
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let response = app.request("GET", "/api/config/preview", None).await;
    let text = response.body["data"]["text"].as_str().expect("text");
    assert!(text.lines().all(|l| l.trim() != "write list = hacker"));
    assert!(text.lines().all(|l| l.trim() != "[evil]"));
    assert_eq!(text.lines().filter(|l| l.starts_with('[')).count(), 1);
}

#[tokio::test]
async fn test_hundred_shares_through_api() {
    let shares: Vec<Share> = (1..=100)
        .map(|i| Share::new(format!("Share{i}"), format!("/mnt/disk/share{i}")))
        .collect();
    let app = helpers::TestApp::with_shares(shares).await;

    let response = app.request("GET", "/api/config/preview", None).await;
    let text = response.body["data"]["text"].as_str().expect("text");
    assert!(text.contains("[Share1]\n"));
    assert!(text.contains("[Share100]\n"));
    assert_eq!(text.matches("    browseable = yes\n").count(), 100);
    assert_eq!(response.body["data"]["warnings"], json!([]));
}
