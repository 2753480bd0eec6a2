//! Integration tests for share CRUD over HTTP.

mod helpers;

use http::StatusCode;
use serde_json::json;

use smbshare_entity::share::Share;

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new().await;
    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["store"], "json");
}

#[tokio::test]
async fn test_create_get_and_list_share() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/shares",
            Some(json!({
                "name": "media",
                "path": "/mnt/user/media",
                "comment": "Movies",
                "security": "private",
                "user_access": { "admin": "read-write", "kids": "read-only" }
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.body["data"]["name"], "media");

    let response = app.request("GET", "/api/shares/media", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["security"], "private");
    assert_eq!(response.body["data"]["user_access"]["kids"], "read-only");

    let response = app.request("GET", "/api/shares", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_invalid_share_is_rejected_with_codes() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/shares",
            Some(json!({ "name": "bad name", "path": "/etc", "create_mask": "777" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    let codes: Vec<&str> = response.body["details"]["errors"]
        .as_array()
        .expect("errors array")
        .iter()
        .filter_map(|e| e["code"].as_str())
        .collect();
    assert_eq!(
        codes,
        vec!["invalid_share_name", "invalid_path", "invalid_create_mask"]
    );

    let response = app.request("GET", "/api/shares", None).await;
    assert_eq!(response.body["data"], json!([]));
}

#[tokio::test]
async fn test_duplicate_name_conflicts() {
    let app = helpers::TestApp::new().await;
    let body = json!({ "name": "docs", "path": "/mnt/docs" });

    let first = app.request("POST", "/api/shares", Some(body.clone())).await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app.request("POST", "/api/shares", Some(body)).await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_create_from_form() {
    let app = helpers::TestApp::new().await;

    let response = app
        .post_form(
            "/api/shares/form",
            &[
                ("name", " backup "),
                ("path", "/mnt/backup"),
                ("security", "secure"),
                ("user_access", r#"{"admin":"read-write"}"#),
                ("hide_dot_files", "no"),
                ("comment", "   "),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    let data = &response.body["data"];
    assert_eq!(data["name"], "backup");
    assert_eq!(data["security"], "secure");
    assert_eq!(data["hide_dot_files"], false);
    assert!(data.get("comment").is_none());
}

#[tokio::test]
async fn test_update_and_delete() {
    let app = helpers::TestApp::with_shares(vec![
        Share::new("a", "/mnt/a"),
        Share::new("b", "/mnt/b"),
    ])
    .await;

    let response = app
        .request(
            "PUT",
            "/api/shares/a",
            Some(json!({ "name": "b", "path": "/mnt/a" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    let response = app
        .request(
            "PUT",
            "/api/shares/a",
            Some(json!({ "name": "a", "path": "/mnt/a-new", "hosts_allow": "10.0.0.0/8" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["path"], "/mnt/a-new");

    let response = app.request("PUT", "/api/shares/zzz", Some(json!({ "name": "zzz", "path": "/mnt/z" }))).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("DELETE", "/api/shares/a", None).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/api/shares/a", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_validation_report_flags_hand_edited_entries() {
    let app = helpers::TestApp::with_shares(vec![
        Share::new("good", "/mnt/good"),
        Share::new("bad]", "/srv/bad"),
    ])
    .await;

    let response = app.request("GET", "/api/shares/validation", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["checked"], 2);
    assert_eq!(data["failures"][0]["index"], 1);
    assert_eq!(
        data["failures"][0]["errors"],
        json!(["invalid_share_name", "invalid_path"])
    );
}
