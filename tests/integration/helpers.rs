//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use smbshare_core::config::AppConfig;
use smbshare_core::traits::store::RecordStore;
use smbshare_entity::share::Share;
use smbshare_store::JsonFileStore;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
    /// Scratch directory holding the store and generated config
    pub dir: TempDir,
}

impl TestApp {
    /// Create a test application with an empty share store
    pub async fn new() -> Self {
        Self::build(Vec::new(), Vec::new()).await
    }

    /// Create a test application whose store already holds `shares`
    pub async fn with_shares(shares: Vec<Share>) -> Self {
        Self::build(shares, Vec::new()).await
    }

    /// Create a test application that runs `reload_command` after apply
    pub async fn with_reload(reload_command: &[&str]) -> Self {
        Self::build(
            Vec::new(),
            reload_command.iter().map(|s| s.to_string()).collect(),
        )
        .await
    }

    async fn build(shares: Vec<Share>, reload_command: Vec<String>) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let mut config = AppConfig::default();
        config.store.path = dir.path().join("shares.json").display().to_string();
        config.samba.config_path = dir.path().join("smb-shares.conf").display().to_string();
        config.samba.reload_command = reload_command;
        config.samba.header_comment = false;

        let store = Arc::new(JsonFileStore::<Share>::new(&config.store.path));
        store.save(&shares).await.expect("Failed to seed store");

        let state = smbshare_api::build_state(config.clone(), store);
        let router = smbshare_api::build_app(state);

        Self {
            router,
            config,
            dir,
        }
    }

    /// Contents of the generated config file, if written
    pub fn written_config(&self) -> Option<String> {
        std::fs::read_to_string(&self.config.samba.config_path).ok()
    }

    /// Make a JSON request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// POST url-encoded form fields to the test app
    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let req = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .expect("Failed to build request");

        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Percent-encode everything outside the unreserved set
fn encode(value: &str) -> String {
    let mut out = String::new();
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
