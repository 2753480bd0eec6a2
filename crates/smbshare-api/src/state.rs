//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use smbshare_core::config::AppConfig;
use smbshare_service::{ConfigService, ShareService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Share CRUD service
    pub share_service: Arc<ShareService>,
    /// Configuration preview/apply service
    pub config_service: Arc<ConfigService>,
    /// Process start, for uptime reporting
    pub started_at: Instant,
}
