//! # smbshare-api
//!
//! HTTP API layer for SmbShare built on Axum.
//!
//! Provides the share and configuration endpoints, middleware (CORS,
//! request logging), DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state};
pub use error::ApiError;
pub use state::AppState;
