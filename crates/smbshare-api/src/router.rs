//! Route definitions for the SmbShare HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! Static segments (`/shares/form`, `/shares/validation`) take priority
//! over `/shares/{name}`.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes and the request logger.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(health_routes())
        .merge(share_routes())
        .merge(config_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Liveness endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Share CRUD and validation
fn share_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/shares",
            get(handlers::share::list_shares).post(handlers::share::create_share),
        )
        .route("/shares/form", post(handlers::share::create_share_form))
        .route(
            "/shares/validation",
            get(handlers::share::validation_report),
        )
        .route(
            "/shares/{name}",
            get(handlers::share::get_share)
                .put(handlers::share::update_share)
                .delete(handlers::share::delete_share),
        )
}

/// Generated configuration preview and apply
fn config_routes() -> Router<AppState> {
    Router::new()
        .route("/config/preview", get(handlers::config::preview))
        .route("/config/apply", post(handlers::config::apply))
}
