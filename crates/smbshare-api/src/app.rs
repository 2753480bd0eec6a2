//! Application builder: wires repositories, services and the router.

use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use tower_http::trace::TraceLayer;

use smbshare_core::config::AppConfig;
use smbshare_core::traits::store::RecordStore;
use smbshare_entity::share::Share;
use smbshare_samba::assembler::ConfigAssembler;
use smbshare_service::{ConfigService, ShareService};
use smbshare_store::{ConfigApplier, ShareRepository};

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the application state on top of the given share store.
pub fn build_state(config: AppConfig, store: Arc<dyn RecordStore<Share>>) -> AppState {
    tracing::info!(store = store.store_type(), "Initializing services");

    let share_repo = Arc::new(ShareRepository::new(store));
    let assembler = Arc::new(ConfigAssembler::new(&config.samba));
    let applier = Arc::new(ConfigApplier::new(&config.samba));

    let share_service = Arc::new(ShareService::new(Arc::clone(&share_repo)));
    let config_service = Arc::new(ConfigService::new(
        Arc::clone(&share_repo),
        assembler,
        applier,
    ));

    AppState {
        config: Arc::new(config),
        share_service,
        config_service,
        started_at: Instant::now(),
    }
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);
    build_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
