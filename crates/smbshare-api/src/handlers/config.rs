//! Generated configuration handlers.

use axum::Json;
use axum::extract::State;

use smbshare_samba::assembler::GeneratedConfig;
use smbshare_service::ApplyOutcome;

use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/config/preview
pub async fn preview(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<GeneratedConfig>>> {
    let generated = state.config_service.preview().await?;
    Ok(Json(ApiResponse::ok(generated)))
}

/// POST /api/config/apply
pub async fn apply(State(state): State<AppState>) -> ApiResult<Json<ApiResponse<ApplyOutcome>>> {
    let outcome = state.config_service.apply().await?;
    Ok(Json(ApiResponse::ok(outcome)))
}
