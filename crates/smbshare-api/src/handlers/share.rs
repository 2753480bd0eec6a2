//! Share CRUD and validation handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Form, Json};

use smbshare_entity::share::Share;
use smbshare_samba::sanitizer::Attributes;
use smbshare_samba::validator::ValidationReport;

use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/shares
pub async fn list_shares(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<Share>>>> {
    let shares = state.share_service.list_shares().await?;
    Ok(Json(ApiResponse::ok(shares)))
}

/// POST /api/shares
pub async fn create_share(
    State(state): State<AppState>,
    Json(share): Json<Share>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Share>>)> {
    let share = state.share_service.create_share(share).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(share))))
}

/// POST /api/shares/form
pub async fn create_share_form(
    State(state): State<AppState>,
    Form(attributes): Form<Attributes>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Share>>)> {
    let share = state
        .share_service
        .create_share_from_form(&attributes)
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(share))))
}

/// GET /api/shares/{name}
pub async fn get_share(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<ApiResponse<Share>>> {
    let share = state.share_service.get_share(&name).await?;
    Ok(Json(ApiResponse::ok(share)))
}

/// PUT /api/shares/{name}
pub async fn update_share(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(share): Json<Share>,
) -> ApiResult<Json<ApiResponse<Share>>> {
    let share = state.share_service.update_share(&name, share).await?;
    Ok(Json(ApiResponse::ok(share)))
}

/// DELETE /api/shares/{name}
pub async fn delete_share(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<ApiResponse<Share>>> {
    let share = state.share_service.delete_share(&name).await?;
    Ok(Json(ApiResponse::ok(share)))
}

/// GET /api/shares/validation
pub async fn validation_report(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<ValidationReport>>> {
    let report = state.share_service.validation_report().await?;
    Ok(Json(ApiResponse::ok(report)))
}
