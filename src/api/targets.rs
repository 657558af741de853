//! Target catalog API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::target::{CreateTarget, Target, UpdateTarget},
};

use super::ValidatedJson;

/// Response carrying the id of a created or updated target
#[derive(Serialize, ToSchema)]
pub struct TargetIdResponse {
    pub id: String,
}

/// List all targets
#[utoipa::path(
    get,
    path = "/targets",
    tag = "targets",
    responses(
        (status = 200, description = "Target catalog", body = Vec<Target>)
    )
)]
pub async fn list_targets(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Target>>> {
    let targets = state.services.targets.list().await?;
    Ok(Json(targets))
}

/// Create a target
#[utoipa::path(
    post,
    path = "/targets",
    tag = "targets",
    request_body = CreateTarget,
    responses(
        (status = 201, description = "Target created", body = TargetIdResponse),
        (status = 400, description = "Invalid payload", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_target(
    State(state): State<crate::AppState>,
    ValidatedJson(data): ValidatedJson<CreateTarget>,
) -> AppResult<(StatusCode, Json<TargetIdResponse>)> {
    let id = state.services.targets.create(&data).await?;
    Ok((StatusCode::CREATED, Json(TargetIdResponse { id })))
}

/// Get target by ID
#[utoipa::path(
    get,
    path = "/targets/{id}",
    tag = "targets",
    params(("id" = String, Path, description = "Target ID")),
    responses(
        (status = 200, description = "Target details", body = Target),
        (status = 404, description = "Target not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_target(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Target>> {
    let target = state.services.targets.get(&id).await?;
    Ok(Json(target))
}

/// Update a target (partial; the id is never updatable)
#[utoipa::path(
    put,
    path = "/targets/{id}",
    tag = "targets",
    params(("id" = String, Path, description = "Target ID")),
    request_body = UpdateTarget,
    responses(
        (status = 200, description = "Target updated", body = TargetIdResponse),
        (status = 404, description = "Target not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_target(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    ValidatedJson(data): ValidatedJson<UpdateTarget>,
) -> AppResult<Json<TargetIdResponse>> {
    state.services.targets.update(&id, &data).await?;
    Ok(Json(TargetIdResponse { id }))
}
