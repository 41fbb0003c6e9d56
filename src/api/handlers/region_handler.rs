//! Region handlers.

use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::{Path, ValidatedJson};
use crate::api::AppState;
use crate::domain::{CreateRegion, RegionResponse, UpdateRegion};
use crate::errors::AppResult;
use crate::types::{Created, MessageResponse};

/// Create region routes
pub fn region_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_regions).post(create_region))
        .route(
            "/:region_id",
            get(get_region).put(update_region).delete(delete_region),
        )
}

#[utoipa::path(
    get,
    path = "/regions",
    tag = "Regions",
    responses(
        (status = 200, description = "List of all regions", body = Vec<RegionResponse>)
    )
)]
pub async fn list_regions(State(state): State<AppState>) -> AppResult<Json<Vec<RegionResponse>>> {
    let regions = state.region_service.list_regions().await?;
    Ok(Json(regions.into_iter().map(RegionResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/regions",
    tag = "Regions",
    request_body = CreateRegion,
    responses(
        (status = 201, description = "Region created", body = RegionResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_region(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateRegion>,
) -> AppResult<Created<RegionResponse>> {
    let region = state.region_service.create_region(payload).await?;
    Ok(Created(RegionResponse::from(region)))
}

#[utoipa::path(
    get,
    path = "/regions/{region_id}",
    tag = "Regions",
    params(("region_id" = i32, Path, description = "Region ID")),
    responses(
        (status = 200, description = "Region found", body = RegionResponse),
        (status = 404, description = "Region not found")
    )
)]
pub async fn get_region(
    State(state): State<AppState>,
    Path(region_id): Path<i32>,
) -> AppResult<Json<RegionResponse>> {
    let region = state.region_service.get_region(region_id).await?;
    Ok(Json(RegionResponse::from(region)))
}

#[utoipa::path(
    put,
    path = "/regions/{region_id}",
    tag = "Regions",
    params(("region_id" = i32, Path, description = "Region ID")),
    request_body = UpdateRegion,
    responses(
        (status = 200, description = "Region updated", body = RegionResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Region not found")
    )
)]
pub async fn update_region(
    State(state): State<AppState>,
    Path(region_id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateRegion>,
) -> AppResult<Json<RegionResponse>> {
    let region = state
        .region_service
        .update_region(region_id, payload)
        .await?;
    Ok(Json(RegionResponse::from(region)))
}

/// Delete a region and unlink it from every article
#[utoipa::path(
    delete,
    path = "/regions/{region_id}",
    tag = "Regions",
    params(("region_id" = i32, Path, description = "Region ID")),
    responses(
        (status = 200, description = "Region deleted", body = MessageResponse),
        (status = 404, description = "Region not found")
    )
)]
pub async fn delete_region(
    State(state): State<AppState>,
    Path(region_id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.region_service.delete_region(region_id).await?;
    Ok(Json(MessageResponse::new(format!(
        "Region {} deleted",
        region_id
    ))))
}
