//! HTTP request handlers - thin layer that delegates to the domain service

use super::{
    dto::{CreateOreLotRequest, OreLotDto, OreLotsListResponse, UpdateOreLotRequest},
    error::{map_domain_error, Problem},
};
use crate::domain::Service;
use axum::{
    extract::Path,
    http::{header, HeaderName, StatusCode},
    Extension, Json,
};
use std::sync::Arc;

/// Create a new ore lot
#[utoipa::path(
    post,
    path = "/lots",
    tag = "ore-lots",
    request_body = CreateOreLotRequest,
    responses(
        (status = 201, description = "Lot created", body = OreLotDto,
            headers(("Location" = String, description = "Path of the created lot"))),
        (status = 400, description = "A validation rule failed", body = Problem),
        (status = 409, description = "Duplicate lot code", body = Problem)
    )
)]
pub async fn create_lot(
    Extension(service): Extension<Arc<Service>>,
    Json(req): Json<CreateOreLotRequest>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<OreLotDto>), Problem> {
    let lot = service
        .create_lot(req.into())
        .await
        .map_err(map_domain_error)?;

    let location = format!("/lots/{}", lot.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(lot.into()),
    ))
}

/// Get a single ore lot by id
#[utoipa::path(
    get,
    path = "/lots/{id}",
    tag = "ore-lots",
    params(("id" = i32, Path, description = "Lot id")),
    responses(
        (status = 200, description = "The lot", body = OreLotDto),
        (status = 404, description = "No such lot", body = Problem)
    )
)]
pub async fn get_lot(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i32>,
) -> Result<Json<OreLotDto>, Problem> {
    let lot = service.get_lot(id).await.map_err(map_domain_error)?;

    Ok(Json(lot.into()))
}

/// List all ore lots
#[utoipa::path(
    get,
    path = "/lots",
    tag = "ore-lots",
    responses(
        (status = 200, description = "Every stored lot", body = OreLotsListResponse)
    )
)]
pub async fn list_lots(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<OreLotsListResponse>, Problem> {
    let lots = service.list_lots().await.map_err(map_domain_error)?;

    let items: Vec<OreLotDto> = lots.into_iter().map(|l| l.into()).collect();
    let total = items.len();

    Ok(Json(OreLotsListResponse { items, total }))
}

/// Update an existing ore lot
#[utoipa::path(
    put,
    path = "/lots/{id}",
    tag = "ore-lots",
    params(("id" = i32, Path, description = "Lot id")),
    request_body = UpdateOreLotRequest,
    responses(
        (status = 204, description = "Lot updated"),
        (status = 400, description = "A validation rule failed", body = Problem),
        (status = 404, description = "No such lot", body = Problem)
    )
)]
pub async fn update_lot(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateOreLotRequest>,
) -> Result<StatusCode, Problem> {
    service
        .update_lot(id, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete an ore lot
#[utoipa::path(
    delete,
    path = "/lots/{id}",
    tag = "ore-lots",
    params(("id" = i32, Path, description = "Lot id")),
    responses(
        (status = 204, description = "Lot deleted"),
        (status = 404, description = "No such lot", body = Problem),
        (status = 409, description = "Lot referenced by other records", body = Problem)
    )
)]
pub async fn delete_lot(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, Problem> {
    service.delete_lot(id).await.map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}
