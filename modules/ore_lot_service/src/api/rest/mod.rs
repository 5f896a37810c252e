//! REST API layer

pub mod dto;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod routes;

use utoipa::OpenApi;

/// OpenAPI document for the ore lot endpoints
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::create_lot,
        handlers::get_lot,
        handlers::list_lots,
        handlers::update_lot,
        handlers::delete_lot,
    ),
    components(schemas(
        dto::CreateOreLotRequest,
        dto::UpdateOreLotRequest,
        dto::OreLotDto,
        dto::OreLotsListResponse,
        error::Problem,
    )),
    tags((name = "ore-lots", description = "Ore lot tracking"))
)]
pub struct ApiDoc;
