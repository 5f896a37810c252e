//! REST DTOs with serde derives for the HTTP API
//!
//! Request bodies bind missing fields to type defaults so the validation
//! layer owns every rejection message, including "field is required".

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Create request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateOreLotRequest {
    /// Business code, unique across all lots
    #[schema(example = "MNA-2026-000123")]
    pub lot_code: String,

    /// Mine of origin
    #[schema(example = "Carajas N4E")]
    pub origin_mine: String,

    /// Iron content, percent (0-100)
    pub iron_grade: Decimal,

    /// Moisture content, percent (0-100)
    pub moisture: Decimal,

    /// Silica content, percent (optional)
    pub silica: Option<Decimal>,

    /// Phosphorus content, percent (optional)
    pub phosphorus: Option<Decimal>,

    /// Weight in metric tonnes, strictly positive
    pub tonnage: Decimal,

    /// Production timestamp; defaults to now when omitted
    pub production_date: Option<DateTime<Utc>>,

    /// 0=InStock, 1=InTransit, 2=Shipped
    pub status: i32,

    /// Current physical location
    #[schema(example = "Patio Carajas")]
    pub current_location: String,
}

/// Update request; `lotCode` is immutable and not part of this shape
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateOreLotRequest {
    /// Mine of origin
    pub origin_mine: String,

    /// Iron content, percent (0-100)
    pub iron_grade: Decimal,

    /// Moisture content, percent (0-100)
    pub moisture: Decimal,

    /// Silica content, percent (optional)
    pub silica: Option<Decimal>,

    /// Phosphorus content, percent (optional)
    pub phosphorus: Option<Decimal>,

    /// Weight in metric tonnes, strictly positive
    pub tonnage: Decimal,

    /// Production timestamp; the stored value is kept when omitted
    pub production_date: Option<DateTime<Utc>>,

    /// 0=InStock, 1=InTransit, 2=Shipped
    pub status: i32,

    /// Current physical location
    pub current_location: String,
}

/// Ore lot response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OreLotDto {
    /// Storage-generated id
    pub id: i32,

    /// Business code
    #[schema(example = "MNA-2026-000123")]
    pub lot_code: String,

    /// Mine of origin
    pub origin_mine: String,

    /// Iron content, percent
    pub iron_grade: Decimal,

    /// Moisture content, percent
    pub moisture: Decimal,

    /// Silica content, percent
    pub silica: Option<Decimal>,

    /// Phosphorus content, percent
    pub phosphorus: Option<Decimal>,

    /// Weight in metric tonnes
    pub tonnage: Decimal,

    /// Production timestamp
    pub production_date: DateTime<Utc>,

    /// 0=InStock, 1=InTransit, 2=Shipped
    pub status: i32,

    /// Current physical location
    pub current_location: String,
}

/// List of ore lots
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OreLotsListResponse {
    /// All stored lots, in storage order
    pub items: Vec<OreLotDto>,

    /// Total count
    pub total: usize,
}
