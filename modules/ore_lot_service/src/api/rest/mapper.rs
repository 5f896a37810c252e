//! Conversions between REST DTOs and contract models

use super::dto::{CreateOreLotRequest, OreLotDto, UpdateOreLotRequest};
use crate::contract::{NewOreLot, OreLot, OreLotUpdate};

impl From<OreLot> for OreLotDto {
    fn from(lot: OreLot) -> Self {
        Self {
            id: lot.id,
            lot_code: lot.lot_code,
            origin_mine: lot.origin_mine,
            iron_grade: lot.iron_grade,
            moisture: lot.moisture,
            silica: lot.silica,
            phosphorus: lot.phosphorus,
            tonnage: lot.tonnage,
            production_date: lot.production_date,
            status: lot.status.code(),
            current_location: lot.current_location,
        }
    }
}

impl From<CreateOreLotRequest> for NewOreLot {
    fn from(req: CreateOreLotRequest) -> Self {
        Self {
            lot_code: req.lot_code,
            origin_mine: req.origin_mine,
            iron_grade: req.iron_grade,
            moisture: req.moisture,
            silica: req.silica,
            phosphorus: req.phosphorus,
            tonnage: req.tonnage,
            production_date: req.production_date,
            status: req.status,
            current_location: req.current_location,
        }
    }
}

impl From<UpdateOreLotRequest> for OreLotUpdate {
    fn from(req: UpdateOreLotRequest) -> Self {
        Self {
            origin_mine: req.origin_mine,
            iron_grade: req.iron_grade,
            moisture: req.moisture,
            silica: req.silica,
            phosphorus: req.phosphorus,
            tonnage: req.tonnage,
            production_date: req.production_date,
            status: req.status,
            current_location: req.current_location,
        }
    }
}
