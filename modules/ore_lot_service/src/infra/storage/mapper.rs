//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity;
use crate::contract::{LotStatus, OreLot};

impl From<entity::Model> for OreLot {
    fn from(entity: entity::Model) -> Self {
        Self {
            id: entity.id,
            lot_code: entity.lot_code,
            origin_mine: entity.origin_mine,
            iron_grade: entity.iron_grade,
            moisture: entity.moisture,
            silica: entity.silica,
            phosphorus: entity.phosphorus,
            tonnage: entity.tonnage,
            production_date: entity.production_date,
            // storage permits any integer; unknown codes read back as InStock
            status: LotStatus::from_code(entity.status).unwrap_or_default(),
            current_location: entity.current_location,
        }
    }
}

impl From<&OreLot> for entity::ActiveModel {
    fn from(model: &OreLot) -> Self {
        use sea_orm::ActiveValue::*;

        // `id` stays NotSet so inserts let storage generate it; the update
        // path sets it explicitly.
        Self {
            id: NotSet,
            lot_code: Set(model.lot_code.clone()),
            origin_mine: Set(model.origin_mine.clone()),
            iron_grade: Set(model.iron_grade),
            moisture: Set(model.moisture),
            silica: Set(model.silica),
            phosphorus: Set(model.phosphorus),
            tonnage: Set(model.tonnage),
            production_date: Set(model.production_date),
            status: Set(model.status.code()),
            current_location: Set(model.current_location.clone()),
        }
    }
}
