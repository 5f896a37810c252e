//! SeaORM entity for the ore lots table

use sea_orm::entity::prelude::*;

/// Ore lots table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(schema_name = "public", table_name = "ore_lots")]
pub struct Model {
    /// Surrogate key
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Business code, unique across all lots
    #[sea_orm(unique)]
    pub lot_code: String,

    /// Mine of origin
    pub origin_mine: String,

    /// Iron content, percent
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub iron_grade: Decimal,

    /// Moisture content, percent
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub moisture: Decimal,

    /// Silica content, percent
    #[sea_orm(column_type = "Decimal(Some((5, 2)))", nullable)]
    pub silica: Option<Decimal>,

    /// Phosphorus content, percent
    #[sea_orm(column_type = "Decimal(Some((5, 3)))", nullable)]
    pub phosphorus: Option<Decimal>,

    /// Weight in metric tonnes
    #[sea_orm(column_type = "Decimal(Some((12, 3)))")]
    pub tonnage: Decimal,

    /// Production timestamp
    pub production_date: DateTimeUtc,

    /// Lifecycle stage stored as an integer
    pub status: i32,

    /// Current physical location
    pub current_location: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
