//! Contract models for the ore lot service
//!
//! These models are transport-agnostic and used by in-process callers.
//! NO serde derives - these are pure domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Coarse lifecycle stage of an ore lot, stored as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LotStatus {
    /// Sitting in a stockyard (0)
    InStock,
    /// On rail or road (1)
    InTransit,
    /// Loaded onto a vessel (2)
    Shipped,
}

impl LotStatus {
    /// Decode a stored/inbound status code. Returns `None` for anything
    /// outside the three known values.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::InStock),
            1 => Some(Self::InTransit),
            2 => Some(Self::Shipped),
            _ => None,
        }
    }

    /// The integer representation persisted in storage.
    pub fn code(self) -> i32 {
        match self {
            Self::InStock => 0,
            Self::InTransit => 1,
            Self::Shipped => 2,
        }
    }
}

impl Default for LotStatus {
    fn default() -> Self {
        Self::InStock
    }
}

/// A tracked batch of mined material with quality and logistics attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct OreLot {
    /// Surrogate key, generated by storage on insert
    pub id: i32,
    /// Externally assigned business identifier, unique across all lots
    pub lot_code: String,
    /// Mine the lot was extracted from
    pub origin_mine: String,
    /// Iron content, percent
    pub iron_grade: Decimal,
    /// Moisture content, percent
    pub moisture: Decimal,
    /// Silica content, percent (optional)
    pub silica: Option<Decimal>,
    /// Phosphorus content, percent (optional)
    pub phosphorus: Option<Decimal>,
    /// Lot weight in metric tonnes
    pub tonnage: Decimal,
    /// When the lot was produced
    pub production_date: DateTime<Utc>,
    /// Lifecycle stage
    pub status: LotStatus,
    /// Where the lot currently sits (yard, train, port, ...)
    pub current_location: String,
}

/// Candidate field set for creating a lot.
///
/// `status` stays a raw code here; the validation layer owns the
/// three-known-values check so rejection ordering is deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOreLot {
    pub lot_code: String,
    pub origin_mine: String,
    pub iron_grade: Decimal,
    pub moisture: Decimal,
    pub silica: Option<Decimal>,
    pub phosphorus: Option<Decimal>,
    pub tonnage: Decimal,
    /// Defaults to the current time when omitted
    pub production_date: Option<DateTime<Utc>>,
    pub status: i32,
    pub current_location: String,
}

/// Candidate field set for updating a lot. `lot_code` is immutable and
/// therefore absent here.
#[derive(Debug, Clone, PartialEq)]
pub struct OreLotUpdate {
    pub origin_mine: String,
    pub iron_grade: Decimal,
    pub moisture: Decimal,
    pub silica: Option<Decimal>,
    pub phosphorus: Option<Decimal>,
    pub tonnage: Decimal,
    /// Retains the stored value when omitted
    pub production_date: Option<DateTime<Utc>>,
    pub status: i32,
    pub current_location: String,
}
