//! Field validation for create/update input
//!
//! Checks run in a fixed order and the first violated rule wins; nothing is
//! aggregated. On success the decoded status is returned so callers never
//! re-parse the raw code.

use crate::contract::{LotStatus, NewOreLot, OreLotError, OreLotUpdate};
use rust_decimal::Decimal;

/// Validate a create input. Includes the `lotCode` presence check that
/// update input does not carry.
pub fn validate_new(input: &NewOreLot) -> Result<LotStatus, OreLotError> {
    if is_blank(&input.lot_code) {
        return Err(required("lotCode"));
    }
    validate_shared(
        &input.origin_mine,
        &input.current_location,
        input.iron_grade,
        input.moisture,
        input.tonnage,
        input.status,
    )
}

/// Validate an update input (`lotCode` is immutable and not present).
pub fn validate_update(changes: &OreLotUpdate) -> Result<LotStatus, OreLotError> {
    validate_shared(
        &changes.origin_mine,
        &changes.current_location,
        changes.iron_grade,
        changes.moisture,
        changes.tonnage,
        changes.status,
    )
}

fn validate_shared(
    origin_mine: &str,
    current_location: &str,
    iron_grade: Decimal,
    moisture: Decimal,
    tonnage: Decimal,
    status: i32,
) -> Result<LotStatus, OreLotError> {
    if is_blank(origin_mine) {
        return Err(required("originMine"));
    }
    if is_blank(current_location) {
        return Err(required("currentLocation"));
    }
    if !percentage_in_range(iron_grade) {
        return Err(OreLotError::Validation {
            message: "ironGrade must be between 0 and 100 (%).".to_string(),
        });
    }
    if !percentage_in_range(moisture) {
        return Err(OreLotError::Validation {
            message: "moisture must be between 0 and 100 (%).".to_string(),
        });
    }
    if tonnage <= Decimal::ZERO {
        return Err(OreLotError::Validation {
            message: "tonnage must be greater than 0.".to_string(),
        });
    }
    LotStatus::from_code(status).ok_or_else(|| OreLotError::Validation {
        message: "status is invalid (use 0, 1 or 2).".to_string(),
    })
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn percentage_in_range(value: Decimal) -> bool {
    value >= Decimal::ZERO && value <= Decimal::ONE_HUNDRED
}

fn required(field: &str) -> OreLotError {
    OreLotError::Validation {
        message: format!("{} is required.", field),
    }
}
