//! Domain service - business logic orchestration

use super::repository::OreLotRepository;
use super::validation;
use crate::contract::{NewOreLot, OreLot, OreLotError, OreLotUpdate};
use chrono::Utc;
use std::sync::Arc;

/// Domain service for ore lot management
pub struct Service {
    repo: Arc<dyn OreLotRepository>,
}

impl Service {
    /// Create a new service instance
    pub fn new(repo: Arc<dyn OreLotRepository>) -> Self {
        Self { repo }
    }

    /// Create a lot: validate, reject duplicate codes, default the
    /// production date, persist.
    ///
    /// The uniqueness pre-check is not atomic with the insert; a racing
    /// create that slips past it is still caught when the unique index
    /// rejects the insert, and surfaces as the same conflict.
    pub async fn create_lot(&self, input: NewOreLot) -> Result<OreLot, OreLotError> {
        let status = validation::validate_new(&input)?;

        if self
            .repo
            .exists_by_code(&input.lot_code)
            .await
            .map_err(map_storage_error)?
        {
            return Err(OreLotError::duplicate_code(&input.lot_code));
        }

        let lot = OreLot {
            // placeholder; storage assigns the real id on insert
            id: 0,
            lot_code: input.lot_code,
            origin_mine: input.origin_mine,
            iron_grade: input.iron_grade,
            moisture: input.moisture,
            silica: input.silica,
            phosphorus: input.phosphorus,
            tonnage: input.tonnage,
            production_date: input.production_date.unwrap_or_else(Utc::now),
            status,
            current_location: input.current_location,
        };

        self.repo.insert(&lot).await.map_err(map_storage_error)
    }

    /// Fetch a single lot by id
    pub async fn get_lot(&self, id: i32) -> Result<OreLot, OreLotError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(map_storage_error)?
            .ok_or(OreLotError::NotFound { id })
    }

    /// Fetch every stored lot, unfiltered and unpaginated
    pub async fn list_lots(&self) -> Result<Vec<OreLot>, OreLotError> {
        self.repo.list_all().await.map_err(map_storage_error)
    }

    /// Overwrite all mutable fields of an existing lot. `id` and `lot_code`
    /// never change; an omitted production date keeps the stored value.
    pub async fn update_lot(&self, id: i32, changes: OreLotUpdate) -> Result<(), OreLotError> {
        let status = validation::validate_update(&changes)?;

        let stored = self
            .repo
            .find_by_id(id)
            .await
            .map_err(map_storage_error)?
            .ok_or(OreLotError::NotFound { id })?;

        let lot = OreLot {
            id: stored.id,
            lot_code: stored.lot_code,
            origin_mine: changes.origin_mine,
            iron_grade: changes.iron_grade,
            moisture: changes.moisture,
            silica: changes.silica,
            phosphorus: changes.phosphorus,
            tonnage: changes.tonnage,
            production_date: changes.production_date.unwrap_or(stored.production_date),
            status,
            current_location: changes.current_location,
        };

        self.repo.update(&lot).await.map_err(map_storage_error)
    }

    /// Remove a lot. A referential constraint violation from storage is
    /// surfaced as a conflict instead of an internal error.
    pub async fn delete_lot(&self, id: i32) -> Result<(), OreLotError> {
        if self
            .repo
            .find_by_id(id)
            .await
            .map_err(map_storage_error)?
            .is_none()
        {
            return Err(OreLotError::NotFound { id });
        }

        self.repo.delete(id).await.map_err(map_storage_error)
    }
}

/// Map repository failures to contract errors. Constraint violations are
/// translated into `OreLotError` by the storage layer and pass through;
/// anything else is logged and collapsed to `Internal`.
fn map_storage_error(err: anyhow::Error) -> OreLotError {
    match err.downcast::<OreLotError>() {
        Ok(domain) => domain,
        Err(err) => {
            tracing::error!(error = ?err, "ore lot storage failure");
            OreLotError::Internal
        }
    }
}
