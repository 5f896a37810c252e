//! Repository trait for ore lot data access
//!
//! The implementation lives in infra/storage/repositories.rs

use crate::contract::OreLot;
use anyhow::Result;
use async_trait::async_trait;

/// Repository for ore lots
#[async_trait]
pub trait OreLotRepository: Send + Sync {
    /// Insert a new lot; the `id` on the argument is ignored and the stored
    /// row (with generated id) is returned
    async fn insert(&self, lot: &OreLot) -> Result<OreLot>;

    /// Find a lot by primary key
    async fn find_by_id(&self, id: i32) -> Result<Option<OreLot>>;

    /// List every lot in storage order
    async fn list_all(&self) -> Result<Vec<OreLot>>;

    /// Overwrite an existing lot (matched on `lot.id`)
    async fn update(&self, lot: &OreLot) -> Result<()>;

    /// Delete a lot by primary key
    async fn delete(&self, id: i32) -> Result<()>;

    /// Check whether a lot with the given business code exists
    async fn exists_by_code(&self, lot_code: &str) -> Result<bool>;
}
