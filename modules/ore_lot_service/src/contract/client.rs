//! Native client trait for in-process callers
//!
//! Other components embed the service through this trait rather than going
//! over HTTP.

use super::{
    error::OreLotError,
    model::{NewOreLot, OreLot, OreLotUpdate},
};
use async_trait::async_trait;

/// Ore lot service API for in-process communication
#[async_trait]
pub trait OreLotApi: Send + Sync {
    /// Create a new lot; the returned value carries the generated id
    async fn create_lot(&self, input: NewOreLot) -> Result<OreLot, OreLotError>;

    /// Fetch a single lot by id
    async fn get_lot(&self, id: i32) -> Result<OreLot, OreLotError>;

    /// Fetch every stored lot, in storage order
    async fn list_lots(&self) -> Result<Vec<OreLot>, OreLotError>;

    /// Overwrite all mutable fields of an existing lot
    async fn update_lot(&self, id: i32, changes: OreLotUpdate) -> Result<(), OreLotError>;

    /// Remove a lot
    async fn delete_lot(&self, id: i32) -> Result<(), OreLotError>;
}
