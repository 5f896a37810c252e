//! Ore Lot Service Module
//!
//! CRUD service for ore lot records: identification, quality metrics and
//! logistics status, backed by a relational database through SeaORM.

// Public exports
pub mod contract;
pub use contract::{LotStatus, NewOreLot, OreLot, OreLotApi, OreLotError, OreLotUpdate};

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
