//! Shared test fixtures: an in-memory repository and input builders

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use ore_lot_service::contract::{NewOreLot, OreLot, OreLotError, OreLotUpdate};
use ore_lot_service::domain::repository::OreLotRepository;
use parking_lot::RwLock;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::Arc;

/// In-memory repository mirroring the SeaORM implementation's contract:
/// insertion order is preserved, the unique index and referential
/// constraints are emulated by wrapping `OreLotError` into the failure.
pub struct MockOreLotRepo {
    rows: RwLock<Vec<OreLot>>,
    referenced: RwLock<Vec<i32>>,
    next_id: AtomicI32,
    /// When set, `exists_by_code` reports false once so a create can slip
    /// past the service pre-check and lose to the "index" at insert time.
    race_window: AtomicBool,
}

impl MockOreLotRepo {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            rows: RwLock::new(Vec::new()),
            referenced: RwLock::new(Vec::new()),
            next_id: AtomicI32::new(1),
            race_window: AtomicBool::new(false),
        })
    }

    pub fn count(&self) -> usize {
        self.rows.read().len()
    }

    /// Mark a lot as referenced by other records; deleting it will then
    /// trip the emulated foreign-key constraint.
    pub fn mark_referenced(&self, id: i32) {
        self.referenced.write().push(id);
    }

    /// Arm the duplicate-create race: the next `exists_by_code` lies.
    pub fn open_race_window(&self) {
        self.race_window.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl OreLotRepository for MockOreLotRepo {
    async fn insert(&self, lot: &OreLot) -> Result<OreLot> {
        let mut rows = self.rows.write();
        if rows.iter().any(|r| r.lot_code == lot.lot_code) {
            return Err(anyhow::Error::new(OreLotError::duplicate_code(
                &lot.lot_code,
            )));
        }

        let mut stored = lot.clone();
        stored.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<OreLot>> {
        Ok(self.rows.read().iter().find(|r| r.id == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<OreLot>> {
        Ok(self.rows.read().clone())
    }

    async fn update(&self, lot: &OreLot) -> Result<()> {
        let mut rows = self.rows.write();
        match rows.iter_mut().find(|r| r.id == lot.id) {
            Some(row) => {
                *row = lot.clone();
                Ok(())
            }
            None => Err(anyhow::anyhow!("no row with id {}", lot.id)),
        }
    }

    async fn delete(&self, id: i32) -> Result<()> {
        if self.referenced.read().contains(&id) {
            return Err(anyhow::Error::new(OreLotError::referenced_elsewhere(id)));
        }
        self.rows.write().retain(|r| r.id != id);
        Ok(())
    }

    async fn exists_by_code(&self, lot_code: &str) -> Result<bool> {
        if self.race_window.swap(false, Ordering::SeqCst) {
            return Ok(false);
        }
        Ok(self.rows.read().iter().any(|r| r.lot_code == lot_code))
    }
}

/// A valid create input with the given lot code.
pub fn sample_new_lot(lot_code: &str) -> NewOreLot {
    NewOreLot {
        lot_code: lot_code.to_string(),
        origin_mine: "Carajas N4E".to_string(),
        iron_grade: Decimal::new(652, 1), // 65.2
        moisture: Decimal::new(71, 1),    // 7.1
        silica: Some(Decimal::new(43, 1)),
        phosphorus: Some(Decimal::new(38, 3)),
        tonnage: Decimal::from(12_500),
        production_date: None,
        status: 0,
        current_location: "Patio Carajas".to_string(),
    }
}

/// A valid update input moving the lot onto a train.
pub fn sample_update() -> OreLotUpdate {
    OreLotUpdate {
        origin_mine: "Serra Norte".to_string(),
        iron_grade: Decimal::new(641, 1), // 64.1
        moisture: Decimal::new(80, 1),    // 8.0
        silica: None,
        phosphorus: Some(Decimal::new(41, 3)),
        tonnage: Decimal::from(11_980),
        production_date: None,
        status: 1,
        current_location: "EFC - Train 208".to_string(),
    }
}

/// A fixed timestamp for tests that pin the production date.
pub fn fixed_production_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 14, 6, 30, 0).single().unwrap()
}
