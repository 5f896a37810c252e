//! SeaORM repository implementation

use crate::contract::{OreLot, OreLotError};
use crate::domain::repository::OreLotRepository;
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    SqlErr,
};
use std::sync::Arc;

use super::entity;

pub struct SeaOrmOreLotRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmOreLotRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OreLotRepository for SeaOrmOreLotRepository {
    async fn insert(&self, lot: &OreLot) -> Result<OreLot> {
        let active: entity::ActiveModel = lot.into();

        let result = entity::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await
            .map_err(|e| {
                // A racing create can pass the service pre-check and lose to
                // the unique index here; surface it as the same conflict.
                if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                    anyhow::Error::new(OreLotError::duplicate_code(&lot.lot_code))
                } else {
                    anyhow::Error::new(e)
                }
            })?;

        Ok(result.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<OreLot>> {
        let result = entity::Entity::find_by_id(id).one(&*self.db).await?;

        Ok(result.map(|e| e.into()))
    }

    async fn list_all(&self) -> Result<Vec<OreLot>> {
        // No explicit ordering; rows come back in storage order.
        let results = entity::Entity::find().all(&*self.db).await?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn update(&self, lot: &OreLot) -> Result<()> {
        let mut active: entity::ActiveModel = lot.into();
        active.id = Set(lot.id);

        entity::Entity::update(active).exec(&*self.db).await?;

        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<()> {
        entity::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| {
                if matches!(e.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))) {
                    anyhow::Error::new(OreLotError::referenced_elsewhere(id))
                } else {
                    anyhow::Error::new(e)
                }
            })?;

        Ok(())
    }

    async fn exists_by_code(&self, lot_code: &str) -> Result<bool> {
        let count = entity::Entity::find()
            .filter(entity::Column::LotCode.eq(lot_code))
            .count(&*self.db)
            .await?;

        Ok(count > 0)
    }
}
