//! Native client implementation - wraps the domain service for in-process calls

use crate::contract::{NewOreLot, OreLot, OreLotApi, OreLotError, OreLotUpdate};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client that directly calls the domain service, no HTTP involved
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl OreLotApi for NativeClient {
    async fn create_lot(&self, input: NewOreLot) -> Result<OreLot, OreLotError> {
        self.service.create_lot(input).await
    }

    async fn get_lot(&self, id: i32) -> Result<OreLot, OreLotError> {
        self.service.get_lot(id).await
    }

    async fn list_lots(&self) -> Result<Vec<OreLot>, OreLotError> {
        self.service.list_lots().await
    }

    async fn update_lot(&self, id: i32, changes: OreLotUpdate) -> Result<(), OreLotError> {
        self.service.update_lot(id, changes).await
    }

    async fn delete_lot(&self, id: i32) -> Result<(), OreLotError> {
        self.service.delete_lot(id).await
    }
}
