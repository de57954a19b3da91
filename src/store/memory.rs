//! In-process product store. Same contract as the PostgreSQL store; used by tests and
//! `STORE=memory` local runs.

use crate::error::AppError;
use crate::model::{Product, ProductDraft, ProductFilter};
use crate::store::ProductStore;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Table {
    last_id: i32,
    rows: BTreeMap<i32, Product>,
}

#[derive(Default)]
pub struct MemoryProductStore {
    table: RwLock<Table>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn create(&self, draft: &ProductDraft) -> Result<Product, AppError> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let now = Utc::now();
        let product = Product {
            id: table.last_id,
            name: draft.name.clone(),
            description: draft.description.clone(),
            price: draft.price,
            available: draft.available,
            category: draft.category,
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(product.id, product.clone());
        tracing::info!(id = product.id, "product created");
        Ok(product)
    }

    async fn get(&self, id: i32) -> Result<Option<Product>, AppError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn update(&self, id: i32, draft: &ProductDraft) -> Result<Product, AppError> {
        let mut table = self.table.write().await;
        let product = table
            .rows
            .get_mut(&id)
            .ok_or_else(|| AppError::product_not_found(id))?;
        product.name = draft.name.clone();
        product.description = draft.description.clone();
        product.price = draft.price;
        product.available = draft.available;
        product.category = draft.category;
        product.updated_at = Utc::now();
        Ok(product.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        let mut table = self.table.write().await;
        table
            .rows
            .remove(&id)
            .ok_or_else(|| AppError::product_not_found(id))?;
        tracing::info!(id, "product deleted");
        Ok(())
    }

    async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, AppError> {
        if filter.is_unsatisfiable() {
            return Ok(Vec::new());
        }
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }

    async fn clear(&self) -> Result<(), AppError> {
        let mut table = self.table.write().await;
        table.rows.clear();
        table.last_id = 0;
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
