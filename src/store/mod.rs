//! Product persistence. Handlers only see the `ProductStore` trait; the concrete store is
//! chosen at startup and injected through `AppState`.

mod memory;
mod postgres;

pub use memory::MemoryProductStore;
pub use postgres::PgProductStore;

use crate::error::AppError;
use crate::model::{Product, ProductDraft, ProductFilter};
use async_trait::async_trait;

#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Persist a new product. The store assigns the id.
    async fn create(&self, draft: &ProductDraft) -> Result<Product, AppError>;

    /// Fetch one product; a miss is `Ok(None)`.
    async fn get(&self, id: i32) -> Result<Option<Product>, AppError>;

    /// Replace every mutable field of an existing product. `AppError::NotFound` when absent.
    async fn update(&self, id: i32, draft: &ProductDraft) -> Result<Product, AppError>;

    /// Hard delete. `AppError::NotFound` when absent, including a repeated delete.
    async fn delete(&self, id: i32) -> Result<(), AppError>;

    /// Products matching the filter, ordered by id.
    async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, AppError>;

    /// Remove every product and restart id assignment.
    async fn clear(&self) -> Result<(), AppError>;

    /// Reachability check for readiness probes.
    async fn ping(&self) -> Result<(), AppError>;
}
