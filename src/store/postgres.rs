//! Product CRUD against PostgreSQL.

use crate::error::AppError;
use crate::model::{Category, Product, ProductDraft, ProductFilter};
use crate::sql::{
    delete_product, insert_product, select_product_by_id, select_products, update_product,
    QueryBuf, PRODUCT_TABLE,
};
use crate::store::ProductStore;
use async_trait::async_trait;
use sqlx::postgres::{PgQueryResult, PgRow};
use sqlx::{PgPool, Row};

#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        PgProductStore { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn fetch_optional(&self, q: &QueryBuf) -> Result<Option<Product>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        let row = query.fetch_optional(&self.pool).await?;
        row.as_ref().map(product_from_row).transpose()
    }

    async fn fetch_all(&self, q: &QueryBuf) -> Result<Vec<Product>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        let rows = query.fetch_all(&self.pool).await?;
        rows.iter().map(product_from_row).collect()
    }

    async fn execute(&self, q: &QueryBuf) -> Result<PgQueryResult, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "execute");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        Ok(query.execute(&self.pool).await?)
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn create(&self, draft: &ProductDraft) -> Result<Product, AppError> {
        let q = insert_product(draft);
        let product = self
            .fetch_optional(&q)
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))?;
        tracing::info!(id = product.id, "product created");
        Ok(product)
    }

    async fn get(&self, id: i32) -> Result<Option<Product>, AppError> {
        self.fetch_optional(&select_product_by_id(id)).await
    }

    async fn update(&self, id: i32, draft: &ProductDraft) -> Result<Product, AppError> {
        self.fetch_optional(&update_product(id, draft))
            .await?
            .ok_or_else(|| AppError::product_not_found(id))
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        let result = self.execute(&delete_product(id)).await?;
        if result.rows_affected() == 0 {
            return Err(AppError::product_not_found(id));
        }
        tracing::info!(id, "product deleted");
        Ok(())
    }

    async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, AppError> {
        if filter.is_unsatisfiable() {
            return Ok(Vec::new());
        }
        self.fetch_all(&select_products(filter)).await
    }

    async fn clear(&self) -> Result<(), AppError> {
        sqlx::query(&format!("TRUNCATE {} RESTART IDENTITY", PRODUCT_TABLE))
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

fn product_from_row(row: &PgRow) -> Result<Product, AppError> {
    let category: String = row.try_get("category")?;
    let category = category
        .parse::<Category>()
        .map_err(|e| sqlx::Error::ColumnDecode {
            index: "category".into(),
            source: Box::new(e),
        })?;
    Ok(Product {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        price: row.try_get("price")?,
        available: row.try_get("available")?,
        category,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
