//! Product catalog: validated CRUD and filtered listing of products over HTTP, backed by PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;
pub mod telemetry;

pub use config::{Settings, StoreKind};
pub use error::{AppError, ConfigError, ValidationErrors};
pub use migration::{apply_migrations, ensure_database_exists};
pub use model::{Category, CategoryFilter, Product, ProductDraft, ProductFilter};
pub use routes::{app, common_routes, product_routes};
pub use service::ProductValidator;
pub use state::AppState;
pub use store::{MemoryProductStore, PgProductStore, ProductStore};
