//! Product routes under `/api/products`.

use crate::handlers::product::{create, delete as delete_handler, health, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/products/health", get(health))
        .route("/api/products", get(list).post(create))
        .route(
            "/api/products/:id",
            get(read).put(update).delete(delete_handler),
        )
        .with_state(state)
}
