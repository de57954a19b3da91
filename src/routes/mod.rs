//! Router assembly.

mod common;
mod product;

pub use common::common_routes;
pub use product::product_routes;

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Full application: common routes plus the product API, with request tracing and a body size limit.
/// The limit is enforced when the body is buffered, so oversized requests surface as
/// `AppError::PayloadTooLarge` whether or not they carry `Content-Length`.
pub fn app(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(product_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(body_limit)),
        )
}
