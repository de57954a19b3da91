//! Product handlers: health, create, read, update, delete, list.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::{CategoryFilter, ProductFilter};
use crate::response::{created, no_content, ok, product_location};
use crate::service::ProductValidator;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Serialize)]
pub struct HealthBody {
    pub status: u16,
    pub message: &'static str,
}

/// A path id that is not an integer cannot name a product.
fn parse_id(id_str: &str) -> Result<i32, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::product_not_found(id_str))
}

/// Build a filter from `name`, `availability` (alias `available`) and `category` query params.
/// Blank values count as absent, so an empty search form lists everything. Other params are ignored.
pub fn filter_from_query(params: &HashMap<String, String>) -> Result<ProductFilter, AppError> {
    let param = |key: &str| {
        params
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    };
    let mut filter = ProductFilter::default();
    if let Some(name) = param("name") {
        filter = filter.with_name(name);
    }
    if let Some(raw) = param("availability").or_else(|| param("available")) {
        let available = if raw.eq_ignore_ascii_case("true") {
            true
        } else if raw.eq_ignore_ascii_case("false") {
            false
        } else {
            return Err(AppError::BadRequest(format!(
                "availability must be true or false, got '{}'",
                raw
            )));
        };
        filter = filter.with_available(available);
    }
    if let Some(category) = param("category") {
        filter = filter.with_category(CategoryFilter::parse(category));
    }
    Ok(filter)
}

pub async fn health() -> Json<HealthBody> {
    Json(HealthBody {
        status: 200,
        message: "OK",
    })
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let filter = filter_from_query(&params)?;
    tracing::debug!(?filter, "list products");
    let products = state.store.list(&filter).await?;
    Ok(ok(products))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let draft = ProductValidator::validate(&body)?;
    let product = state.store.create(&draft).await?;
    Ok(created(product_location(product.id), product))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let product = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::product_not_found(id))?;
    Ok(ok(product))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let draft = ProductValidator::validate(&body)?;
    let product = state.store.update(id, &draft).await?;
    Ok(ok(product))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    state.store.delete(id).await?;
    Ok(no_content())
}
