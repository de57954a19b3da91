#![allow(dead_code)]

pub mod contract;

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use product_catalog::{app, AppState, MemoryProductStore, ProductDraft, ProductValidator};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

pub const BASE_URL: &str = "/api/products";

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryProductStore>,
}

pub fn test_app() -> TestApp {
    test_app_with_body_limit(1024 * 1024)
}

pub fn test_app_with_body_limit(body_limit: usize) -> TestApp {
    let store = Arc::new(MemoryProductStore::new());
    let router = app(AppState::new(store.clone()), body_limit);
    TestApp { router, store }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
    pub text: String,
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        TestResponse {
            status,
            headers,
            body,
            text,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Request::delete(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn send_json(&self, method: Method, uri: &str, body: &Value) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap();
        self.send(request).await
    }

    pub async fn post_json(&self, body: &Value) -> TestResponse {
        self.send_json(Method::POST, BASE_URL, body).await
    }

    /// POST a product and return its assigned id.
    pub async fn create(&self, body: &Value) -> i64 {
        let resp = self.post_json(body).await;
        assert_eq!(resp.status, StatusCode::CREATED, "{}", resp.text);
        resp.body["id"].as_i64().unwrap()
    }
}

const NAMES: [&str; 11] = [
    "Hat", "Pants", "Shirt", "Apple", "Banana", "Pots", "Towels", "Ford", "Chevy", "Hammer",
    "Wrench",
];
const CATEGORIES: [&str; 6] = ["UNKNOWN", "CLOTHS", "FOOD", "HOUSEWARES", "AUTOMOTIVE", "TOOLS"];

/// Deterministic valid product payload; `seed` varies every field.
pub fn product_json(seed: usize) -> Value {
    json!({
        "name": NAMES[seed % NAMES.len()],
        "description": format!("Sample product number {}", seed),
        "price": 1.25 + seed as f64 * 3.5,
        "available": seed % 2 == 0,
        "category": CATEGORIES[seed % CATEGORIES.len()],
    })
}

pub fn draft(seed: usize) -> ProductDraft {
    ProductValidator::validate(&product_json(seed)).unwrap()
}
