//! Behaviour every `ProductStore` must share. Each check expects an empty store.

use super::draft;
use product_catalog::{
    AppError, Category, CategoryFilter, ProductFilter, ProductStore, ProductValidator,
};
use serde_json::json;

pub async fn create_then_get(store: &dyn ProductStore) {
    let d = draft(3);
    let created = store.create(&d).await.unwrap();
    assert!(created.matches_draft(&d));
    let fetched = store.get(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.id, created.id);
    assert!(fetched.matches_draft(&d));
}

pub async fn ids_are_unique(store: &dyn ProductStore) {
    let a = store.create(&draft(0)).await.unwrap();
    let b = store.create(&draft(0)).await.unwrap();
    assert_ne!(a.id, b.id);
}

pub async fn get_missing_is_none(store: &dyn ProductStore) {
    assert!(store.get(9999).await.unwrap().is_none());
}

pub async fn update_keeps_id(store: &dyn ProductStore) {
    let created = store.create(&draft(1)).await.unwrap();
    let replacement = draft(4);
    let updated = store.update(created.id, &replacement).await.unwrap();
    assert_eq!(updated.id, created.id);
    assert!(updated.matches_draft(&replacement));
    assert!(updated.updated_at >= created.updated_at);
    let fetched = store.get(created.id).await.unwrap().unwrap();
    assert!(fetched.matches_draft(&replacement));
}

pub async fn update_missing_is_not_found(store: &dyn ProductStore) {
    let err = store.update(9999, &draft(1)).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

pub async fn delete_twice(store: &dyn ProductStore) {
    let created = store.create(&draft(2)).await.unwrap();
    store.delete(created.id).await.unwrap();
    assert!(store.get(created.id).await.unwrap().is_none());
    let err = store.delete(created.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

pub async fn list_tracks_creates_and_deletes(store: &dyn ProductStore) {
    let all = ProductFilter::default();
    let mut ids = Vec::new();
    for seed in 0..4 {
        ids.push(store.create(&draft(seed)).await.unwrap().id);
    }
    assert_eq!(store.list(&all).await.unwrap().len(), 4);
    store.delete(ids[1]).await.unwrap();
    store.create(&draft(9)).await.unwrap();
    store.delete(ids[3]).await.unwrap();
    let listed = store.list(&all).await.unwrap();
    assert_eq!(listed.len(), 3);
    assert!(listed.windows(2).all(|w| w[0].id < w[1].id));
}

pub async fn list_filters(store: &dyn ProductStore) {
    let make = |name: &str, available: bool, category: &str| {
        ProductValidator::validate(&json!({
            "name": name,
            "description": "filter test",
            "price": 5,
            "available": available,
            "category": category
        }))
        .unwrap()
    };
    store.create(&make("Banana", true, "FOOD")).await.unwrap();
    store.create(&make("Banana bread", false, "FOOD")).await.unwrap();
    store.create(&make("Wrench", true, "TOOLS")).await.unwrap();
    store.create(&make("100% cotton_shirt", true, "CLOTHS")).await.unwrap();

    let by_name = store
        .list(&ProductFilter::default().with_name("BANANA"))
        .await
        .unwrap();
    assert_eq!(by_name.len(), 2);

    let available_food = store
        .list(
            &ProductFilter::default()
                .with_available(true)
                .with_category(CategoryFilter::Known(Category::Food)),
        )
        .await
        .unwrap();
    assert_eq!(available_food.len(), 1);
    assert_eq!(available_food[0].name, "Banana");

    let literal = store
        .list(&ProductFilter::default().with_name("0% c"))
        .await
        .unwrap();
    assert_eq!(literal.len(), 1);
    let wildcard = store
        .list(&ProductFilter::default().with_name("%"))
        .await
        .unwrap();
    assert_eq!(wildcard.len(), 1);

    let bogus = store
        .list(&ProductFilter::default().with_category(CategoryFilter::parse("BOGUS")))
        .await
        .unwrap();
    assert!(bogus.is_empty());
}

pub async fn clear_restarts_ids(store: &dyn ProductStore) {
    store.create(&draft(0)).await.unwrap();
    store.create(&draft(1)).await.unwrap();
    store.clear().await.unwrap();
    assert!(store.list(&ProductFilter::default()).await.unwrap().is_empty());
    assert_eq!(store.create(&draft(2)).await.unwrap().id, 1);
}
