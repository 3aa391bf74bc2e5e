// ABOUTME: Integration tests for the session and catalog stores against an in-memory backend
// ABOUTME: Covers status checks, login failure messages, measurement updates, and quick-add suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use common::{egg, init_test_logging, milk, tomato, MockService, USER_ID};
use fridgechef::errors::ErrorCode;
use fridgechef::models::InventoryItem;
use fridgechef::stores::{AuthStore, CatalogStore, InventoryStore};

#[tokio::test]
async fn test_check_status_returns_embedded_inventory() -> Result<()> {
    init_test_logging();
    let mock = MockService::with_session(vec![
        InventoryItem::new(tomato(), 2.0),
        InventoryItem::new(egg(), 6.0),
    ]);
    let auth = AuthStore::new(mock.shared());
    let inventory = InventoryStore::new(mock.shared());

    let items = auth.check_status().await;
    inventory.set_items(items).await;

    let state = auth.snapshot().await;
    assert!(state.is_logged_in);
    assert_eq!(state.user_id(), Some(USER_ID));
    assert!(state.user.as_ref().unwrap().user_products.is_empty());
    assert_eq!(inventory.snapshot().await.items.len(), 2);
    assert_eq!(auth.current_user_id().await.as_deref(), Some(USER_ID));
    Ok(())
}

#[tokio::test]
async fn test_check_status_failure_means_logged_out_without_error() -> Result<()> {
    let mock = MockService::new();
    let auth = AuthStore::new(mock.shared());

    let items = auth.check_status().await;

    assert!(items.is_empty());
    let state = auth.snapshot().await;
    assert!(!state.is_logged_in);
    assert!(state.user.is_none());
    assert_eq!(state.status.error, None);
    assert!(!state.status.is_loading);
    Ok(())
}

#[tokio::test]
async fn test_login_failure_uses_server_message() -> Result<()> {
    let mock = MockService::new();
    let auth = AuthStore::new(mock.shared());
    mock.fail_with(401, "Invalid email or password");

    let error = auth.login("ana@example.com", "wrong").await.unwrap_err();

    assert_eq!(error.code, ErrorCode::AuthRequired);
    let state = auth.snapshot().await;
    assert!(!state.is_logged_in);
    assert_eq!(
        state.status.error.as_deref(),
        Some("Invalid email or password")
    );
    Ok(())
}

#[tokio::test]
async fn test_login_then_logout() -> Result<()> {
    let mock = MockService::with_session(Vec::new());
    let auth = AuthStore::new(mock.shared());

    auth.login(" ana@example.com ", "secret").await?;
    assert!(auth.snapshot().await.is_logged_in);

    auth.logout().await?;
    let state = auth.snapshot().await;
    assert!(!state.is_logged_in);
    assert!(state.user.is_none());
    assert_eq!(mock.calls("logout"), 1);
    Ok(())
}

#[tokio::test]
async fn test_update_measurements_validates_before_remote_call() -> Result<()> {
    let mock = MockService::with_session(Vec::new());
    let auth = AuthStore::new(mock.shared());

    let error = auth
        .update_measurements(USER_ID, Some(70.0), None)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);

    let error = auth
        .update_measurements(" ", Some(70.0), Some(175.0))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::AuthRequired);

    assert_eq!(mock.calls("update_user"), 0);
    Ok(())
}

#[tokio::test]
async fn test_update_measurements_stores_returned_user() -> Result<()> {
    let mock = MockService::with_session(Vec::new());
    let auth = AuthStore::new(mock.shared());

    let user = auth
        .update_measurements(USER_ID, Some(70.0), Some(175.0))
        .await?;

    let profile = user.profile.as_ref().unwrap();
    assert_eq!(profile.weight, Some(70.0));
    assert_eq!(profile.height, Some(175.0));
    assert!(user.user_products.is_empty());
    assert_eq!(auth.snapshot().await.user, Some(user));
    Ok(())
}

#[tokio::test]
async fn test_catalog_search_and_quick_add() -> Result<()> {
    let mock = MockService::with_session(Vec::new());
    let catalog = CatalogStore::new(mock.shared());
    catalog.fetch_products().await?;

    let found = catalog.search("CAFE").await;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Café");
    assert_eq!(catalog.search("").await.len(), 4);

    // Held by id (tomato) and by name only (a differently keyed "milk")
    let mut renamed_milk = milk();
    renamed_milk.id = "p-legacy-milk".to_owned();
    let held = vec![
        InventoryItem::new(tomato(), 1.0),
        InventoryItem::new(renamed_milk, 1.0),
    ];
    let candidates: Vec<String> = catalog
        .quick_add_candidates(&held, 8)
        .await
        .into_iter()
        .map(|product| product.id)
        .collect();
    assert_eq!(candidates, vec!["p-egg", "p-cafe"]);

    assert_eq!(catalog.quick_add_candidates(&held, 1).await.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_catalog_resolves_by_id_or_normalized_name() -> Result<()> {
    let mock = MockService::with_session(Vec::new());
    let catalog = CatalogStore::new(mock.shared());
    catalog.fetch_products().await?;

    let state = catalog.snapshot().await;
    assert_eq!(state.resolve("p-egg").map(|p| p.name.as_str()), Some("Egg"));
    assert_eq!(state.resolve(" cafe ").map(|p| p.id.as_str()), Some("p-cafe"));
    assert!(state.resolve("flour").is_none());

    mock.fail_with(500, "boom");
    assert!(catalog.fetch_products().await.is_err());
    let state = catalog.snapshot().await;
    assert_eq!(state.products.len(), 4);
    assert_eq!(state.status.error.as_deref(), Some("Failed to fetch products."));
    Ok(())
}
