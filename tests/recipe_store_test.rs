// ABOUTME: Integration tests for the recipe store against an in-memory backend
// ABOUTME: Covers listing, detail lookups with not-found fallback, search, and create/delete
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use common::{egg, init_test_logging, recipe, recipe_in_category, MockService};
use fridgechef::errors::ErrorCode;
use fridgechef::models::{NewRecipe, RecipeFilters};
use fridgechef::stores::recipes::RECIPE_NOT_FOUND;
use fridgechef::stores::RecipeStore;
use std::sync::Arc;

fn kitchen() -> Arc<MockService> {
    init_test_logging();
    let mock = MockService::new();
    *mock.recipes.lock().unwrap() = vec![
        recipe_in_category("r-1", "Tomato soup", "Dinner"),
        recipe_in_category("r-2", "Omelette", "Breakfast"),
        recipe_in_category("r-3", "Egg soup", "Dinner"),
    ];
    *mock.recommended.lock().unwrap() = vec![recipe("r-2", "Omelette", &[(egg(), 3.0)])];
    *mock.categories.lock().unwrap() = vec!["Breakfast".to_owned(), "Dinner".to_owned()];
    mock
}

#[tokio::test]
async fn test_fetch_recipes_and_categories() -> Result<()> {
    let mock = kitchen();
    let store = RecipeStore::new(mock.shared());

    store.fetch_recipes().await?;
    store.fetch_categories().await?;
    store.fetch_recommended().await?;

    let state = store.snapshot().await;
    assert_eq!(state.recipes.len(), 3);
    assert_eq!(state.categories, vec!["Breakfast", "Dinner"]);
    assert_eq!(state.recommended[0].id, "r-2");
    assert!(!state.status.is_loading);
    Ok(())
}

#[tokio::test]
async fn test_fetch_recipe_sets_detail() -> Result<()> {
    let mock = kitchen();
    let store = RecipeStore::new(mock.shared());

    let found = store.fetch_recipe("r-3").await?;

    assert_eq!(found.map(|r| r.name), Some("Egg soup".to_owned()));
    let state = store.snapshot().await;
    assert_eq!(state.recipe.as_ref().map(|r| r.id.as_str()), Some("r-3"));
    assert_eq!(state.find("r-3").map(|r| r.category.as_str()), Some("Dinner"));
    Ok(())
}

#[tokio::test]
async fn test_unknown_recipe_renders_not_found() -> Result<()> {
    let mock = kitchen();
    let store = RecipeStore::new(mock.shared());
    store.fetch_recipe("r-1").await?;

    let missing = store.fetch_recipe("r-404").await?;

    assert!(missing.is_none());
    let state = store.snapshot().await;
    assert!(state.recipe.is_none());
    assert_eq!(state.status.error.as_deref(), Some(RECIPE_NOT_FOUND));
    Ok(())
}

#[tokio::test]
async fn test_fetch_recipe_propagates_other_failures() -> Result<()> {
    let mock = kitchen();
    let store = RecipeStore::new(mock.shared());
    mock.fail_with(502, "bad gateway");

    let error = store.fetch_recipe("r-1").await.unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert_eq!(error.context.resource_id.as_deref(), Some("r-1"));
    assert_eq!(
        store.snapshot().await.status.error.as_deref(),
        Some("Failed to fetch recipe.")
    );
    Ok(())
}

#[tokio::test]
async fn test_search_replaces_list_and_remembers_filters() -> Result<()> {
    let mock = kitchen();
    let store = RecipeStore::new(mock.shared());
    store.fetch_recipes().await?;

    store.search(RecipeFilters::by_name("soup")).await?;
    let state = store.snapshot().await;
    let ids: Vec<&str> = state.recipes.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["r-1", "r-3"]);
    assert_eq!(state.filters, RecipeFilters::by_name("soup"));

    store.search(RecipeFilters::by_category("Breakfast")).await?;
    assert_eq!(store.snapshot().await.recipes.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_failed_fetch_keeps_previous_list() -> Result<()> {
    let mock = kitchen();
    let store = RecipeStore::new(mock.shared());
    store.fetch_recipes().await?;

    mock.fail_with(503, "maintenance");
    assert!(store.fetch_recipes().await.is_err());

    let state = store.snapshot().await;
    assert_eq!(state.recipes.len(), 3);
    assert_eq!(state.status.error.as_deref(), Some("Failed to fetch recipes."));
    assert!(!state.status.is_loading);
    Ok(())
}

#[tokio::test]
async fn test_add_and_delete_recipe() -> Result<()> {
    let mock = kitchen();
    let store = RecipeStore::new(mock.shared());
    store.fetch_recipes().await?;
    store.fetch_recipe("r-1").await?;

    let draft = NewRecipe {
        name: "Pan con tomate".to_owned(),
        instructions: Vec::new(),
        steps: vec!["Toast bread".to_owned(), "Rub tomato".to_owned()],
        cooking_time: Some(5),
        difficulty: Some(1),
        category: "Breakfast".to_owned(),
        food_type: None,
        image_url: None,
        calories: None,
    };
    let created = store.add_recipe(&draft).await?;
    assert_eq!(store.snapshot().await.recipes.len(), 4);

    store.delete_recipe(&created.id).await?;
    store.delete_recipe("r-1").await?;

    let state = store.snapshot().await;
    assert_eq!(state.recipes.len(), 2);
    assert!(state.recipe.is_none());
    assert_eq!(mock.calls("delete_recipe"), 2);
    assert!(state.find("r-1").is_none());
    Ok(())
}
