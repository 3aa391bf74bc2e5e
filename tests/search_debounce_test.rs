// ABOUTME: Integration tests for the debounced recipe search controller
// ABOUTME: Uses a paused tokio clock to check that bursts of input issue a single search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use common::{init_test_logging, recipe_in_category, MockService};
use fridgechef::config::ClientConfig;
use fridgechef::constants::search::ALL_CATEGORIES;
use fridgechef::models::RecipeFilters;
use fridgechef::search::SearchController;
use fridgechef::stores::RecipeStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::time;

const DELAY: Duration = Duration::from_millis(500);

fn controller() -> (Arc<MockService>, RecipeStore, SearchController) {
    init_test_logging();
    let mock = MockService::new();
    *mock.recipes.lock().unwrap() = vec![
        recipe_in_category("r-1", "Tomato soup", "Dinner"),
        recipe_in_category("r-2", "Omelette", "Breakfast"),
    ];
    let store = RecipeStore::new(mock.shared());
    let search = SearchController::new(store.clone(), DELAY);
    (mock, store, search)
}

#[tokio::test(start_paused = true)]
async fn test_burst_of_input_issues_one_search_with_last_term() -> Result<()> {
    let (mock, store, search) = controller();

    search.on_input("t");
    time::sleep(Duration::from_millis(100)).await;
    search.on_input("to");
    time::sleep(Duration::from_millis(100)).await;
    search.on_input("tom");
    assert!(search.is_pending());
    assert_eq!(mock.calls("search_recipes"), 0);

    time::sleep(DELAY + Duration::from_millis(50)).await;

    assert_eq!(mock.calls("search_recipes"), 1);
    assert_eq!(
        *mock.searches.lock().unwrap(),
        vec![RecipeFilters::by_name("tom")]
    );
    let state = store.snapshot().await;
    assert_eq!(state.recipes.len(), 1);
    assert_eq!(state.recipes[0].id, "r-1");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_inputs_spaced_beyond_delay_each_search() -> Result<()> {
    let (mock, _store, search) = controller();

    search.on_input("soup");
    time::sleep(DELAY * 2).await;
    search.on_input("omelette");
    time::sleep(DELAY * 2).await;

    assert_eq!(mock.calls("search_recipes"), 2);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_category_selection_is_immediate_and_cancels_pending_input() -> Result<()> {
    let (mock, store, search) = controller();

    search.on_input("soup");
    search.select_category("Breakfast").await?;

    assert_eq!(mock.calls("search_recipes"), 1);
    assert_eq!(store.snapshot().await.recipes[0].id, "r-2");

    time::sleep(DELAY * 2).await;
    assert_eq!(mock.calls("search_recipes"), 1);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_cancel_after_delay_lets_running_search_finish() -> Result<()> {
    let (mock, store, search) = controller();
    *mock.search_latency.lock().unwrap() = Some(Duration::from_secs(1));

    search.on_input("soup");
    time::sleep(DELAY + Duration::from_millis(100)).await;
    assert_eq!(mock.calls("search_recipes"), 1);
    assert!(store.snapshot().await.status.is_loading);
    assert!(!search.is_pending());

    search.cancel();
    time::sleep(Duration::from_secs(5)).await;

    let state = store.snapshot().await;
    assert!(!state.status.is_loading);
    assert_eq!(state.recipes.len(), 1);
    assert_eq!(state.recipes[0].id, "r-1");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_new_input_while_searching_keeps_running_search() -> Result<()> {
    let (mock, store, search) = controller();
    *mock.search_latency.lock().unwrap() = Some(Duration::from_secs(1));

    search.on_input("soup");
    time::sleep(DELAY + Duration::from_millis(100)).await;
    search.on_input("omelette");
    time::sleep(Duration::from_secs(5)).await;

    assert_eq!(
        *mock.searches.lock().unwrap(),
        vec![RecipeFilters::by_name("soup"), RecipeFilters::by_name("omelette")]
    );
    assert!(!store.snapshot().await.status.is_loading);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_all_categories_clears_category_filter() -> Result<()> {
    let (mock, store, search) = controller();

    search.select_category(ALL_CATEGORIES).await?;

    assert_eq!(*mock.searches.lock().unwrap(), vec![RecipeFilters::default()]);
    assert_eq!(store.snapshot().await.recipes.len(), 2);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_controller_uses_configured_delay() -> Result<()> {
    init_test_logging();
    let mock = MockService::new();
    let config = ClientConfig {
        search_debounce: Duration::from_millis(50),
        ..ClientConfig::default()
    };
    let search = SearchController::from_config(RecipeStore::new(mock.shared()), &config);

    search.on_input("egg");
    time::sleep(Duration::from_millis(60)).await;

    assert_eq!(mock.calls("search_recipes"), 1);
    Ok(())
}
