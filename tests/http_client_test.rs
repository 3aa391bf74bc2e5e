// ABOUTME: Integration tests for the HTTP client against a mock backend server
// ABOUTME: Verifies response caching, envelope decoding, error mapping, and cache invalidation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use anyhow::Result;
use common::{init_test_logging, tomato};
use fridgechef::cache::{CacheKey, CacheProvider};
use fridgechef::client::{HttpApiClient, RecipeService};
use fridgechef::config::ClientConfig;
use fridgechef::errors::ErrorCode;
use fridgechef::models::{
    Credentials, InventoryItem, MeasurementsUpdate, NewRecipe, RecipeFilters,
};
use fridgechef::stores::InventoryStore;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> Result<HttpApiClient> {
    init_test_logging();
    Ok(HttpApiClient::new(&ClientConfig::for_base_url(server.uri()))?)
}

fn recipe_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "category": "Dinner",
        "recipeProducts": [
            { "product": { "id": "p-egg", "name": "Egg", "defaultUnit": "units" }, "quantity": "2" }
        ]
    })
}

#[tokio::test]
async fn test_identical_gets_hit_backend_once() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes/categories"))
        .and(header_exists("x-request-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["Breakfast", "Dinner"])))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server).await?;

    let first = client.recipe_categories().await?;
    let second = client.recipe_categories().await?;

    assert_eq!(first, vec!["Breakfast", "Dinner"]);
    assert_eq!(first, second);
    assert!(
        client
            .cache()
            .exists(&CacheKey::endpoint("/recipes/categories"))
            .await?
    );
    Ok(())
}

#[tokio::test]
async fn test_data_envelope_is_unwrapped() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes"))
        .and(query_param("name", "soup"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": [recipe_json("r-1", "Egg soup")] })),
        )
        .mount(&server)
        .await;
    let client = client_for(&server).await?;

    let recipes = client
        .search_recipes(&RecipeFilters::by_name("soup"))
        .await?;

    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].name, "Egg soup");
    assert_eq!(recipes[0].ingredients[0].required_quantity, Some(2.0));
    Ok(())
}

#[tokio::test]
async fn test_missing_recipe_maps_to_not_found() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes/r-404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Not found" })))
        .mount(&server)
        .await;
    let client = client_for(&server).await?;

    let error = client.get_recipe("r-404").await.unwrap_err();

    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert!(error.is_not_found());
    assert_eq!(error.context.resource_id.as_deref(), Some("r-404"));
    assert!(error.context.request_id.is_some());
    Ok(())
}

#[tokio::test]
async fn test_login_failure_keeps_server_message() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "message": "Invalid email or password" })),
        )
        .mount(&server)
        .await;
    let client = client_for(&server).await?;
    let credentials = Credentials {
        email: "ana@example.com".to_owned(),
        password: "wrong".to_owned(),
    };

    let error = client.login(&credentials).await.unwrap_err();

    assert_eq!(error.code, ErrorCode::AuthRequired);
    assert_eq!(error.context.details["message"], "Invalid email or password");
    assert_eq!(error.context.details["status"], 401);
    Ok(())
}

#[tokio::test]
async fn test_inventory_mutation_invalidates_session_status() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": {
                "id": "u-1",
                "username": "ana",
                "email": "ana@example.com",
                "userProducts": []
            }
        })))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/users/u-1/products/p-egg"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server).await?;

    client.auth_status().await?;
    client.auth_status().await?;
    client.add_user_product("u-1", "p-egg", 6.0).await?;
    let status = client.auth_status().await?;

    assert_eq!(status.user.id.as_deref(), Some("u-1"));
    Ok(())
}

#[tokio::test]
async fn test_profile_update_returns_user_and_invalidates_status() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/users/u-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": "u-1",
                "username": "ana",
                "email": "ana@example.com",
                "userProfiles": { "height": 175, "weight": 70, "imc": 22.86 }
            }
        })))
        .mount(&server)
        .await;
    let client = client_for(&server).await?;
    let status_key = CacheKey::endpoint("/auth/status");
    client
        .cache()
        .set(&status_key, &json!({ "user": {} }), Duration::from_secs(60))
        .await?;

    let user = client
        .update_user(
            "u-1",
            &MeasurementsUpdate {
                weight: 70.0,
                height: 175.0,
            },
        )
        .await?;

    assert_eq!(user.profile.and_then(|p| p.height), Some(175.0));
    assert!(!client.cache().exists(&status_key).await?);
    Ok(())
}

#[tokio::test]
async fn test_creating_recipe_invalidates_recipe_listings() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recipes"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([recipe_json("r-1", "Egg soup")])),
        )
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/recipes"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "data": recipe_json("r-2", "Flan") })),
        )
        .mount(&server)
        .await;
    let client = client_for(&server).await?;

    client.list_recipes().await?;
    client.list_products().await?;
    let created = client
        .create_recipe(&NewRecipe {
            name: "Flan".to_owned(),
            instructions: Vec::new(),
            steps: vec!["Bake".to_owned()],
            cooking_time: Some(60),
            difficulty: Some(2),
            category: "Dessert".to_owned(),
            food_type: None,
            image_url: None,
            calories: None,
        })
        .await?;
    client.list_recipes().await?;
    client.list_products().await?;

    assert_eq!(created.id, "r-2");
    Ok(())
}

#[tokio::test]
async fn test_plain_text_success_body_counts_as_applied() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/users/u-1/products/p-tomato"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Product removed"))
        .expect(1)
        .mount(&server)
        .await;
    let inventory = InventoryStore::new(Arc::new(client_for(&server).await?));
    inventory
        .set_items(vec![InventoryItem::new(tomato(), 2.0)])
        .await;

    inventory.remove_product("u-1", "p-tomato").await?;

    let state = inventory.snapshot().await;
    assert!(state.items.is_empty());
    assert_eq!(state.status.error, None);
    Ok(())
}

#[tokio::test]
async fn test_undecodable_listing_is_not_cached() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_string("maintenance"))
        .expect(2)
        .mount(&server)
        .await;
    let client = client_for(&server).await?;

    let error = client.list_products().await.unwrap_err();
    assert_eq!(error.code, ErrorCode::SerializationError);
    assert!(client.list_products().await.is_err());
    assert!(!client.cache().exists(&CacheKey::endpoint("/products")).await?);
    Ok(())
}
