// ABOUTME: Remote service abstraction for the Fridgechef backend API
// ABOUTME: Stores depend on the RecipeService trait so tests can inject in-memory fakes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors

/// HTTP implementation with response caching
pub mod http;

use crate::errors::AppResult;
use crate::models::{
    AuthStatus, Credentials, MeasurementsUpdate, NewRecipe, Product, Recipe, RecipeFilters, User,
};
use async_trait::async_trait;
use std::sync::Arc;

pub use http::HttpApiClient;

/// Shared handle to a remote service implementation
pub type SharedService = Arc<dyn RecipeService>;

/// Operations the client performs against the backend.
///
/// Every call carries the session cookie issued at login. Implementations
/// map transport failures, non-success statuses, and undecodable bodies into
/// [`crate::errors::AppError`].
#[async_trait]
pub trait RecipeService: Send + Sync {
    /// `GET /auth/status`: current session user with the embedded inventory
    async fn auth_status(&self) -> AppResult<AuthStatus>;

    /// `POST /auth/login`
    async fn login(&self, credentials: &Credentials) -> AppResult<()>;

    /// `POST /auth/logout`
    async fn logout(&self) -> AppResult<()>;

    /// `PATCH /users/{id}`: returns the user with recomputed BMI
    async fn update_user(&self, user_id: &str, update: &MeasurementsUpdate) -> AppResult<User>;

    /// `POST /users/{id}/products/{productId}`
    async fn add_user_product(&self, user_id: &str, product_id: &str, quantity: f64)
        -> AppResult<()>;

    /// `DELETE /users/{id}/products/{productId}`
    async fn remove_user_product(&self, user_id: &str, product_id: &str) -> AppResult<()>;

    /// `GET /products`
    async fn list_products(&self) -> AppResult<Vec<Product>>;

    /// `GET /recipes`
    async fn list_recipes(&self) -> AppResult<Vec<Recipe>>;

    /// `GET /recipes?name=..&food_type=..&category=..&difficulty=..`
    async fn search_recipes(&self, filters: &RecipeFilters) -> AppResult<Vec<Recipe>>;

    /// `GET /recipes/{id}`
    async fn get_recipe(&self, recipe_id: &str) -> AppResult<Recipe>;

    /// `GET /recipes/recommend`
    async fn recommended_recipes(&self) -> AppResult<Vec<Recipe>>;

    /// `GET /recipes/categories`
    async fn recipe_categories(&self) -> AppResult<Vec<String>>;

    /// `POST /recipes`
    async fn create_recipe(&self, draft: &NewRecipe) -> AppResult<Recipe>;

    /// `DELETE /recipes/{id}`
    async fn delete_recipe(&self, recipe_id: &str) -> AppResult<()>;
}
