// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, sample catalog data, and an in-memory RecipeService
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::significant_drop_tightening
)]
//! Shared test utilities for `fridgechef`

use async_trait::async_trait;
use fridgechef::client::{RecipeService, SharedService};
use fridgechef::errors::{AppError, AppResult};
use fridgechef::models::{
    AuthStatus, Credentials, IngredientRequirement, InventoryItem, MeasurementsUpdate, NewRecipe,
    Product, Recipe, RecipeFilters, User, UserProfile,
};
use std::collections::HashMap;
use std::env;
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

pub const USER_ID: &str = "u-1";

pub fn tomato() -> Product {
    Product::new("p-tomato", "Tomato", "units")
}

pub fn egg() -> Product {
    Product::new("p-egg", "Egg", "units")
}

pub fn milk() -> Product {
    Product::new("p-milk", "Milk", "ml")
}

pub fn cafe() -> Product {
    Product::new("p-cafe", "Café", "g")
}

pub fn catalog() -> Vec<Product> {
    vec![tomato(), egg(), milk(), cafe()]
}

/// Recipe with one ingredient line per `(product, quantity)`
pub fn recipe(id: &str, name: &str, lines: &[(Product, f64)]) -> Recipe {
    Recipe {
        id: id.to_owned(),
        name: name.to_owned(),
        instructions: Vec::new(),
        steps: Vec::new(),
        cooking_time: None,
        difficulty: None,
        category: String::new(),
        food_type: None,
        image_url: None,
        calories: None,
        is_recommend: false,
        ingredients: lines
            .iter()
            .map(|(product, quantity)| IngredientRequirement::new(product.clone(), *quantity))
            .collect(),
    }
}

pub fn recipe_in_category(id: &str, name: &str, category: &str) -> Recipe {
    let mut recipe = recipe(id, name, &[(egg(), 2.0)]);
    category.clone_into(&mut recipe.category);
    recipe
}

pub fn user(items: Vec<InventoryItem>) -> User {
    User {
        id: Some(USER_ID.to_owned()),
        username: "ana".to_owned(),
        email: "ana@example.com".to_owned(),
        profile: Some(UserProfile {
            height: Some(165.0),
            weight: Some(60.0),
            imc: Some(22.04),
            food_type: None,
            imc_category: None,
        }),
        user_products: items,
    }
}

/// In-memory backend with call counters and an optional forced failure
#[derive(Default)]
pub struct MockService {
    calls: Mutex<HashMap<&'static str, usize>>,
    failure: Mutex<Option<(u16, String)>>,
    pub session_user: Mutex<Option<User>>,
    pub products: Mutex<Vec<Product>>,
    pub recipes: Mutex<Vec<Recipe>>,
    pub recommended: Mutex<Vec<Recipe>>,
    pub categories: Mutex<Vec<String>>,
    pub searches: Mutex<Vec<RecipeFilters>>,
    /// Delay applied to every recipe search
    pub search_latency: Mutex<Option<Duration>>,
}

impl MockService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Mock pre-loaded with the sample catalog and a logged-in user
    pub fn with_session(items: Vec<InventoryItem>) -> Arc<Self> {
        let mock = Self::default();
        *mock.session_user.lock().unwrap() = Some(user(items));
        *mock.products.lock().unwrap() = catalog();
        Arc::new(mock)
    }

    pub fn shared(self: &Arc<Self>) -> SharedService {
        Arc::clone(self) as SharedService
    }

    /// Every later call fails with this status until `succeed` is called
    pub fn fail_with(&self, status: u16, message: &str) {
        *self.failure.lock().unwrap() = Some((status, message.to_owned()));
    }

    pub fn succeed(&self) {
        *self.failure.lock().unwrap() = None;
    }

    pub fn calls(&self, method: &str) -> usize {
        self.calls.lock().unwrap().get(method).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }

    fn record(&self, method: &'static str) -> AppResult<()> {
        *self.calls.lock().unwrap().entry(method).or_insert(0) += 1;
        match self.failure.lock().unwrap().as_ref() {
            Some((status, message)) => Err(AppError::from_status(*status, message.clone())
                .with_details(serde_json::json!({ "status": status, "message": message }))),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RecipeService for MockService {
    async fn auth_status(&self) -> AppResult<AuthStatus> {
        self.record("auth_status")?;
        self.session_user
            .lock()
            .unwrap()
            .clone()
            .map(|user| AuthStatus { user })
            .ok_or_else(AppError::auth_required)
    }

    async fn login(&self, _credentials: &Credentials) -> AppResult<()> {
        self.record("login")
    }

    async fn logout(&self) -> AppResult<()> {
        self.record("logout")?;
        *self.session_user.lock().unwrap() = None;
        Ok(())
    }

    async fn update_user(&self, user_id: &str, update: &MeasurementsUpdate) -> AppResult<User> {
        self.record("update_user")?;
        let mut updated = user(vec![InventoryItem::new(tomato(), 1.0)]);
        updated.id = Some(user_id.to_owned());
        updated.profile = Some(UserProfile {
            height: Some(update.height),
            weight: Some(update.weight),
            imc: None,
            food_type: None,
            imc_category: None,
        });
        Ok(updated)
    }

    async fn add_user_product(
        &self,
        _user_id: &str,
        _product_id: &str,
        _quantity: f64,
    ) -> AppResult<()> {
        self.record("add_user_product")
    }

    async fn remove_user_product(&self, _user_id: &str, _product_id: &str) -> AppResult<()> {
        self.record("remove_user_product")
    }

    async fn list_products(&self) -> AppResult<Vec<Product>> {
        self.record("list_products")?;
        Ok(self.products.lock().unwrap().clone())
    }

    async fn list_recipes(&self) -> AppResult<Vec<Recipe>> {
        self.record("list_recipes")?;
        Ok(self.recipes.lock().unwrap().clone())
    }

    async fn search_recipes(&self, filters: &RecipeFilters) -> AppResult<Vec<Recipe>> {
        self.record("search_recipes")?;
        self.searches.lock().unwrap().push(filters.clone());
        let latency = *self.search_latency.lock().unwrap();
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }
        let name = filters.name.as_deref().map(str::to_lowercase);
        Ok(self
            .recipes
            .lock()
            .unwrap()
            .iter()
            .filter(|recipe| {
                name.as_deref()
                    .is_none_or(|name| recipe.name.to_lowercase().contains(name))
                    && filters
                        .category
                        .as_deref()
                        .is_none_or(|category| recipe.category == category)
            })
            .cloned()
            .collect())
    }

    async fn get_recipe(&self, recipe_id: &str) -> AppResult<Recipe> {
        self.record("get_recipe")?;
        self.recipes
            .lock()
            .unwrap()
            .iter()
            .find(|recipe| recipe.id == recipe_id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Recipe {recipe_id}")))
    }

    async fn recommended_recipes(&self) -> AppResult<Vec<Recipe>> {
        self.record("recommended_recipes")?;
        Ok(self.recommended.lock().unwrap().clone())
    }

    async fn recipe_categories(&self) -> AppResult<Vec<String>> {
        self.record("recipe_categories")?;
        Ok(self.categories.lock().unwrap().clone())
    }

    async fn create_recipe(&self, draft: &NewRecipe) -> AppResult<Recipe> {
        self.record("create_recipe")?;
        let mut created = recipe("r-new", &draft.name, &[]);
        created.category.clone_from(&draft.category);
        self.recipes.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn delete_recipe(&self, recipe_id: &str) -> AppResult<()> {
        self.record("delete_recipe")?;
        self.recipes
            .lock()
            .unwrap()
            .retain(|recipe| recipe.id != recipe_id);
        Ok(())
    }
}
