// ABOUTME: Recipe store with the list, the selected detail, recommendations, and categories
// ABOUTME: Remote searches replace the list; create and delete keep it in step with the backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors

use super::{log_failure, ActionStatus};
use crate::client::SharedService;
use crate::errors::AppResult;
use crate::models::{NewRecipe, Recipe, RecipeFilters};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

const STORE: &str = "recipes";

/// Shown instead of a recipe detail when the id is unknown
pub const RECIPE_NOT_FOUND: &str = "Recipe not found";

/// Recipe lists and action status
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecipeState {
    /// Result of the last list or search
    pub recipes: Vec<Recipe>,
    /// Selected recipe detail
    pub recipe: Option<Recipe>,
    /// Recommended subset
    pub recommended: Vec<Recipe>,
    /// Category labels
    pub categories: Vec<String>,
    /// Filters of the last search, empty after a plain list
    pub filters: RecipeFilters,
    /// Loading flag and last error
    #[serde(flatten)]
    pub status: ActionStatus,
}

impl RecipeState {
    /// Recipe with the given id from any loaded list
    #[must_use]
    pub fn find(&self, recipe_id: &str) -> Option<&Recipe> {
        self.recipe
            .iter()
            .chain(&self.recipes)
            .chain(&self.recommended)
            .find(|recipe| recipe.id == recipe_id)
    }
}

/// Handle to the recipe state
#[derive(Clone)]
pub struct RecipeStore {
    service: SharedService,
    state: Arc<RwLock<RecipeState>>,
}

impl RecipeStore {
    /// Create an empty store
    #[must_use]
    pub fn new(service: SharedService) -> Self {
        Self {
            service,
            state: Arc::new(RwLock::new(RecipeState::default())),
        }
    }

    /// Owned copy of the current state
    pub async fn snapshot(&self) -> RecipeState {
        self.state.read().await.clone()
    }

    /// Load every recipe
    ///
    /// # Errors
    ///
    /// Returns remote failures after recording them
    pub async fn fetch_recipes(&self) -> AppResult<()> {
        self.state.write().await.status.begin();
        let result = self.service.list_recipes().await;

        let mut state = self.state.write().await;
        match result {
            Ok(recipes) => {
                state.recipes = recipes;
                state.filters = RecipeFilters::default();
                state.status.succeed();
                Ok(())
            }
            Err(error) => {
                log_failure(STORE, "fetch_recipes", &error);
                state.status.fail("Failed to fetch recipes.");
                Err(error)
            }
        }
    }

    /// Load one recipe into `recipe`.
    ///
    /// An unknown id is not an error: `recipe` becomes `None`, the
    /// not-found message is recorded, and `Ok(None)` is returned.
    ///
    /// # Errors
    ///
    /// Returns remote failures other than not-found after recording them
    pub async fn fetch_recipe(&self, recipe_id: &str) -> AppResult<Option<Recipe>> {
        {
            let mut state = self.state.write().await;
            state.recipe = None;
            state.status.begin();
        }
        let result = self.service.get_recipe(recipe_id).await;

        let mut state = self.state.write().await;
        match result {
            Ok(recipe) => {
                state.recipe = Some(recipe.clone());
                state.status.succeed();
                Ok(Some(recipe))
            }
            Err(error) if error.is_not_found() => {
                debug!(recipe.id = %recipe_id, "Recipe not found");
                state.status.fail(RECIPE_NOT_FOUND);
                Ok(None)
            }
            Err(error) => {
                log_failure(STORE, "fetch_recipe", &error);
                state.status.fail("Failed to fetch recipe.");
                Err(error.with_resource_id(recipe_id))
            }
        }
    }

    /// Load the recommended subset
    ///
    /// # Errors
    ///
    /// Returns remote failures after recording them
    pub async fn fetch_recommended(&self) -> AppResult<()> {
        self.state.write().await.status.begin();
        let result = self.service.recommended_recipes().await;

        let mut state = self.state.write().await;
        match result {
            Ok(recipes) => {
                state.recommended = recipes;
                state.status.succeed();
                Ok(())
            }
            Err(error) => {
                log_failure(STORE, "fetch_recommended", &error);
                state.status.fail("Failed to fetch recommended recipes.");
                Err(error)
            }
        }
    }

    /// Replace the list with the backend's matches for `filters`
    ///
    /// # Errors
    ///
    /// Returns remote failures after recording them
    pub async fn search(&self, filters: RecipeFilters) -> AppResult<()> {
        self.state.write().await.status.begin();
        let result = self.service.search_recipes(&filters).await;

        let mut state = self.state.write().await;
        match result {
            Ok(recipes) => {
                debug!(matches = recipes.len(), filters = ?filters, "Recipe search finished");
                state.recipes = recipes;
                state.filters = filters;
                state.status.succeed();
                Ok(())
            }
            Err(error) => {
                log_failure(STORE, "search", &error);
                state.status.fail("Failed to search recipes.");
                Err(error)
            }
        }
    }

    /// Load the category labels
    ///
    /// # Errors
    ///
    /// Returns remote failures after recording them
    pub async fn fetch_categories(&self) -> AppResult<()> {
        self.state.write().await.status.begin();
        let result = self.service.recipe_categories().await;

        let mut state = self.state.write().await;
        match result {
            Ok(categories) => {
                state.categories = categories;
                state.status.succeed();
                Ok(())
            }
            Err(error) => {
                log_failure(STORE, "fetch_categories", &error);
                state.status.fail("Failed to fetch categories.");
                Err(error)
            }
        }
    }

    /// Create a recipe and append it to the list
    ///
    /// # Errors
    ///
    /// Returns remote failures after recording them
    pub async fn add_recipe(&self, draft: &NewRecipe) -> AppResult<Recipe> {
        self.state.write().await.status.begin();
        let result = self.service.create_recipe(draft).await;

        let mut state = self.state.write().await;
        match result {
            Ok(recipe) => {
                state.recipes.push(recipe.clone());
                state.status.succeed();
                Ok(recipe)
            }
            Err(error) => {
                log_failure(STORE, "add_recipe", &error);
                state.status.fail("Failed to add recipe.");
                Err(error)
            }
        }
    }

    /// Delete a recipe and drop it from every loaded list
    ///
    /// # Errors
    ///
    /// Returns remote failures after recording them
    pub async fn delete_recipe(&self, recipe_id: &str) -> AppResult<()> {
        self.state.write().await.status.begin();
        let result = self.service.delete_recipe(recipe_id).await;

        let mut state = self.state.write().await;
        match result {
            Ok(()) => {
                state.recipes.retain(|recipe| recipe.id != recipe_id);
                state.recommended.retain(|recipe| recipe.id != recipe_id);
                if state.recipe.as_ref().is_some_and(|recipe| recipe.id == recipe_id) {
                    state.recipe = None;
                }
                state.status.succeed();
                Ok(())
            }
            Err(error) => {
                log_failure(STORE, "delete_recipe", &error);
                state.status.fail("Failed to delete recipe.");
                Err(error.with_resource_id(recipe_id))
            }
        }
    }
}
