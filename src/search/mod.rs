// ABOUTME: Recipe search controller combining debounced free-text input with category quick-filters
// ABOUTME: Free text waits for the debounce delay, category selection searches immediately
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors

/// Cancellable scheduled tasks
pub mod debounce;

pub use debounce::{schedule, Debouncer, ScheduledHandle};

use crate::config::ClientConfig;
use crate::constants::search::ALL_CATEGORIES;
use crate::errors::AppResult;
use crate::models::RecipeFilters;
use crate::stores::RecipeStore;
use std::time::Duration;
use tracing::{debug, warn};

/// Drives [`RecipeStore::search`] from user input
pub struct SearchController {
    recipes: RecipeStore,
    debouncer: Debouncer,
}

impl SearchController {
    /// Controller with an explicit debounce delay
    #[must_use]
    pub const fn new(recipes: RecipeStore, delay: Duration) -> Self {
        Self {
            recipes,
            debouncer: Debouncer::new(delay),
        }
    }

    /// Controller using the configured debounce delay
    #[must_use]
    pub const fn from_config(recipes: RecipeStore, config: &ClientConfig) -> Self {
        Self::new(recipes, config.search_debounce)
    }

    /// Record a change of the search box.
    ///
    /// The search runs once no other input arrives within the debounce
    /// delay. A blank term lists every recipe.
    pub fn on_input(&self, term: &str) {
        let filters = name_filters(term);
        let recipes = self.recipes.clone();
        debug!(
            term = %term,
            delay_ms = self.debouncer.delay().as_millis(),
            "Scheduling recipe search"
        );
        self.debouncer.call(move || async move {
            // The store records the failure for display
            if let Err(error) = recipes.search(filters).await {
                warn!(error.code = ?error.code, "Debounced recipe search failed");
            }
        });
    }

    /// Search by category right away; [`ALL_CATEGORIES`] clears the filter.
    ///
    /// A pending free-text search is cancelled so it cannot overwrite the result.
    ///
    /// # Errors
    ///
    /// Returns the store's remote failure
    pub async fn select_category(&self, label: &str) -> AppResult<()> {
        self.debouncer.cancel();
        self.recipes.search(category_filters(label)).await
    }

    /// A free-text search is waiting for its delay
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Drop a free-text search still waiting for its delay; one already running finishes
    pub fn cancel(&self) {
        self.debouncer.cancel();
    }
}

fn name_filters(term: &str) -> RecipeFilters {
    let term = term.trim();
    if term.is_empty() {
        RecipeFilters::default()
    } else {
        RecipeFilters::by_name(term)
    }
}

fn category_filters(label: &str) -> RecipeFilters {
    let label = label.trim();
    if label.is_empty() || label.eq_ignore_ascii_case(ALL_CATEGORIES) {
        RecipeFilters::default()
    } else {
        RecipeFilters::by_category(label)
    }
}
