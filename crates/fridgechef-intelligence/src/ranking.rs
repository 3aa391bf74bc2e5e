// ABOUTME: Recipe filtering by availability and coverage-ordered ranking
// ABOUTME: Evaluates recipes in parallel with rayon; results are deterministic regardless of thread count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors

use crate::coverage::{evaluate_recipe, InventorySnapshot, RecipeAvailability, RecipeCoverage};
use fridgechef_core::models::Recipe;
use rayon::prelude::*;
use std::cmp::Ordering;
use tracing::debug;

/// A recipe paired with its coverage against one inventory snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct RankedRecipe<'a> {
    /// The evaluated recipe
    pub recipe: &'a Recipe,
    /// Its coverage
    pub coverage: RecipeCoverage,
}

impl RankedRecipe<'_> {
    /// Availability of the recipe
    #[must_use]
    pub fn availability(&self) -> RecipeAvailability {
        self.coverage.availability()
    }

    fn rank_order(&self, other: &Self) -> Ordering {
        other
            .coverage
            .coverage_ratio()
            .total_cmp(&self.coverage.coverage_ratio())
            .then_with(|| self.coverage.missing_count.cmp(&other.coverage.missing_count))
            .then_with(|| self.recipe.name.cmp(&other.recipe.name))
    }
}

fn evaluate_all<'a>(inventory: &InventorySnapshot, recipes: &'a [Recipe]) -> Vec<RankedRecipe<'a>> {
    recipes
        .par_iter()
        .map(|recipe| RankedRecipe {
            recipe,
            coverage: evaluate_recipe(inventory, recipe),
        })
        .collect()
}

/// Keep the recipes whose availability is at least `minimum`.
///
/// `Full` keeps only fully coverable recipes, `Partial` keeps fully and
/// partially coverable ones, `Unavailable` keeps everything. Input order is
/// preserved.
#[must_use]
pub fn filter_by_availability<'a>(
    inventory: &InventorySnapshot,
    recipes: &'a [Recipe],
    minimum: RecipeAvailability,
) -> Vec<RankedRecipe<'a>> {
    let kept: Vec<RankedRecipe<'a>> = evaluate_all(inventory, recipes)
        .into_iter()
        .filter(|ranked| ranked.availability() <= minimum)
        .collect();
    debug!(
        candidates = recipes.len(),
        kept = kept.len(),
        minimum = ?minimum,
        "Filtered recipes by availability"
    );
    kept
}

/// Order recipes by descending coverage ratio, then fewer missing lines, then name
#[must_use]
pub fn rank_by_coverage<'a>(
    inventory: &InventorySnapshot,
    recipes: &'a [Recipe],
) -> Vec<RankedRecipe<'a>> {
    let mut ranked = evaluate_all(inventory, recipes);
    ranked.sort_by(RankedRecipe::rank_order);
    debug!(
        recipes = ranked.len(),
        inventory_products = inventory.len(),
        "Ranked recipes by coverage"
    );
    ranked
}
