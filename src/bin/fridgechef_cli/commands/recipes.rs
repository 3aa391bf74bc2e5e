// ABOUTME: Recipe commands for fridgechef-cli
// ABOUTME: Lists, searches, and shows recipes with coverage computed against the fridge
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors

use anyhow::Result;
use fridgechef::constants::search::ALL_CATEGORIES;
use fridgechef::intelligence::{
    evaluate_recipe, filter_by_availability, rank_by_coverage, RankedRecipe, RecipeAvailability,
};
use fridgechef::models::RecipeFilters;
use fridgechef::stores::recipes::RECIPE_NOT_FOUND;

use super::Session;
use crate::helpers::display::{
    print_categories, print_ranked_recipes, print_recipe_detail, print_recipes,
};

/// Every recipe, optionally ranked and filtered by fridge coverage
pub async fn list(session: &Session, by_coverage: bool, ready: bool, partial: bool) -> Result<()> {
    session.recipes.fetch_recipes().await?;
    let recipes = session.recipes.snapshot().await.recipes;

    let minimum = if ready {
        Some(RecipeAvailability::Full)
    } else if partial {
        Some(RecipeAvailability::Partial)
    } else {
        None
    };
    if !by_coverage && minimum.is_none() {
        print_recipes(&recipes);
        return Ok(());
    }

    let inventory = session.inventory.coverage_snapshot().await;
    let ranked: Vec<RankedRecipe<'_>> = match (by_coverage, minimum) {
        (true, Some(minimum)) => rank_by_coverage(&inventory, &recipes)
            .into_iter()
            .filter(|ranked| ranked.availability() <= minimum)
            .collect(),
        (true, None) => rank_by_coverage(&inventory, &recipes),
        (false, minimum) => filter_by_availability(
            &inventory,
            &recipes,
            minimum.unwrap_or(RecipeAvailability::Unavailable),
        ),
    };
    print_ranked_recipes(&ranked);
    Ok(())
}

/// Backend search; the "All" category means no category filter
pub async fn search(session: &Session, mut filters: RecipeFilters) -> Result<()> {
    if filters
        .category
        .as_deref()
        .is_some_and(|category| category.trim().eq_ignore_ascii_case(ALL_CATEGORIES))
    {
        filters.category = None;
    }
    session.recipes.search(filters).await?;
    print_recipes(&session.recipes.snapshot().await.recipes);
    Ok(())
}

/// Recipe detail with per-ingredient coverage
pub async fn show(session: &Session, recipe_id: &str) -> Result<()> {
    let Some(recipe) = session.recipes.fetch_recipe(recipe_id).await? else {
        println!("{RECIPE_NOT_FOUND}");
        return Ok(());
    };

    let inventory = session.inventory.snapshot().await;
    let coverage = evaluate_recipe(&inventory.coverage_snapshot(), &recipe);
    print_recipe_detail(&recipe, &coverage, &inventory.name_index());
    Ok(())
}

/// Recommended recipes
pub async fn recommend(session: &Session) -> Result<()> {
    session.recipes.fetch_recommended().await?;
    print_recipes(&session.recipes.snapshot().await.recommended);
    Ok(())
}

/// Category labels, "All" first
pub async fn categories(session: &Session) -> Result<()> {
    session.recipes.fetch_categories().await?;
    print_categories(&session.recipes.snapshot().await.categories);
    Ok(())
}
