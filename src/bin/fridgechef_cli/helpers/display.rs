// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors
// ABOUTME: Output formatting helpers for fridgechef-cli
// ABOUTME: Renders inventory, recipe lists, coverage detail, and BMI readings

use fridgechef::constants::search::ALL_CATEGORIES;
use fridgechef::intelligence::{
    format_amount, BmiReading, CoverageStatus, InventoryNameIndex, RankedRecipe, RecipeCoverage,
};
use fridgechef::models::{InventoryItem, Product, Recipe};
use fridgechef::notifications::Notification;
use fridgechef::stores::{AuthState, InventoryState};

const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Success notifications go to stdout, failures to stderr
pub fn print_notification(notification: &Notification) {
    if notification.is_destructive() {
        eprintln!("{notification}");
    } else {
        println!("{notification}");
    }
}

/// Session summary
pub fn print_status(auth: &AuthState, inventory: &InventoryState) {
    println!("{}", rule());
    match (&auth.user, auth.is_logged_in) {
        (Some(user), true) => {
            println!("Logged in as {} <{}>", user.username, user.email);
            if let Some(profile) = &user.profile {
                if let Some(imc) = profile.imc {
                    let category = profile
                        .imc_category
                        .map_or("unknown", |category| category.label());
                    println!("   BMI: {} ({category})", format_amount(imc));
                }
            }
        }
        _ => println!("Not logged in (use --email and --password)"),
    }
    println!("   Products in fridge: {}", inventory.items.len());
    println!("{}", rule());
}

/// Inventory table
pub fn print_inventory(items: &[InventoryItem]) {
    if items.is_empty() {
        println!("Your fridge is empty");
        return;
    }
    println!("{:<12} {:<28} {:>10} Unit", "Id", "Product", "Quantity");
    for item in items {
        println!(
            "{:<12} {:<28} {:>10} {}",
            item.product_id(),
            item.name(),
            format_amount(item.quantity),
            item.unit()
        );
    }
}

/// Catalog products
pub fn print_products(products: &[Product]) {
    if products.is_empty() {
        println!("No products to suggest");
        return;
    }
    for product in products {
        println!("{:<12} {} ({})", product.id, product.name, product.default_unit);
    }
}

fn recipe_line(recipe: &Recipe) -> String {
    let mut line = format!("{:<12} {}", recipe.id, recipe.name);
    if !recipe.category.is_empty() {
        line.push_str(&format!(" [{}]", recipe.category));
    }
    if let Some(minutes) = recipe.cooking_time {
        line.push_str(&format!(" {minutes} min"));
    }
    if let Some(difficulty) = recipe.difficulty_level() {
        line.push_str(&format!(" {difficulty}"));
    }
    line
}

/// Plain recipe list
pub fn print_recipes(recipes: &[Recipe]) {
    if recipes.is_empty() {
        println!("No recipes found");
        return;
    }
    for recipe in recipes {
        println!("{}", recipe_line(recipe));
    }
}

/// Recipe list with coverage badges
pub fn print_ranked_recipes(ranked: &[RankedRecipe<'_>]) {
    if ranked.is_empty() {
        println!("No recipes match your fridge");
        return;
    }
    for entry in ranked {
        println!(
            "{:>4.0}%  {:<18} {}",
            entry.coverage.coverage_ratio() * 100.0,
            entry.availability().label(),
            recipe_line(entry.recipe)
        );
    }
}

fn status_marker(status: CoverageStatus) -> &'static str {
    match status {
        CoverageStatus::Full => "[ok]",
        CoverageStatus::Insufficient => "[low]",
        CoverageStatus::Missing => "[--]",
    }
}

/// Recipe detail with one line per ingredient
pub fn print_recipe_detail(recipe: &Recipe, coverage: &RecipeCoverage, names: &InventoryNameIndex) {
    println!("{}", rule());
    println!("{}", recipe_line(recipe));
    if let Some(calories) = recipe.calories {
        println!("   Calories: {}", format_amount(calories));
    }
    if let Some(food_type) = &recipe.food_type {
        println!("   Food type: {food_type}");
    }
    println!("{}", rule());

    if coverage.lines.is_empty() {
        // No product links, fall back to matching instruction text by name
        if !recipe.instructions.is_empty() {
            println!("Ingredients:");
            for ingredient in &recipe.instructions {
                let marker = if names.is_available(ingredient) { "[ok]" } else { "[--]" };
                println!("  {marker} {ingredient}");
            }
        }
    } else {
        println!(
            "{} ({:.0}% covered)",
            coverage.availability().label(),
            coverage.coverage_ratio() * 100.0
        );
        for line in &coverage.lines {
            println!(
                "  {:<5} {}",
                status_marker(line.status()),
                line.result.describe(&line.product_name, line.required, &line.unit)
            );
        }
    }

    if !recipe.steps.is_empty() {
        println!("\nSteps:");
        for (index, step) in recipe.steps.iter().enumerate() {
            println!("  {}. {step}", index + 1);
        }
    }
}

/// Category labels with the catch-all first
pub fn print_categories(categories: &[String]) {
    println!("{ALL_CATEGORIES}");
    for category in categories {
        println!("{category}");
    }
}

/// BMI value and category
pub fn print_bmi(reading: &BmiReading) {
    println!(
        "BMI {} - {} ({})",
        format_amount(reading.value),
        reading.category.label(),
        reading.category.range()
    );
}
