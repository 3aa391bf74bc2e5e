// ABOUTME: Stock coverage evaluator classifying each ingredient as full, insufficient, or missing
// ABOUTME: Aggregates ingredient results into recipe-level availability for badges and filters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors

//! # Stock Coverage
//!
//! Given an [`InventorySnapshot`] (product id → available quantity) and one
//! ingredient requirement, [`evaluate_requirement`] returns a
//! [`CoverageResult`]:
//!
//! | Inventory entry | Comparison | Status | Available | Missing |
//! |---|---|---|---|---|
//! | absent | - | `Missing` | 0 | required |
//! | present | `q >= r` | `Full` | q | 0 |
//! | present | `q < r` | `Insufficient` | q | r - q |
//!
//! A requirement whose quantity could not be parsed is `Missing` with a
//! missing amount of zero. Comparisons use plain floating-point ordering with
//! no rounding; rounding happens only in [`crate::display`].

use crate::display::{format_amount, round_for_display};
use fridgechef_core::models::{coerce_non_negative, IngredientRequirement, InventoryItem, Recipe};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Coverage status of one ingredient line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CoverageStatus {
    /// Inventory holds at least the required quantity
    Full,
    /// Inventory holds the product but not enough of it
    Insufficient,
    /// Product absent from the inventory, or the requirement was unparsable
    Missing,
}

/// Result of evaluating one ingredient requirement against the inventory
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageResult {
    /// Coverage classification
    pub status: CoverageStatus,
    /// Quantity available in the inventory (0 when missing)
    pub available_amount: f64,
    /// Quantity still needed (0 when full)
    pub missing_amount: f64,
}

impl CoverageResult {
    const fn missing(required: f64) -> Self {
        Self {
            status: CoverageStatus::Missing,
            available_amount: 0.0,
            missing_amount: required,
        }
    }

    /// Available amount rounded for display
    #[must_use]
    pub fn display_available(&self) -> f64 {
        round_for_display(self.available_amount)
    }

    /// Missing amount rounded for display
    #[must_use]
    pub fn display_missing(&self) -> f64 {
        round_for_display(self.missing_amount)
    }

    /// Explanation shown next to an insufficient or missing ingredient.
    ///
    /// `required` is `None` when the recipe's quantity could not be parsed.
    #[must_use]
    pub fn describe(&self, product_name: &str, required: Option<f64>, unit: &str) -> String {
        let Some(required) = required else {
            return format!("{product_name}: quantity not specified");
        };
        match self.status {
            CoverageStatus::Full => format!("You have enough {product_name}"),
            CoverageStatus::Insufficient => format!(
                "{product_name} needs {} {unit} but you only have {} {unit}; missing {} {unit}",
                format_amount(required),
                format_amount(self.available_amount),
                format_amount(self.missing_amount),
            ),
            CoverageStatus::Missing => format!(
                "{product_name} is not in your fridge; missing {} {unit}",
                format_amount(self.missing_amount)
            ),
        }
    }
}

/// Read-only view of the inventory used by the evaluator
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventorySnapshot {
    quantities: HashMap<String, f64>,
}

impl InventorySnapshot {
    /// Build a snapshot from inventory items.
    ///
    /// Quantities are coerced to non-negative numbers. Should the same product
    /// id appear twice, the later entry wins.
    #[must_use]
    pub fn from_items(items: &[InventoryItem]) -> Self {
        items
            .iter()
            .map(|item| (item.product_id().to_owned(), item.quantity))
            .collect()
    }

    /// Available quantity for a product, `None` when the product is absent
    #[must_use]
    pub fn quantity_of(&self, product_id: &str) -> Option<f64> {
        self.quantities.get(product_id).copied()
    }

    /// Number of distinct products
    #[must_use]
    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    /// True when the inventory holds nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for InventorySnapshot {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            quantities: iter
                .into_iter()
                .map(|(id, quantity)| (id.into(), coerce_non_negative(quantity)))
                .collect(),
        }
    }
}

/// Evaluate one requirement against the inventory.
///
/// `required` is `None` when the requirement's quantity was absent or
/// malformed; that maps to `Missing` with nothing counted as missing.
#[must_use]
pub fn evaluate_requirement(
    inventory: &InventorySnapshot,
    product_id: &str,
    required: Option<f64>,
) -> CoverageResult {
    let Some(required) = required.map(coerce_non_negative) else {
        return CoverageResult::missing(0.0);
    };

    match inventory.quantity_of(product_id) {
        None => CoverageResult::missing(required),
        Some(available) if available >= required => CoverageResult {
            status: CoverageStatus::Full,
            available_amount: available,
            missing_amount: 0.0,
        },
        Some(available) => CoverageResult {
            status: CoverageStatus::Insufficient,
            available_amount: available,
            missing_amount: required - available,
        },
    }
}

/// Coverage of one ingredient line, with the labels needed to render it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientCoverage {
    /// Required product id
    pub product_id: String,
    /// Required product name
    pub product_name: String,
    /// Unit of both quantities
    pub unit: String,
    /// Required quantity, `None` when unparsable
    pub required: Option<f64>,
    /// Evaluation result
    pub result: CoverageResult,
}

impl IngredientCoverage {
    fn evaluate(inventory: &InventorySnapshot, requirement: &IngredientRequirement) -> Self {
        Self {
            product_id: requirement.product_id().to_owned(),
            product_name: requirement.product.name.clone(),
            unit: requirement.product.default_unit.clone(),
            required: requirement.required_quantity,
            result: evaluate_requirement(
                inventory,
                requirement.product_id(),
                requirement.required_quantity,
            ),
        }
    }

    /// Status of this line
    #[must_use]
    pub const fn status(&self) -> CoverageStatus {
        self.result.status
    }
}

/// Recipe-level availability classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeAvailability {
    /// Every ingredient line is covered
    Full,
    /// Some lines are at least partly covered but not all fully
    Partial,
    /// Nothing in the inventory is used by the recipe
    Unavailable,
}

impl RecipeAvailability {
    /// Badge label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Full => "Ready to cook",
            Self::Partial => "Partially stocked",
            Self::Unavailable => "Missing ingredients",
        }
    }
}

/// Aggregated coverage of a whole recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCoverage {
    /// Per-line results in recipe order
    pub lines: Vec<IngredientCoverage>,
    /// Lines with status `Full`
    pub full_count: usize,
    /// Lines with status `Insufficient`
    pub insufficient_count: usize,
    /// Lines with status `Missing`
    pub missing_count: usize,
}

impl RecipeCoverage {
    /// Whether every ingredient evaluates to `Full`.
    ///
    /// A recipe without ingredient lines is not considered coverable.
    #[must_use]
    pub fn is_fully_coverable(&self) -> bool {
        !self.lines.is_empty() && self.full_count == self.lines.len()
    }

    /// Whether at least one ingredient is `Full` or `Insufficient`
    #[must_use]
    pub fn is_partially_coverable(&self) -> bool {
        self.full_count + self.insufficient_count > 0
    }

    /// Recipe-level classification
    #[must_use]
    pub fn availability(&self) -> RecipeAvailability {
        if self.is_fully_coverable() {
            RecipeAvailability::Full
        } else if self.is_partially_coverable() {
            RecipeAvailability::Partial
        } else {
            RecipeAvailability::Unavailable
        }
    }

    /// Share of lines fully covered, 0 for recipes without lines
    #[must_use]
    pub fn coverage_ratio(&self) -> f64 {
        if self.lines.is_empty() {
            return 0.0;
        }
        self.full_count as f64 / self.lines.len() as f64
    }

    /// Lines that still need shopping
    pub fn shortfalls(&self) -> impl Iterator<Item = &IngredientCoverage> {
        self.lines
            .iter()
            .filter(|line| line.status() != CoverageStatus::Full)
    }
}

/// Evaluate every ingredient line of a recipe
#[must_use]
pub fn evaluate_recipe(inventory: &InventorySnapshot, recipe: &Recipe) -> RecipeCoverage {
    let lines: Vec<IngredientCoverage> = recipe
        .ingredients
        .iter()
        .map(|requirement| IngredientCoverage::evaluate(inventory, requirement))
        .collect();

    let mut coverage = RecipeCoverage {
        lines,
        full_count: 0,
        insufficient_count: 0,
        missing_count: 0,
    };
    for line in &coverage.lines {
        match line.status() {
            CoverageStatus::Full => coverage.full_count += 1,
            CoverageStatus::Insufficient => coverage.insufficient_count += 1,
            CoverageStatus::Missing => coverage.missing_count += 1,
        }
    }
    coverage
}
