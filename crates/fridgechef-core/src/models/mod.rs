// ABOUTME: Domain models exchanged with the recipe backend
// ABOUTME: Products, inventory items, recipes, users, and lenient numeric decoding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors

//! Data models for the Fridgechef client.
//!
//! All models use the backend's camelCase JSON field names. Numeric fields the
//! backend is loose about (quantities arrive as numbers, numeric strings, or
//! null) go through the helpers in [`quantity`].

/// Catalog products and inventory items
pub mod product;
/// Lenient quantity decoding and coercion
pub mod quantity;
/// Recipes, ingredient requirements, and search filters
pub mod recipe;
/// Users, physical profile, and BMI categories
pub mod user;

pub use product::{InventoryItem, Product};
pub use quantity::{coerce_non_negative, parse_quantity};
pub use recipe::{IngredientRequirement, NewRecipe, Recipe, RecipeDifficulty, RecipeFilters};
pub use user::{AuthStatus, BmiCategory, Credentials, MeasurementsUpdate, User, UserProfile};

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as the type's default value
///
/// # Errors
///
/// Returns an error if the non-null value does not match `T`
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
