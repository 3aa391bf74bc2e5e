// ABOUTME: Recipe models with ingredient requirements linked to catalog products
// ABOUTME: Includes difficulty levels, search filters, and the draft used to create recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors

use super::{null_as_default, quantity, Product};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One line of a recipe's bill of materials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientRequirement {
    /// Owning recipe, when the backend includes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<String>,
    /// Required quantity in the product's default unit.
    ///
    /// `None` when the backend sent no usable number; the coverage evaluator
    /// treats that as a parse error rather than a zero requirement.
    #[serde(
        rename = "quantity",
        default,
        deserialize_with = "quantity::deserialize_optional"
    )]
    pub required_quantity: Option<f64>,
    /// Linked catalog product
    pub product: Product,
}

impl IngredientRequirement {
    /// Create a requirement for `quantity` of `product`
    #[must_use]
    pub fn new(product: Product, quantity: f64) -> Self {
        Self {
            recipe_id: None,
            required_quantity: Some(quantity::coerce_non_negative(quantity)),
            product,
        }
    }

    /// Identifier of the required product
    #[must_use]
    pub fn product_id(&self) -> &str {
        &self.product.id
    }
}

/// Recipe difficulty levels as numbered by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecipeDifficulty {
    /// Level 1
    Easy,
    /// Level 2
    Intermediate,
    /// Level 3
    Hard,
}

impl RecipeDifficulty {
    /// Map the backend's numeric level, unknown levels yield `None`
    #[must_use]
    pub const fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Easy),
            2 => Some(Self::Intermediate),
            3 => Some(Self::Hard),
            _ => None,
        }
    }

    /// Numeric level sent in search filters
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Intermediate => 2,
            Self::Hard => 3,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Intermediate => "Intermediate",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for RecipeDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Recipe record, read-only from the client's side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Recipe identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Free-text instructions
    #[serde(default, deserialize_with = "null_as_default")]
    pub instructions: Vec<String>,
    /// Ordered preparation steps
    #[serde(default, deserialize_with = "null_as_default")]
    pub steps: Vec<String>,
    /// Cooking time in minutes
    #[serde(default)]
    pub cooking_time: Option<u32>,
    /// Numeric difficulty level (see [`RecipeDifficulty`])
    #[serde(default)]
    pub difficulty: Option<u8>,
    /// Category label
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    /// Food type (vegetarian, vegan, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_type: Option<String>,
    /// Image location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Calories per serving
    #[serde(default)]
    pub calories: Option<f64>,
    /// Backend flag for recommended recipes
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_recommend: bool,
    /// Ingredient lines linked to catalog products
    #[serde(
        rename = "recipeProducts",
        default,
        deserialize_with = "null_as_default"
    )]
    pub ingredients: Vec<IngredientRequirement>,
}

impl Recipe {
    /// Typed difficulty, `None` for missing or unknown levels
    #[must_use]
    pub fn difficulty_level(&self) -> Option<RecipeDifficulty> {
        self.difficulty.and_then(RecipeDifficulty::from_level)
    }
}

/// Fields for creating a recipe (a recipe without its id)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecipe {
    /// Display name
    pub name: String,
    /// Free-text instructions
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Ordered preparation steps
    #[serde(default)]
    pub steps: Vec<String>,
    /// Cooking time in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooking_time: Option<u32>,
    /// Numeric difficulty level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<u8>,
    /// Category label
    #[serde(default)]
    pub category: String,
    /// Food type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_type: Option<String>,
    /// Image location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Calories per serving
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
}

/// Remote recipe search filters
///
/// Empty or absent fields are left out of the query string, as is a zero
/// difficulty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeFilters {
    /// Name substring
    pub name: Option<String>,
    /// Food type
    pub food_type: Option<String>,
    /// Category label
    pub category: Option<String>,
    /// Numeric difficulty level
    pub difficulty: Option<u8>,
}

impl RecipeFilters {
    /// Filter by name only
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Filter by category only
    pub fn by_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }

    /// Query string pairs in the backend's parameter names
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let text_fields = [
            ("name", &self.name),
            ("food_type", &self.food_type),
            ("category", &self.category),
        ];
        for (key, value) in text_fields {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                pairs.push((key, value.to_owned()));
            }
        }
        if let Some(level) = self.difficulty.filter(|level| *level != 0) {
            pairs.push(("difficulty", level.to_string()));
        }
        pairs
    }

    /// True when no filter would be sent
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_query_pairs().is_empty()
    }
}
