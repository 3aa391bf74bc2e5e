// ABOUTME: Catalog product and inventory item models
// ABOUTME: Inventory items pair a catalog product with the quantity the user holds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors

use super::quantity;
use serde::{Deserialize, Serialize};

/// Canonical catalog entry, immutable once fetched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Optional free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Unit the product is measured in (g, ml, units, ...)
    #[serde(default)]
    pub default_unit: String,
    /// Comma-separated tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

impl Product {
    /// Create a product with an id, name, and default unit
    pub fn new(id: impl Into<String>, name: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            default_unit: unit.into(),
            tags: None,
        }
    }
}

/// One entry in the user's inventory, unique per product id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// The catalog product held
    pub product: Product,
    /// Quantity held, expressed in the product's default unit
    #[serde(default, deserialize_with = "quantity::deserialize_or_zero")]
    pub quantity: f64,
}

impl InventoryItem {
    /// Create an inventory item; the quantity is coerced to a non-negative number
    #[must_use]
    pub fn new(product: Product, quantity: f64) -> Self {
        Self {
            product,
            quantity: quantity::coerce_non_negative(quantity),
        }
    }

    /// Identifier of the held product
    #[must_use]
    pub fn product_id(&self) -> &str {
        &self.product.id
    }

    /// Display name of the held product
    #[must_use]
    pub fn name(&self) -> &str {
        &self.product.name
    }

    /// Unit the quantity is expressed in
    #[must_use]
    pub fn unit(&self) -> &str {
        &self.product.default_unit
    }
}
