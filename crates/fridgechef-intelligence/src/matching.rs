// ABOUTME: Name-based ingredient availability used when product links are missing
// ABOUTME: Case-insensitive substring match in either direction, failing open on an empty fridge
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors

use fridgechef_core::models::InventoryItem;

/// Lowercased inventory names, prepared once per snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryNameIndex {
    names: Vec<String>,
}

impl InventoryNameIndex {
    /// Index the names of the given items, skipping empty names
    #[must_use]
    pub fn from_items(items: &[InventoryItem]) -> Self {
        Self::from_names(items.iter().map(InventoryItem::name))
    }

    /// Index arbitrary names, skipping empty ones
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            names: names
                .into_iter()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_lowercase)
                .collect(),
        }
    }

    /// True when no usable names were indexed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether `ingredient` is available.
    ///
    /// With an empty index every ingredient passes.
    #[must_use]
    pub fn is_available(&self, ingredient: &str) -> bool {
        if self.names.is_empty() {
            return true;
        }
        let needle = ingredient.trim().to_lowercase();
        if needle.is_empty() {
            return false;
        }
        self.names
            .iter()
            .any(|name| name.contains(&needle) || needle.contains(name.as_str()))
    }

    /// The subset of `ingredients` that pass [`Self::is_available`], in input order
    pub fn available<'a>(&self, ingredients: &'a [String]) -> Vec<&'a str> {
        ingredients
            .iter()
            .map(String::as_str)
            .filter(|ingredient| self.is_available(ingredient))
            .collect()
    }
}
