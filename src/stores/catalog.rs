// ABOUTME: Catalog store with the global product list used for adding inventory
// ABOUTME: Offers accent-insensitive product search and quick-add suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors

use super::{log_failure, ActionStatus};
use crate::client::SharedService;
use crate::errors::AppResult;
use crate::intelligence::{matches_query, normalize_text};
use crate::models::{InventoryItem, Product};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

const STORE: &str = "catalog";

/// Catalog contents and action status
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CatalogState {
    /// Known products in backend order
    pub products: Vec<Product>,
    /// Loading flag and last error
    #[serde(flatten)]
    pub status: ActionStatus,
}

impl CatalogState {
    /// Products whose name matches `query`, ignoring case and accents
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<Product> {
        self.products
            .iter()
            .filter(|product| matches_query(&product.name, query))
            .cloned()
            .collect()
    }

    /// Product with the given id
    #[must_use]
    pub fn find(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == product_id)
    }

    /// Product whose id or normalized name equals `reference`
    #[must_use]
    pub fn resolve(&self, reference: &str) -> Option<&Product> {
        self.find(reference).or_else(|| {
            let wanted = normalize_text(reference.trim());
            self.products
                .iter()
                .find(|product| normalize_text(product.name.as_str()) == wanted)
        })
    }

    /// Up to `limit` products not already in `inventory`, matched by id or name
    #[must_use]
    pub fn quick_add_candidates(&self, inventory: &[InventoryItem], limit: usize) -> Vec<Product> {
        let held_names: Vec<String> = inventory
            .iter()
            .map(|item| normalize_text(item.name()))
            .collect();
        self.products
            .iter()
            .filter(|product| {
                !inventory.iter().any(|item| item.product_id() == product.id)
                    && !held_names.contains(&normalize_text(product.name.as_str()))
            })
            .take(limit)
            .cloned()
            .collect()
    }
}

/// Handle to the product catalog
#[derive(Clone)]
pub struct CatalogStore {
    service: SharedService,
    state: Arc<RwLock<CatalogState>>,
}

impl CatalogStore {
    /// Create an empty store
    #[must_use]
    pub fn new(service: SharedService) -> Self {
        Self {
            service,
            state: Arc::new(RwLock::new(CatalogState::default())),
        }
    }

    /// Owned copy of the current state
    pub async fn snapshot(&self) -> CatalogState {
        self.state.read().await.clone()
    }

    /// Load the catalog
    ///
    /// # Errors
    ///
    /// Returns remote failures after recording them
    pub async fn fetch_products(&self) -> AppResult<()> {
        self.state.write().await.status.begin();
        let result = self.service.list_products().await;

        let mut state = self.state.write().await;
        match result {
            Ok(products) => {
                state.products = products;
                state.status.succeed();
                Ok(())
            }
            Err(error) => {
                log_failure(STORE, "fetch_products", &error);
                state.status.fail("Failed to fetch products.");
                Err(error)
            }
        }
    }

    /// Products whose name matches `query`
    pub async fn search(&self, query: &str) -> Vec<Product> {
        self.state.read().await.search(query)
    }

    /// Up to `limit` catalog products not already in `inventory`
    pub async fn quick_add_candidates(
        &self,
        inventory: &[InventoryItem],
        limit: usize,
    ) -> Vec<Product> {
        self.state.read().await.quick_add_candidates(inventory, limit)
    }
}
