// ABOUTME: Inventory store holding the user's products, synchronized with the remote inventory
// ABOUTME: Validates adds before any remote call and keeps product ids unique
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors

use super::{log_failure, require_user_id, ActionStatus};
use crate::client::SharedService;
use crate::errors::{AppResult, ValidationError};
use crate::intelligence::{InventoryNameIndex, InventorySnapshot};
use crate::logging::AppLogger;
use crate::models::{InventoryItem, Product};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

const STORE: &str = "inventory";

/// Inventory contents and action status
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InventoryState {
    /// Items in insertion order, unique per product id
    pub items: Vec<InventoryItem>,
    /// Loading flag and last error
    #[serde(flatten)]
    pub status: ActionStatus,
}

impl InventoryState {
    /// Whether a product id is already held
    #[must_use]
    pub fn contains(&self, product_id: &str) -> bool {
        self.items.iter().any(|item| item.product_id() == product_id)
    }

    /// Evaluator input built from the current items
    #[must_use]
    pub fn coverage_snapshot(&self) -> InventorySnapshot {
        InventorySnapshot::from_items(&self.items)
    }

    /// Name index for ingredients without product links
    #[must_use]
    pub fn name_index(&self) -> InventoryNameIndex {
        InventoryNameIndex::from_items(&self.items)
    }
}

/// Handle to the user's inventory
#[derive(Clone)]
pub struct InventoryStore {
    service: SharedService,
    state: Arc<RwLock<InventoryState>>,
}

impl InventoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new(service: SharedService) -> Self {
        Self {
            service,
            state: Arc::new(RwLock::new(InventoryState::default())),
        }
    }

    /// Owned copy of the current state
    pub async fn snapshot(&self) -> InventoryState {
        self.state.read().await.clone()
    }

    /// Evaluator input for the current inventory
    pub async fn coverage_snapshot(&self) -> InventorySnapshot {
        self.state.read().await.coverage_snapshot()
    }

    /// Replace the contents, typically with the items embedded in the session status.
    ///
    /// Later duplicates of a product id are dropped.
    pub async fn set_items(&self, items: Vec<InventoryItem>) {
        let mut unique: Vec<InventoryItem> = Vec::with_capacity(items.len());
        for item in items {
            if !unique.iter().any(|held| held.product_id() == item.product_id()) {
                unique.push(item);
            }
        }
        self.state.write().await.items = unique;
    }

    /// Check an add request against the current state without touching it
    async fn validate_add(&self, product: &Product, quantity: f64) -> Result<(), ValidationError> {
        validate_line(product, quantity)?;
        if self.state.read().await.contains(&product.id) {
            return Err(ValidationError::DuplicateProduct {
                product_id: product.id.clone(),
            });
        }
        Ok(())
    }

    /// Add `quantity` of `product` for `user_id`.
    ///
    /// # Errors
    ///
    /// Validation failures (missing user, empty product, non-positive
    /// quantity, duplicate) are returned without a remote call and without
    /// changing state. Remote failures are recorded in `error` and returned.
    pub async fn add_product(
        &self,
        user_id: &str,
        product: Product,
        quantity: f64,
    ) -> AppResult<()> {
        let user_id = require_user_id(user_id)?;
        self.validate_add(&product, quantity).await?;

        self.state.write().await.status.begin();
        let result = self
            .service
            .add_user_product(user_id, &product.id, quantity)
            .await;

        let mut state = self.state.write().await;
        match result {
            Ok(()) => {
                // A concurrent add may have landed first; keep ids unique
                state.items.retain(|item| item.product_id() != product.id);
                AppLogger::log_inventory_change(user_id, &product.id, "add", Some(quantity));
                state.items.push(InventoryItem::new(product, quantity));
                state.status.succeed();
                Ok(())
            }
            Err(error) => {
                log_failure(STORE, "add_product", &error);
                state.status.fail("Failed to add product.");
                Err(error.with_user_id(user_id).with_resource_id(product.id))
            }
        }
    }

    /// Remove a product; removing an absent product is a no-op without a remote call.
    ///
    /// # Errors
    ///
    /// Returns `MissingUserId` for an empty user id, and remote failures
    /// (recorded in `error`).
    pub async fn remove_product(&self, user_id: &str, product_id: &str) -> AppResult<()> {
        let user_id = require_user_id(user_id)?;
        if !self.state.read().await.contains(product_id) {
            return Ok(());
        }

        self.state.write().await.status.begin();
        let result = self.service.remove_user_product(user_id, product_id).await;

        let mut state = self.state.write().await;
        match result {
            Ok(()) => {
                state.items.retain(|item| item.product_id() != product_id);
                state.status.succeed();
                AppLogger::log_inventory_change(user_id, product_id, "remove", None);
                Ok(())
            }
            Err(error) => {
                log_failure(STORE, "remove_product", &error);
                state.status.fail("Failed to delete product.");
                Err(error.with_user_id(user_id).with_resource_id(product_id))
            }
        }
    }

    /// Change the held quantity of a product by deleting it and adding it again.
    ///
    /// # Errors
    ///
    /// Same as [`Self::add_product`], minus the duplicate check. If the delete
    /// succeeds and the add fails, the product is left out of the inventory.
    pub async fn replace_product(
        &self,
        user_id: &str,
        product: Product,
        quantity: f64,
    ) -> AppResult<()> {
        require_user_id(user_id)?;
        validate_line(&product, quantity)?;

        self.remove_product(user_id, &product.id).await?;
        self.add_product(user_id, product, quantity).await
    }
}

/// Product id present and quantity strictly positive
fn validate_line(product: &Product, quantity: f64) -> Result<(), ValidationError> {
    if product.id.trim().is_empty() {
        return Err(ValidationError::EmptyProduct);
    }
    if !quantity.is_finite() || quantity <= 0.0 {
        return Err(ValidationError::NonPositiveQuantity { quantity });
    }
    Ok(())
}
