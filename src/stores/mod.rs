// ABOUTME: Explicit application state containers with snapshot reads and async actions
// ABOUTME: Each store owns Arc<RwLock<State>> and talks to the backend through an injected RecipeService
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors

//! # Stores
//!
//! Every store is a cheap-to-clone handle over shared state. Reads go through
//! `snapshot()`, which returns an owned copy; writes only happen inside the
//! store's async actions. Remote actions follow one lifecycle:
//!
//! 1. set `is_loading` and clear `error`
//! 2. await the remote call (no lock is held across the await)
//! 3. on success write the result, on failure record a store-level message
//! 4. clear `is_loading`
//!
//! Failures are never retried. They are recorded in the state and also
//! returned so the caller can raise a notification.

/// Session state
pub mod auth;
/// Global product catalog
pub mod catalog;
/// The user's product inventory
pub mod inventory;
/// Recipes, recommendations, and categories
pub mod recipes;

pub use auth::{AuthState, AuthStore};
pub use catalog::{CatalogState, CatalogStore};
pub use inventory::{InventoryState, InventoryStore};
pub use recipes::{RecipeState, RecipeStore};

use crate::errors::{AppError, ValidationError};
use serde::Serialize;
use tracing::warn;

/// Loading flag and last error shared by every store state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActionStatus {
    /// A remote action is in flight
    pub is_loading: bool,
    /// Message of the last failed action, cleared when the next one starts
    pub error: Option<String>,
}

impl ActionStatus {
    fn begin(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    fn succeed(&mut self) {
        self.is_loading = false;
    }

    fn fail(&mut self, message: impl Into<String>) {
        self.is_loading = false;
        self.error = Some(message.into());
    }
}

/// Log a failed remote action before its message is stored
fn log_failure(store: &str, action: &str, error: &AppError) {
    warn!(
        store = %store,
        action = %action,
        error.code = ?error.code,
        error.message = %error.message,
        request.id = error.context.request_id.as_deref().unwrap_or(""),
        "Store action failed"
    );
}

/// Reject an empty user id before any remote call
fn require_user_id(user_id: &str) -> Result<&str, ValidationError> {
    let trimmed = user_id.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingUserId)
    } else {
        Ok(trimmed)
    }
}
