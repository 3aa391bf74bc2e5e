// ABOUTME: Command modules for fridgechef-cli and the session they share
// ABOUTME: The session owns one HTTP client and the stores built on top of it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors

pub mod fridge;
pub mod profile;
pub mod recipes;

use fridgechef::client::{HttpApiClient, SharedService};
use fridgechef::config::ClientConfig;
use fridgechef::errors::{AppError, AppResult};
use fridgechef::stores::{AuthStore, CatalogStore, InventoryStore, RecipeStore};
use std::sync::Arc;
use tracing::{debug, info};

use crate::helpers::display::print_status;

/// Stores wired to one backend client
pub struct Session {
    pub auth: AuthStore,
    pub inventory: InventoryStore,
    pub catalog: CatalogStore,
    pub recipes: RecipeStore,
}

impl Session {
    /// Build the HTTP client and the stores around it
    pub fn connect(config: &ClientConfig) -> AppResult<Self> {
        let service: SharedService = Arc::new(HttpApiClient::new(config)?);
        Ok(Self {
            auth: AuthStore::new(Arc::clone(&service)),
            inventory: InventoryStore::new(Arc::clone(&service)),
            catalog: CatalogStore::new(Arc::clone(&service)),
            recipes: RecipeStore::new(service),
        })
    }

    /// Log in when credentials are given, then seed the inventory from the session status
    pub async fn start(&self, credentials: Option<(String, String)>) -> AppResult<()> {
        if let Some((email, password)) = credentials {
            self.auth.login(&email, &password).await?;
            info!("Logged in as {}", email.trim());
        }

        let items = self.auth.check_status().await;
        debug!(items = items.len(), "Seeding inventory from session status");
        self.inventory.set_items(items).await;
        Ok(())
    }

    /// Current user id, or `AuthRequired` when nobody is logged in
    pub async fn user_id(&self) -> AppResult<String> {
        self.auth
            .current_user_id()
            .await
            .ok_or_else(AppError::auth_required)
    }
}

/// Print who is logged in and what the fridge holds
pub async fn status(session: &Session) {
    let auth = session.auth.snapshot().await;
    let inventory = session.inventory.snapshot().await;
    print_status(&auth, &inventory);
}
