// ABOUTME: Session store tracking login state and the current user
// ABOUTME: Session checks hand the embedded inventory back to the caller instead of touching other stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors

use super::{log_failure, require_user_id, ActionStatus};
use crate::client::SharedService;
use crate::errors::{AppError, AppResult};
use crate::intelligence::validate_measurements;
use crate::logging::AppLogger;
use crate::models::{Credentials, InventoryItem, User};
use serde::Serialize;
use std::mem;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

const STORE: &str = "auth";
const LOGIN_FAILED: &str = "Login failed";

/// Session state
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AuthState {
    /// The backend accepted the session
    pub is_logged_in: bool,
    /// Current user; its embedded inventory is moved out by `check_status`
    pub user: Option<User>,
    /// Loading flag and last error
    #[serde(flatten)]
    pub status: ActionStatus,
}

impl AuthState {
    /// Identifier of the current user, if known
    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref()?.id.as_deref()
    }
}

/// Handle to the session state
#[derive(Clone)]
pub struct AuthStore {
    service: SharedService,
    state: Arc<RwLock<AuthState>>,
}

impl AuthStore {
    /// Create a logged-out store
    #[must_use]
    pub fn new(service: SharedService) -> Self {
        Self {
            service,
            state: Arc::new(RwLock::new(AuthState::default())),
        }
    }

    /// Owned copy of the current state
    pub async fn snapshot(&self) -> AuthState {
        self.state.read().await.clone()
    }

    /// Identifier of the current user, if known
    pub async fn current_user_id(&self) -> Option<String> {
        self.state.read().await.user_id().map(str::to_owned)
    }

    /// Ask the backend whether the session is valid.
    ///
    /// Returns the inventory embedded in the status response so the caller can
    /// seed the inventory store. Any failure means "logged out": the user is
    /// cleared, no error is recorded, and an empty inventory is returned.
    pub async fn check_status(&self) -> Vec<InventoryItem> {
        self.state.write().await.status.begin();
        let result = self.service.auth_status().await;

        let mut state = self.state.write().await;
        state.status.succeed();
        match result {
            Ok(status) => {
                let mut user = status.user;
                let items = mem::take(&mut user.user_products);
                AppLogger::log_auth_event(user.id.as_deref(), "status", true, None);
                state.is_logged_in = true;
                state.user = Some(user);
                items
            }
            Err(error) => {
                debug!(
                    error.code = ?error.code,
                    "Session status check failed, treating as logged out"
                );
                state.is_logged_in = false;
                state.user = None;
                Vec::new()
            }
        }
    }

    /// Log in with email and password.
    ///
    /// # Errors
    ///
    /// Returns the remote error. The recorded message is the server's
    /// `message` when it sent one, otherwise "Login failed".
    pub async fn login(&self, email: &str, password: &str) -> AppResult<()> {
        let credentials = Credentials {
            email: email.trim().to_owned(),
            password: password.to_owned(),
        };

        self.state.write().await.status.begin();
        let result = self.service.login(&credentials).await;

        let mut state = self.state.write().await;
        match result {
            Ok(()) => {
                state.is_logged_in = true;
                state.status.succeed();
                AppLogger::log_auth_event(None, "login", true, Some(&credentials.email));
                Ok(())
            }
            Err(error) => {
                log_failure(STORE, "login", &error);
                state.is_logged_in = false;
                state.user = None;
                state.status.fail(server_message(&error).unwrap_or(LOGIN_FAILED));
                AppLogger::log_auth_event(None, "login", false, Some(&credentials.email));
                Err(error)
            }
        }
    }

    /// End the session
    ///
    /// # Errors
    ///
    /// Returns the remote error; the local user is cleared either way.
    pub async fn logout(&self) -> AppResult<()> {
        {
            let mut state = self.state.write().await;
            state.user = None;
            state.status.begin();
        }
        let result = self.service.logout().await;

        let mut state = self.state.write().await;
        match result {
            Ok(()) => {
                state.is_logged_in = false;
                state.status.succeed();
                AppLogger::log_auth_event(None, "logout", true, None);
                Ok(())
            }
            Err(error) => {
                log_failure(STORE, "logout", &error);
                state.status.fail("Failed to log out.");
                Err(error)
            }
        }
    }

    /// Record new weight (kg) and height (cm) and store the returned user.
    ///
    /// # Errors
    ///
    /// Missing or non-positive measurements and an empty user id are rejected
    /// before any remote call. Remote failures are recorded and returned.
    pub async fn update_measurements(
        &self,
        user_id: &str,
        weight_kg: Option<f64>,
        height_cm: Option<f64>,
    ) -> AppResult<User> {
        let user_id = require_user_id(user_id)?;
        let update = validate_measurements(weight_kg, height_cm)?;

        self.state.write().await.status.begin();
        let result = self.service.update_user(user_id, &update).await;

        let mut state = self.state.write().await;
        match result {
            Ok(mut user) => {
                // The profile endpoint does not embed the inventory
                user.user_products.clear();
                state.user = Some(user.clone());
                state.status.succeed();
                Ok(user)
            }
            Err(error) => {
                log_failure(STORE, "update_measurements", &error);
                state.status.fail("Failed to update profile.");
                Err(error.with_user_id(user_id))
            }
        }
    }
}

/// The `message` the backend put in an error body, if any
fn server_message(error: &AppError) -> Option<&str> {
    error.context.details.get("message")?.as_str()
}
