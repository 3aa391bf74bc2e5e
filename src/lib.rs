// ABOUTME: Main library entry point for the Fridgechef client
// ABOUTME: Wires configuration, caching HTTP client, state stores, and debounced search together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors

#![deny(unsafe_code)]

//! # Fridgechef
//!
//! Client for the Fridgechef recipe and nutrition API. A user signs in,
//! keeps an inventory of food products ("my fridge"), searches recipes, sees
//! per-recipe ingredient coverage, and records weight and height to get a BMI.
//!
//! ## Architecture
//!
//! - **Client**: [`client::RecipeService`] is the remote API seam;
//!   [`client::HttpApiClient`] implements it over `reqwest` with a response cache
//! - **Stores**: explicit state containers (auth, inventory, catalog, recipes),
//!   each exposing an owned snapshot plus async actions
//! - **Intelligence**: the stock coverage evaluator and ranking, re-exported
//!   from `fridgechef-intelligence`
//! - **Search**: debounced recipe search built on a cancellable scheduled task
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fridgechef::client::HttpApiClient;
//! use fridgechef::config::ClientConfig;
//! use fridgechef::errors::AppResult;
//! use fridgechef::stores::RecipeStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ClientConfig::from_env()?;
//!     let service = Arc::new(HttpApiClient::new(&config)?);
//!     let recipes = RecipeStore::new(service);
//!     recipes.fetch_recipes().await?;
//!     println!("{} recipes", recipes.snapshot().await.recipes.len());
//!     Ok(())
//! }
//! ```

/// Response cache with LRU eviction and TTL expiry
pub mod cache;
/// Remote service trait and its HTTP implementation
pub mod client;
/// Configuration loaded from the environment
pub mod config;
/// Application constants
pub mod constants;
/// Unified error handling
pub mod errors;
/// Stock coverage evaluation and recipe ranking
pub mod intelligence;
/// Structured logging setup
pub mod logging;
/// Data models shared with the backend
pub mod models;
/// User-facing notifications derived from errors
pub mod notifications;
/// Debounced recipe search
pub mod search;
/// Application state containers
pub mod stores;
