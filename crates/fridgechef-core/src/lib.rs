// ABOUTME: Core types and constants for the Fridgechef recipe and inventory client
// ABOUTME: Foundation crate with error handling, constants, and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors

#![deny(unsafe_code)]

//! # Fridgechef Core
//!
//! Foundation crate providing shared types and constants for the Fridgechef
//! client. This crate changes infrequently so the pure-logic and client crates
//! can build on a stable base.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ValidationError`
//! - **constants**: Endpoint paths, cache defaults, BMI thresholds, environment keys
//! - **models**: Products, inventory items, recipes, and users as exchanged with the backend

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Product, `InventoryItem`, Recipe, User)
pub mod models;
