// ABOUTME: Stock coverage evaluation, recipe ranking, and text matching for Fridgechef
// ABOUTME: Pure functions over in-memory snapshots, safe to call concurrently without locking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors

#![deny(unsafe_code)]

//! # Fridgechef Intelligence
//!
//! Everything in this crate is synchronous and side-effect free. The stores in
//! the client crate hand it owned snapshots; nothing here performs I/O or can
//! fail at runtime.
//!
//! - [`coverage`]: per-ingredient stock classification and recipe-level aggregation
//! - [`ranking`]: availability filters and coverage-ordered recommendations
//! - [`matching`]: name-based availability fallback for unlinked ingredients
//! - [`normalize`]: case- and accent-insensitive search text
//! - [`bmi`]: body-mass-index calculation and measurement validation

/// Body-mass-index calculation
pub mod bmi;
/// Stock coverage evaluator
pub mod coverage;
/// Presentation-only rounding helpers
pub mod display;
/// Text-based ingredient availability
pub mod matching;
/// Search text normalization
pub mod normalize;
/// Recipe filtering and ranking by coverage
pub mod ranking;

pub use bmi::{calculate_bmi, profile_bmi, validate_measurements, BmiReading};
pub use coverage::{
    evaluate_recipe, evaluate_requirement, CoverageResult, CoverageStatus, IngredientCoverage,
    InventorySnapshot, RecipeAvailability, RecipeCoverage,
};
pub use display::{format_amount, round_for_display};
pub use matching::InventoryNameIndex;
pub use normalize::{matches_query, normalize_text};
pub use ranking::{filter_by_availability, rank_by_coverage, RankedRecipe};
