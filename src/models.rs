// ABOUTME: Data models re-exported from fridgechef-core
// ABOUTME: Products, inventory items, recipes, and users as the backend sends them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors

pub use fridgechef_core::models::*;
