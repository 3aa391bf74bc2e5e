// ABOUTME: Application constants re-exported from fridgechef-core
// ABOUTME: Endpoints, defaults, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors

pub use fridgechef_core::constants::*;
