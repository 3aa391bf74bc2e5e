// ABOUTME: Stock coverage evaluation and recipe ranking re-exported from fridgechef-intelligence
// ABOUTME: Pure functions the stores and CLI call on owned snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors

pub use fridgechef_intelligence::*;
