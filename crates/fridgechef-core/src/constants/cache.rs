// ABOUTME: Cache-related constants for response TTL, capacity, and cleanup intervals
// ABOUTME: Defaults for the in-memory response cache in front of the recipe service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors

/// Default response TTL in seconds (5 minutes per endpoint+params key)
pub const DEFAULT_RESPONSE_TTL_SECS: u64 = 300;

/// Default maximum cache entries for the in-memory cache
pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 1_000;

/// Default cleanup interval in seconds for expired entries
pub const DEFAULT_CLEANUP_INTERVAL_SECS: u64 = 60;

/// Cache key prefix for GET responses
pub const CACHE_KEY_PREFIX: &str = "GET ";
