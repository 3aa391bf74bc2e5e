// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Endpoint paths, defaults, BMI thresholds, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single flat list.

/// Cache-related constants (TTL, sizes, cleanup)
pub mod cache;

/// Backend endpoint paths
pub mod endpoints {
    /// Session status with embedded inventory
    pub const AUTH_STATUS: &str = "/auth/status";
    /// Start a session
    pub const AUTH_LOGIN: &str = "/auth/login";
    /// End a session
    pub const AUTH_LOGOUT: &str = "/auth/logout";
    /// Recipe collection (list, filtered search, create)
    pub const RECIPES: &str = "/recipes";
    /// Recipes coverable by the current inventory
    pub const RECIPES_RECOMMEND: &str = "/recipes/recommend";
    /// Distinct recipe category labels
    pub const RECIPES_CATEGORIES: &str = "/recipes/categories";
    /// Global product catalog
    pub const PRODUCTS: &str = "/products";

    /// Path of a single user
    #[must_use]
    pub fn user(user_id: &str) -> String {
        format!("/users/{user_id}")
    }

    /// Path of one product in a user's inventory
    #[must_use]
    pub fn user_product(user_id: &str, product_id: &str) -> String {
        format!("/users/{user_id}/products/{product_id}")
    }

    /// Path of a single recipe
    #[must_use]
    pub fn recipe(recipe_id: &str) -> String {
        format!("/recipes/{recipe_id}")
    }
}

/// Recipe search behavior
pub mod search {
    /// Debounce delay before a typed query reaches the backend
    pub const DEFAULT_DEBOUNCE_MS: u64 = 500;
    /// Category label that clears the category filter
    pub const ALL_CATEGORIES: &str = "All";
    /// Number of catalog suggestions offered for quick add
    pub const QUICK_ADD_LIMIT: usize = 8;
}

/// Body-mass-index thresholds (kg/m²)
pub mod bmi {
    /// Below this value: underweight
    pub const UNDERWEIGHT_UPPER: f64 = 18.5;
    /// Below this value: normal weight
    pub const NORMAL_UPPER: f64 = 25.0;
    /// Below this value: overweight; at or above: obese
    pub const OVERWEIGHT_UPPER: f64 = 30.0;
    /// Centimeters per meter, heights are entered in cm
    pub const CM_PER_M: f64 = 100.0;
}

/// Presentation-only numeric formatting
pub mod display {
    /// Decimal places for displayed quantities and BMI values
    pub const DECIMAL_PLACES: i32 = 2;
}

/// HTTP client defaults
pub mod http {
    /// Default request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
    /// Default connection timeout in seconds
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
    /// Default backend URL for local development
    pub const DEFAULT_API_URL: &str = "http://localhost:3000";
    /// Header carrying the per-request correlation id
    pub const REQUEST_ID_HEADER: &str = "x-request-id";
}

/// Environment variable names read by the client configuration
pub mod env_config {
    /// Backend base URL
    pub const API_URL: &str = "FRIDGECHEF_API_URL";
    /// Response cache TTL in seconds
    pub const CACHE_TTL_SECS: &str = "FRIDGECHEF_CACHE_TTL_SECS";
    /// Response cache capacity
    pub const CACHE_MAX_ENTRIES: &str = "FRIDGECHEF_CACHE_MAX_ENTRIES";
    /// Search debounce delay in milliseconds
    pub const SEARCH_DEBOUNCE_MS: &str = "FRIDGECHEF_SEARCH_DEBOUNCE_MS";
    /// HTTP request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "FRIDGECHEF_HTTP_TIMEOUT_SECS";
    /// HTTP connect timeout in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: &str = "FRIDGECHEF_HTTP_CONNECT_TIMEOUT_SECS";
    /// Login email used by the CLI
    pub const EMAIL: &str = "FRIDGECHEF_EMAIL";
    /// Login password used by the CLI
    pub const PASSWORD: &str = "FRIDGECHEF_PASSWORD";
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Client library / CLI service name
    pub const FRIDGECHEF_CLIENT: &str = "fridgechef";
}
