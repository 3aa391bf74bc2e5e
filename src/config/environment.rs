// ABOUTME: Environment-driven client configuration with defaults and validation
// ABOUTME: Reads FRIDGECHEF_* variables, optionally from a .env file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors

//! Environment-based configuration for the Fridgechef client

use crate::cache::CacheConfig;
use crate::constants::cache::{DEFAULT_CACHE_MAX_ENTRIES, DEFAULT_RESPONSE_TTL_SECS};
use crate::constants::http::{
    DEFAULT_API_URL, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS,
};
use crate::constants::{env_config, search};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL without a trailing slash
    pub api_url: String,
    /// Lifetime of cached GET responses
    pub cache_ttl: Duration,
    /// Maximum number of cached responses
    pub cache_max_entries: usize,
    /// Delay between the last keystroke and the remote search
    pub search_debounce: Duration,
    /// Whole-request timeout
    pub http_timeout: Duration,
    /// Connection establishment timeout
    pub http_connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            cache_ttl: Duration::from_secs(DEFAULT_RESPONSE_TTL_SECS),
            cache_max_entries: DEFAULT_CACHE_MAX_ENTRIES,
            search_debounce: Duration::from_millis(search::DEFAULT_DEBOUNCE_MS),
            http_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            http_connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Default configuration pointing at `api_url`
    pub fn for_base_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: trim_base_url(api_url.into()),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a variable cannot be parsed or the
    /// resulting configuration fails [`Self::validate`].
    pub fn from_env() -> AppResult<Self> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {}", e);
        }

        let config = Self {
            api_url: trim_base_url(env_var_or(env_config::API_URL, DEFAULT_API_URL)),
            cache_ttl: Duration::from_secs(env_parse(
                env_config::CACHE_TTL_SECS,
                DEFAULT_RESPONSE_TTL_SECS,
            )?),
            cache_max_entries: env_parse(
                env_config::CACHE_MAX_ENTRIES,
                DEFAULT_CACHE_MAX_ENTRIES,
            )?,
            search_debounce: Duration::from_millis(env_parse(
                env_config::SEARCH_DEBOUNCE_MS,
                search::DEFAULT_DEBOUNCE_MS,
            )?),
            http_timeout: Duration::from_secs(env_parse(
                env_config::HTTP_TIMEOUT_SECS,
                DEFAULT_TIMEOUT_SECS,
            )?),
            http_connect_timeout: Duration::from_secs(env_parse(
                env_config::HTTP_CONNECT_TIMEOUT_SECS,
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?),
        };

        config.validate()?;
        info!(api_url = %config.api_url, "Client configuration loaded");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for a non-http(s) URL or any zero-valued limit.
    pub fn validate(&self) -> AppResult<()> {
        let url = Url::parse(&self.api_url)
            .map_err(|e| AppError::config(format!("Invalid API URL '{}': {e}", self.api_url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::config(format!(
                "API URL must use http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.cache_ttl.is_zero() {
            return Err(AppError::config("Cache TTL must be greater than zero"));
        }
        if self.cache_max_entries == 0 {
            return Err(AppError::config("Cache size must be greater than zero"));
        }
        if self.http_timeout.is_zero() || self.http_connect_timeout.is_zero() {
            return Err(AppError::config("HTTP timeouts must be greater than zero"));
        }
        Ok(())
    }

    /// Absolute URL for an endpoint path
    #[must_use]
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{path}", self.api_url)
    }

    /// Cache settings derived from this configuration
    #[must_use]
    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig {
            max_entries: self.cache_max_entries,
            default_ttl: self.cache_ttl,
            ..CacheConfig::default()
        }
    }

    /// Summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Fridgechef Client Configuration:\n\
             - API URL: {}\n\
             - Cache: {} entries, {}s TTL\n\
             - Search debounce: {}ms\n\
             - HTTP timeouts: {}s request, {}s connect",
            self.api_url,
            self.cache_max_entries,
            self.cache_ttl.as_secs(),
            self.search_debounce.as_millis(),
            self.http_timeout.as_secs(),
            self.http_connect_timeout.as_secs(),
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to `default` when unset
fn env_parse<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config(format!("Invalid {key} value '{raw}': {e}"))),
        Err(_) => Ok(default),
    }
}

fn trim_base_url(url: String) -> String {
    url.trim_end_matches('/').to_owned()
}
