// ABOUTME: Logging configuration and structured logging setup for the client and CLI
// ABOUTME: Configures log levels and formatters; events go to stderr so CLI output stays clean
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors

//! Structured logging configuration

use crate::constants::service_names;
use crate::errors::{AppError, AppResult};
use std::env;
use std::io;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::{
    filter::Directive, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for log shipping
    Json,
    /// Full human-readable format for development
    Pretty,
    /// Compact format, the CLI default
    Compact,
}

impl LogFormat {
    fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some("json") => Self::Json,
            Some("pretty") => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: LogFormat::Compact,
            include_location: false,
            include_thread: false,
            service_name: service_names::FRIDGECHEF_CLIENT.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
            format: LogFormat::from_env_value(env::var("LOG_FORMAT").ok().as_deref()),
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: env::var("LOG_INCLUDE_THREAD").is_ok(),
            ..Self::default()
        }
    }

    /// Override the level, e.g. from a `--verbose` flag
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    fn directive(raw: &str, fallback: Level) -> Directive {
        raw.parse().unwrap_or_else(|_| fallback.into())
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::new(&self.level)
            .add_directive(Self::directive("hyper=warn", Level::WARN))
            .add_directive(Self::directive("hyper_util=warn", Level::WARN))
            .add_directive(Self::directive("reqwest=warn", Level::WARN))
            .add_directive(Self::directive(
                &format!("fridgechef={}", self.level),
                Level::WARN,
            ))
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> AppResult<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let layer = fmt::layer()
            .with_file(self.include_location)
            .with_line_number(self.include_location)
            .with_thread_ids(self.include_thread)
            .with_thread_names(self.include_thread)
            .with_writer(io::stderr);

        let result = match self.format {
            LogFormat::Json => registry.with(layer.json()).try_init(),
            LogFormat::Pretty => registry.with(layer).try_init(),
            LogFormat::Compact => registry.with(layer.compact().with_target(false)).try_init(),
        };
        result.map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

        debug!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            log.level = %self.level,
            log.format = ?self.format,
            "Logging initialized"
        );
        Ok(())
    }
}

/// Application-specific logging utilities
pub struct AppLogger;

impl AppLogger {
    /// Log authentication events
    pub fn log_auth_event(
        user_id: Option<&str>,
        event: &str,
        success: bool,
        details: Option<&str>,
    ) {
        info!(
            user.id = user_id.unwrap_or("anonymous"),
            auth.event = %event,
            auth.success = %success,
            auth.details = details.unwrap_or(""),
            "Authentication event"
        );
    }

    /// Log inventory mutations
    pub fn log_inventory_change(
        user_id: &str,
        product_id: &str,
        action: &str,
        quantity: Option<f64>,
    ) {
        info!(
            user.id = %user_id,
            product.id = %product_id,
            inventory.action = %action,
            inventory.quantity = quantity.unwrap_or_default(),
            "Inventory change"
        );
    }

    /// Log `API` requests
    pub fn log_api_request(
        method: &str,
        path: &str,
        status: u16,
        duration_ms: u64,
        request_id: &str,
    ) {
        debug!(
            http.method = %method,
            http.path = %path,
            http.status = %status,
            http.duration_ms = %duration_ms,
            request.id = %request_id,
            "HTTP request"
        );
    }

    /// Log failed `API` requests
    pub fn log_api_failure(method: &str, path: &str, request_id: &str, error: &AppError) {
        warn!(
            http.method = %method,
            http.path = %path,
            request.id = %request_id,
            error.code = ?error.code,
            error.message = %error.message,
            "HTTP request failed"
        );
    }

    /// Log cache lookups and invalidations
    pub fn log_cache_event(key: &str, event: &str) {
        debug!(cache.key = %key, cache.event = %event, "Cache event");
    }
}
