// ABOUTME: reqwest-backed RecipeService with cookie session, request ids, and GET response caching
// ABOUTME: Unwraps the backend's { data } envelope and invalidates cached keys after mutations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors

use super::RecipeService;
use crate::cache::{CacheKey, CacheProvider, InMemoryCache};
use crate::config::ClientConfig;
use crate::constants::endpoints;
use crate::constants::http::REQUEST_ID_HEADER;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::{
    AuthStatus, Credentials, MeasurementsUpdate, NewRecipe, Product, Recipe, RecipeFilters, User,
};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// HTTP client for the Fridgechef API
///
/// GET responses are cached per endpoint and canonical query for the
/// configured TTL. Cookies set by `/auth/login` are kept in the client's
/// cookie store and sent on every later request.
#[derive(Clone)]
pub struct HttpApiClient {
    http: Client,
    config: ClientConfig,
    cache: InMemoryCache,
    cache_ttl: Duration,
}

impl HttpApiClient {
    /// Create a client from configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the underlying HTTP client cannot be built
    pub fn new(config: &ClientConfig) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(config.http_timeout)
            .connect_timeout(config.http_connect_timeout)
            .user_agent(format!("fridgechef/{}", env!("CARGO_PKG_VERSION")))
            .cookie_store(true)
            .build()
            .map_err(|e| {
                AppError::config(format!("Failed to create HTTP client: {e}")).with_source(e)
            })?;

        let cache_config = config.cache_config();
        Ok(Self {
            http,
            config: config.clone(),
            cache: InMemoryCache::with_config(&cache_config),
            cache_ttl: cache_config.default_ttl,
        })
    }

    /// The response cache, exposed for inspection and manual invalidation
    #[must_use]
    pub const fn cache(&self) -> &InMemoryCache {
        &self.cache
    }

    async fn get_cached<T: DeserializeOwned>(&self, key: CacheKey) -> AppResult<T> {
        let cache_key = key.to_string();
        if let Some(body) = self.cache.get::<Value>(&key).await? {
            AppLogger::log_cache_event(&cache_key, "hit");
            return decode_data(body);
        }

        AppLogger::log_cache_event(&cache_key, "miss");
        let body = self
            .execute(Method::GET, &key.endpoint, &key.params, None)
            .await?;
        let decoded = decode_data(body.clone())?;
        self.cache.set(&key, &body, self.cache_ttl).await?;
        Ok(decoded)
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<Value>,
    ) -> AppResult<Value> {
        let request_id = Uuid::new_v4().to_string();
        let started = Instant::now();

        let mut request = self
            .http
            .request(method.clone(), self.config.endpoint_url(path))
            .header(REQUEST_ID_HEADER, &request_id);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        match dispatch(request).await {
            Ok((status, body)) => {
                AppLogger::log_api_request(
                    method.as_str(),
                    path,
                    status,
                    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
                    &request_id,
                );
                Ok(body)
            }
            Err(error) => {
                AppLogger::log_api_failure(method.as_str(), path, &request_id, &error);
                Err(error.with_request_id(request_id))
            }
        }
    }

    async fn invalidate_inventory_views(&self) -> AppResult<()> {
        self.cache
            .invalidate(&CacheKey::endpoint(endpoints::AUTH_STATUS))
            .await?;
        self.cache
            .invalidate(&CacheKey::endpoint(endpoints::RECIPES_RECOMMEND))
            .await?;
        AppLogger::log_cache_event(endpoints::AUTH_STATUS, "invalidate");
        Ok(())
    }

    async fn invalidate_recipes(&self) -> AppResult<()> {
        let pattern = CacheKey::prefix_pattern(endpoints::RECIPES);
        let removed = self.cache.invalidate_pattern(&pattern).await?;
        AppLogger::log_cache_event(&pattern, &format!("invalidate ({removed} entries)"));
        Ok(())
    }
}

/// Send a request and return the status and body.
///
/// A success body that is not JSON comes back as a string so that mutations
/// answered with plain text still count as applied.
async fn dispatch(request: RequestBuilder) -> AppResult<(u16, Value)> {
    let response = request.send().await?;
    let status = response.status().as_u16();
    let success = response.status().is_success();
    let bytes = response.bytes().await?;

    if !success {
        return Err(status_error(status, &bytes));
    }
    Ok((status, success_body(&bytes)))
}

fn success_body(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

/// Map a non-success response, keeping the server's `message` when present
fn status_error(status: u16, body: &[u8]) -> AppError {
    let server_message = serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|value| value.get("message")?.as_str().map(str::to_owned));

    match server_message {
        Some(message) => AppError::from_status(status, message.clone())
            .with_details(json!({ "status": status, "message": message })),
        None => AppError::from_status(status, format!("Request failed with status {status}")),
    }
}

/// Decode a response body, unwrapping `{ "data": .. }` when present
fn decode_data<T: DeserializeOwned>(body: Value) -> AppResult<T> {
    let payload = match body {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or_default()
        }
        other => other,
    };
    Ok(serde_json::from_value(payload)?)
}

#[async_trait]
impl RecipeService for HttpApiClient {
    async fn auth_status(&self) -> AppResult<AuthStatus> {
        self.get_cached(CacheKey::endpoint(endpoints::AUTH_STATUS))
            .await
    }

    async fn login(&self, credentials: &Credentials) -> AppResult<()> {
        let body = serde_json::to_value(credentials)?;
        self.execute(Method::POST, endpoints::AUTH_LOGIN, &[], Some(body))
            .await?;
        self.cache.clear_all().await
    }

    async fn logout(&self) -> AppResult<()> {
        self.execute(Method::POST, endpoints::AUTH_LOGOUT, &[], Some(json!({})))
            .await?;
        self.cache.clear_all().await
    }

    async fn update_user(&self, user_id: &str, update: &MeasurementsUpdate) -> AppResult<User> {
        let body = serde_json::to_value(update)?;
        let response = self
            .execute(Method::PATCH, &endpoints::user(user_id), &[], Some(body))
            .await?;
        self.cache
            .invalidate(&CacheKey::endpoint(endpoints::AUTH_STATUS))
            .await?;
        decode_data(response)
    }

    async fn add_user_product(
        &self,
        user_id: &str,
        product_id: &str,
        quantity: f64,
    ) -> AppResult<()> {
        self.execute(
            Method::POST,
            &endpoints::user_product(user_id, product_id),
            &[],
            Some(json!({ "quantity": quantity })),
        )
        .await?;
        self.invalidate_inventory_views().await
    }

    async fn remove_user_product(&self, user_id: &str, product_id: &str) -> AppResult<()> {
        self.execute(
            Method::DELETE,
            &endpoints::user_product(user_id, product_id),
            &[],
            None,
        )
        .await?;
        self.invalidate_inventory_views().await
    }

    async fn list_products(&self) -> AppResult<Vec<Product>> {
        self.get_cached(CacheKey::endpoint(endpoints::PRODUCTS)).await
    }

    async fn list_recipes(&self) -> AppResult<Vec<Recipe>> {
        self.get_cached(CacheKey::endpoint(endpoints::RECIPES)).await
    }

    async fn search_recipes(&self, filters: &RecipeFilters) -> AppResult<Vec<Recipe>> {
        self.get_cached(CacheKey::new(endpoints::RECIPES, filters.to_query_pairs()))
            .await
    }

    async fn get_recipe(&self, recipe_id: &str) -> AppResult<Recipe> {
        self.get_cached(CacheKey::endpoint(endpoints::recipe(recipe_id)))
            .await
            .map_err(|e| e.with_resource_id(recipe_id))
    }

    async fn recommended_recipes(&self) -> AppResult<Vec<Recipe>> {
        self.get_cached(CacheKey::endpoint(endpoints::RECIPES_RECOMMEND))
            .await
    }

    async fn recipe_categories(&self) -> AppResult<Vec<String>> {
        self.get_cached(CacheKey::endpoint(endpoints::RECIPES_CATEGORIES))
            .await
    }

    async fn create_recipe(&self, draft: &NewRecipe) -> AppResult<Recipe> {
        let body = serde_json::to_value(draft)?;
        let response = self
            .execute(Method::POST, endpoints::RECIPES, &[], Some(body))
            .await?;
        self.invalidate_recipes().await?;
        decode_data(response)
    }

    async fn delete_recipe(&self, recipe_id: &str) -> AppResult<()> {
        self.execute(Method::DELETE, &endpoints::recipe(recipe_id), &[], None)
            .await?;
        self.invalidate_recipes().await
    }
}
