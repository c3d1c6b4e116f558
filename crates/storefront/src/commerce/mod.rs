//! Commerce backend API client.
//!
//! A JSON-over-HTTP client for the commerce backend using `reqwest` 0.13.
//! Product reads are cached with `moka` (5-minute TTL). Auth submissions are
//! never cached or retried; every failure is terminal for that attempt.

mod cache;
mod conversions;
mod error;
pub mod types;

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, instrument};

pub use conversions::{ProductPayload, convert_product};
pub use error::CommerceError;

use crate::config::ApiBase;
use cache::CacheValue;
use types::{AddToCartRequest, AuthSession, LoginRequest, Product, RegisterRequest};

/// Login endpoint, relative to the API base.
pub const LOGIN_ENDPOINT: &str = "/api/auth/login/";
/// Registration endpoint, relative to the API base.
pub const REGISTER_ENDPOINT: &str = "/api/auth/register/";

/// Generic fallback when an error body carries no usable message.
const GENERIC_FAILURE: &str = "Request failed";

// =============================================================================
// CommerceClient
// =============================================================================

/// Client for the commerce backend API.
///
/// Provides product reads, cart writes, and merchant authentication.
/// Products are cached for 5 minutes.
#[derive(Clone)]
pub struct CommerceClient {
    inner: Arc<CommerceClientInner>,
}

struct CommerceClientInner {
    client: reqwest::Client,
    base: String,
    cache: moka::future::Cache<String, CacheValue>,
}

impl CommerceClient {
    /// Create a new commerce client against the resolved API base address.
    #[must_use]
    pub fn new(api_base: &ApiBase) -> Self {
        let cache = moka::future::Cache::builder()
            .max_capacity(1000)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Self {
            inner: Arc::new(CommerceClientInner {
                client: reqwest::Client::new(),
                base: api_base.resolve().to_owned(),
                cache,
            }),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.inner.base, path)
    }

    // =========================================================================
    // Product Methods
    // =========================================================================

    /// Get the product listing.
    ///
    /// Accepts either the paginated shape (`{"results": [...]}`) or a bare
    /// array, normalizing every record through [`convert_product`].
    ///
    /// # Errors
    ///
    /// Returns an error if the request or response parsing fails.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, CommerceError> {
        let cache_key = "products".to_string();

        if let Some(CacheValue::Products(products)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for product listing");
            return Ok(products);
        }

        let response = self
            .inner
            .client
            .get(self.url("/api/products/"))
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let body: serde_json::Value = serde_json::from_str(&text)?;
            return Err(CommerceError::Rejected(extract_error_message(&body)));
        }

        let payloads = parse_product_list(&text)?;
        let products: Vec<Product> = payloads.into_iter().map(convert_product).collect();

        self.inner
            .cache
            .insert(cache_key, CacheValue::Products(products.clone()))
            .await;

        Ok(products)
    }

    /// Get a single product by id.
    ///
    /// # Errors
    ///
    /// Returns `CommerceError::NotFound` for a 404, or another error if the
    /// request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_product(&self, id: i64) -> Result<Product, CommerceError> {
        let cache_key = format!("product:{id}");

        if let Some(CacheValue::Product(product)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for product");
            return Ok(*product);
        }

        let response = self
            .inner
            .client
            .get(self.url(&format!("/api/products/{id}/")))
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CommerceError::NotFound(format!("Product not found: {id}")));
        }

        let text = response.text().await?;
        if !status.is_success() {
            let body: serde_json::Value = serde_json::from_str(&text)?;
            return Err(CommerceError::Rejected(extract_error_message(&body)));
        }

        let payload: ProductPayload = serde_json::from_str(&text)?;
        let product = convert_product(payload);

        self.inner
            .cache
            .insert(cache_key, CacheValue::Product(Box::new(product.clone())))
            .await;

        Ok(product)
    }

    // =========================================================================
    // Cart Methods (not cached - mutable state)
    // =========================================================================

    /// Add a product to the authenticated customer's cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the request or the request
    /// fails at the transport level.
    #[instrument(skip(self, access_token), fields(product_id = %request.product_id))]
    pub async fn add_to_cart(
        &self,
        access_token: &str,
        request: &AddToCartRequest,
    ) -> Result<(), CommerceError> {
        let response = self
            .inner
            .client
            .post(self.url("/api/cart/add/"))
            .bearer_auth(access_token)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let text = response.text().await?;
        let body: serde_json::Value = serde_json::from_str(&text)?;
        Err(CommerceError::Rejected(extract_error_message(&body)))
    }

    // =========================================================================
    // Auth Methods
    // =========================================================================

    /// Log a merchant in.
    ///
    /// # Errors
    ///
    /// Returns `CommerceError::Rejected` with the backend's message on an
    /// HTTP failure, or a transport/parse error otherwise.
    #[instrument(skip(self, request))]
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthSession, CommerceError> {
        self.submit_auth(LOGIN_ENDPOINT, request).await
    }

    /// Register a new merchant account.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::login`].
    #[instrument(skip(self, request))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthSession, CommerceError> {
        self.submit_auth(REGISTER_ENDPOINT, request).await
    }

    /// POST an auth payload and interpret the response.
    ///
    /// Success bodies parse into [`AuthSession`]; failure bodies go through
    /// [`extract_error_message`]. A body that isn't JSON at all surfaces as a
    /// parse error, which callers present as a network-level failure.
    async fn submit_auth<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        payload: &T,
    ) -> Result<AuthSession, CommerceError> {
        let response = self
            .inner
            .client
            .post(self.url(endpoint))
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            Ok(serde_json::from_str(&text)?)
        } else {
            let body: serde_json::Value = serde_json::from_str(&text)?;
            Err(CommerceError::Rejected(extract_error_message(&body)))
        }
    }
}

// =============================================================================
// Response Parsing Helpers
// =============================================================================

/// Parse a product listing body in either upstream shape.
fn parse_product_list(text: &str) -> Result<Vec<ProductPayload>, CommerceError> {
    #[derive(serde::Deserialize)]
    struct Paginated {
        results: Vec<ProductPayload>,
    }

    let body: serde_json::Value = serde_json::from_str(text)?;
    match body {
        serde_json::Value::Array(_) => Ok(serde_json::from_value(body)?),
        serde_json::Value::Object(_) => Ok(serde_json::from_value::<Paginated>(body)?.results),
        _ => Err(CommerceError::Parse(<serde_json::Error as serde::de::Error>::custom(
            "unexpected product listing shape",
        ))),
    }
}

/// Derive a human-readable message from an error response body.
///
/// Fallback order: explicit `detail`, then `error`, then `message`, then the
/// first field-level validation message found (a string, or a list joined
/// with `", "`), then a generic `"Request failed"`.
#[must_use]
pub fn extract_error_message(body: &serde_json::Value) -> String {
    for key in ["detail", "error", "message"] {
        if let Some(message) = body.get(key).and_then(serde_json::Value::as_str) {
            return message.to_owned();
        }
    }

    if let Some(map) = body.as_object() {
        for value in map.values() {
            match value {
                serde_json::Value::String(message) => return message.clone(),
                serde_json::Value::Array(items) => {
                    let parts: Vec<&str> = items
                        .iter()
                        .filter_map(serde_json::Value::as_str)
                        .collect();
                    if !parts.is_empty() {
                        return parts.join(", ");
                    }
                }
                _ => {}
            }
        }
    }

    GENERIC_FAILURE.to_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_prefers_detail() {
        let body = json!({
            "detail": "Invalid credentials.",
            "error": "nope",
            "message": "also nope",
            "email": ["unused"]
        });
        assert_eq!(extract_error_message(&body), "Invalid credentials.");
    }

    #[test]
    fn test_extract_falls_back_to_error_then_message() {
        let body = json!({"error": "broken"});
        assert_eq!(extract_error_message(&body), "broken");

        let body = json!({"message": "try later"});
        assert_eq!(extract_error_message(&body), "try later");
    }

    #[test]
    fn test_extract_field_level_string() {
        let body = json!({"email": "Enter a valid email address."});
        assert_eq!(extract_error_message(&body), "Enter a valid email address.");
    }

    #[test]
    fn test_extract_field_level_list_joins() {
        let body = json!({"password": ["too short", "too common"]});
        assert_eq!(extract_error_message(&body), "too short, too common");
    }

    #[test]
    fn test_extract_single_field_list() {
        let body = json!({"field_name": ["too short"]});
        assert_eq!(extract_error_message(&body), "too short");
    }

    #[test]
    fn test_extract_generic_fallback() {
        assert_eq!(extract_error_message(&json!({})), "Request failed");
        assert_eq!(extract_error_message(&json!({"count": 3})), "Request failed");
        assert_eq!(extract_error_message(&json!(null)), "Request failed");
    }

    #[test]
    fn test_parse_product_list_bare_array() {
        let payloads = parse_product_list(r#"[{"id": 1, "name": "A"}]"#).unwrap();
        assert_eq!(payloads.len(), 1);
        assert_eq!(payloads.first().unwrap().name, "A");
    }

    #[test]
    fn test_parse_product_list_paginated() {
        let payloads =
            parse_product_list(r#"{"count": 1, "results": [{"id": 1, "name": "A"}]}"#).unwrap();
        assert_eq!(payloads.len(), 1);
    }

    #[test]
    fn test_parse_product_list_rejects_scalar() {
        assert!(parse_product_list("42").is_err());
    }
}
