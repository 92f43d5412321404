//! HTTP client for the fake-store REST API.

use std::time::Duration;

use reqwest::header::{ACCEPT, CACHE_CONTROL};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use storefront_core::Product;

use crate::error::SourceError;
use crate::normalize::normalize_product;
use crate::types::RawProduct;

pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// HTTP client for the `/products` and `/products/categories` endpoints.
///
/// Requests are issued once. Non-2xx responses surface as
/// [`SourceError::UnexpectedStatus`] and are never retried.
///
/// Use [`FakeStoreClient::new`] for the public API or
/// [`FakeStoreClient::with_base_url`] to point at a mirror or mock server.
#[derive(Debug, Clone)]
pub struct FakeStoreClient {
    client: Client,
    base_url: Url,
}

impl FakeStoreClient {
    /// Creates a client pointed at the public fake-store API.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, SourceError> {
        Self::with_base_url(DEFAULT_BASE_URL, timeout_secs, user_agent)
    }

    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SourceError::InvalidBaseUrl`] if
    /// `base_url` is not an absolute http(s) URL.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash so `Url::join` appends instead of
        // replacing the last path segment of a mirror like `/api`.
        let normalised = format!("{}/", base_url.trim().trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| SourceError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SourceError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: format!("unsupported scheme \"{}\"", parsed.scheme()),
            });
        }

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetches the full product list.
    ///
    /// Records that fail validation are logged and skipped; the remaining
    /// products keep their response order.
    ///
    /// # Errors
    ///
    /// - [`SourceError::UnexpectedStatus`] for any non-2xx status.
    /// - [`SourceError::Http`] for network or TLS failures.
    /// - [`SourceError::Deserialize`] if the body is not a JSON array.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, SourceError> {
        let url = self.endpoint("products")?;
        let records: Vec<serde_json::Value> = self.get_json(url, "product list").await?;
        let total = records.len();

        let products: Vec<Product> = records
            .into_iter()
            .enumerate()
            .filter_map(|(position, value)| {
                let raw = match serde_json::from_value::<RawProduct>(value) {
                    Ok(raw) => raw,
                    Err(e) => {
                        tracing::warn!(position, error = %e, "skipping malformed product record");
                        return None;
                    }
                };
                match normalize_product(raw, position) {
                    Ok(product) => Some(product),
                    Err(e) => {
                        tracing::warn!(position, error = %e, "skipping invalid product record");
                        None
                    }
                }
            })
            .collect();

        if products.len() < total {
            tracing::warn!(
                kept = products.len(),
                skipped = total - products.len(),
                "product list contained invalid records"
            );
        }
        Ok(products)
    }

    /// Fetches the category names in server order.
    ///
    /// # Errors
    ///
    /// Same as [`Self::fetch_products`], with [`SourceError::Deserialize`]
    /// when the body is not an array of strings.
    pub async fn fetch_categories(&self) -> Result<Vec<String>, SourceError> {
        let url = self.endpoint("products/categories")?;
        self.get_json(url, "category list").await
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, SourceError> {
        self.base_url
            .join(path)
            .map_err(|e| SourceError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        context: &str,
    ) -> Result<T, SourceError> {
        tracing::debug!(url = %url, "fetching {context}");
        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<T>(&body).map_err(|e| SourceError::Deserialize {
            context: format!("{context} from {url}"),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
