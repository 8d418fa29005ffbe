//! HTTP client for the storefront's product-listing API.

mod fetch_all;

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;

use snitch_core::AppConfig;

use crate::error::ScraperError;
use crate::types::{ChipsResponse, FiltersResponse};

/// Client for the listing API endpoints (`/products/plp/v2`,
/// `/products/filters/v2`, `/products/chips/v3`).
///
/// One network request per call — no retries, no caching. Transport failures
/// and non-2xx statuses surface as typed [`ScraperError`]s; the multi-page
/// loop in [`ListingClient::fetch_all_products`] converts them into early
/// termination with partial results.
pub struct ListingClient {
    client: reqwest::Client,
    base_url: String,
    referer: String,
}

impl ListingClient {
    /// Builds a `ListingClient` from the application config: total and
    /// connect timeouts, browser-like `User-Agent`, and the storefront
    /// `Referer` sent on every request.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(config: &AppConfig) -> Result<Self, ScraperError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            referer: config.referer.clone(),
        })
    }

    /// Fetches one page of the product listing as raw JSON.
    ///
    /// The envelope shape is not fixed by the upstream service, so the body
    /// is returned as an untyped [`Value`] for [`crate::normalize`] to probe.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::UnexpectedStatus`] — any non-2xx response.
    /// - [`ScraperError::Http`] — network, TLS, or timeout failure.
    /// - [`ScraperError::Deserialize`] — body is not valid JSON.
    pub async fn fetch_products_page(
        &self,
        product_type: &str,
        page: u32,
        limit: u32,
    ) -> Result<Value, ScraperError> {
        let url = Self::listing_url(&self.base_url, product_type, page, limit)?;
        self.get_json(&url, &format!("products page {page} ({product_type})"))
            .await
    }

    /// Fetches the available filter attributes and their value counts.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::fetch_products_page`].
    pub async fn fetch_filters(&self, product_type: &str) -> Result<FiltersResponse, ScraperError> {
        let url = Self::facet_url(&self.base_url, "products/filters/v2", product_type)?;
        self.get_json(&url, &format!("filters ({product_type})"))
            .await
    }

    /// Fetches the quick-filter chips.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::fetch_products_page`].
    pub async fn fetch_chips(&self, product_type: &str) -> Result<ChipsResponse, ScraperError> {
        let url = Self::facet_url(&self.base_url, "products/chips/v3", product_type)?;
        self.get_json(&url, &format!("chips ({product_type})")).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        context: &str,
    ) -> Result<T, ScraperError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .header(reqwest::header::REFERER, &self.referer)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<T>(&body).map_err(|e| ScraperError::Deserialize {
            context: context.to_string(),
            source: e,
        })
    }

    /// Builds the listing URL for the given product type, page, and limit.
    ///
    /// `product_type` is passed verbatim as a query parameter (the API
    /// accepts comma-joined category lists such as `"Shirts,Overshirt"`).
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidBaseUrl`] if the configured base URL
    /// cannot be parsed.
    fn listing_url(
        base_url: &str,
        product_type: &str,
        page: u32,
        limit: u32,
    ) -> Result<String, ScraperError> {
        let mut url = Self::endpoint(base_url, "products/plp/v2")?;
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("limit", &limit.to_string())
            .append_pair("product_type", product_type);
        Ok(url.to_string())
    }

    /// Builds a facet-endpoint URL (filters or chips) for a product type.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidBaseUrl`] if the configured base URL
    /// cannot be parsed.
    fn facet_url(
        base_url: &str,
        path: &str,
        product_type: &str,
    ) -> Result<String, ScraperError> {
        let mut url = Self::endpoint(base_url, path)?;
        url.query_pairs_mut()
            .append_pair("product_type", product_type);
        Ok(url.to_string())
    }

    fn endpoint(base_url: &str, path: &str) -> Result<reqwest::Url, ScraperError> {
        let joined = format!("{}/{path}", base_url.trim_end_matches('/'));
        reqwest::Url::parse(&joined).map_err(|e| ScraperError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
