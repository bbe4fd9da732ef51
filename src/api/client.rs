//! HTTP client for the country API.

use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::api::error::ApiError;
use crate::config::{ApiConfig, ConfigError};

/// Thin JSON-over-HTTP client bound to a base URL.
#[derive(Debug, Clone)]
pub struct CountriesApiClient {
    client: Client,
    base_url: String,
}

impl CountriesApiClient {
    /// Build a client from config.
    ///
    /// Fails with [`ConfigError::MissingBaseUrl`] when no base URL is set.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = config
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::MissingBaseUrl)?
            .trim_end_matches('/')
            .to_string();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .default_headers(headers)
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` (relative to the base URL) and decode the JSON body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(url = %url, "Sending country API request");

        let start = Instant::now();
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        let latency_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            let message = error_message(status, &body);
            tracing::warn!(
                url = %url,
                status = status.as_u16(),
                latency_ms,
                error = %message,
                "Country API returned an error"
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        tracing::debug!(
            url = %url,
            status = status.as_u16(),
            latency_ms,
            bytes = body.len(),
            "Country API response received"
        );

        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            path: path.to_string(),
            source,
        })
    }
}

/// Message for a failed response: the body's `message` field when the API
/// sent one, otherwise the status text.
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .map(String::from)
                .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()))
        })
}
