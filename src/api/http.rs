//! `reqwest` implementation of [`FunctionsApi`].
//!
//! Any non-2xx status is a failure regardless of body content. No auth
//! headers are attached; the base URL is injected at construction.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::warn;

use super::types::{ApiError, FunctionsApi};
use crate::config::{ApiTimeouts, normalize_base_url};
use crate::model::FunctionRecord;

pub const FUNCTIONS_PATH: &str = "/api/functions";

pub struct HttpFunctionsApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpFunctionsApi {
    /// Build a client with default timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not http(s) or the HTTP client fails to build.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_timeouts(base_url, ApiTimeouts::default())
    }

    /// Build a client with explicit request/connect timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not http(s) or the HTTP client fails to build.
    pub fn with_timeouts(base_url: &str, timeouts: ApiTimeouts) -> Result<Self, ApiError> {
        let base_url = normalize_base_url(base_url).map_err(|e| ApiError::ClientBuild(e.to_string()))?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;
        Ok(Self { http, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        collection_url(&self.base_url)
    }

    fn item_url(&self, id: &str) -> String {
        item_url(&self.base_url, id)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(error) => {
                    warn!(%error, status = status.as_u16(), "could not read error response body");
                    String::new()
                }
            };
            return Err(ApiError::Status { status: status.as_u16(), body });
        }
        Ok(response)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        let response = self.send(self.http.get(url)).await?;
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait::async_trait]
impl FunctionsApi for HttpFunctionsApi {
    async fn list(&self) -> Result<Vec<FunctionRecord>, ApiError> {
        self.fetch_json(self.collection_url()).await
    }

    async fn get(&self, id: &str) -> Result<FunctionRecord, ApiError> {
        self.fetch_json(self.item_url(id)).await
    }

    async fn create(&self, record: &FunctionRecord) -> Result<(), ApiError> {
        self.send(self.http.post(self.collection_url()).json(record)).await?;
        Ok(())
    }

    async fn update(&self, id: &str, record: &FunctionRecord) -> Result<(), ApiError> {
        self.send(self.http.put(self.item_url(id)).json(record)).await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.send(self.http.delete(self.item_url(id))).await?;
        Ok(())
    }
}

fn collection_url(base_url: &str) -> String {
    format!("{base_url}{FUNCTIONS_PATH}")
}

fn item_url(base_url: &str, id: &str) -> String {
    format!("{base_url}{FUNCTIONS_PATH}/{id}")
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
