//! reqwest implementation of [`ProductGateway`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use super::ProductGateway;
use super::error_mapping::{map_status_error, map_transport_error};
use crate::catalogue::base_url::ApiBaseUrl;
use crate::catalogue::error::CatalogueError;
use crate::catalogue::models::{
    CatalogueStats, HealthStatus, Product, ReviewDecision, ReviewReceipt, ReviewView,
};

/// Gateway that talks to the catalogue API over HTTP.
#[derive(Debug, Clone)]
pub struct HttpProductGateway {
    client: Client,
    base_url: ApiBaseUrl,
}

impl HttpProductGateway {
    /// Creates a gateway for the given API address.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::Configuration`] when the HTTP client cannot
    /// be constructed.
    pub fn new(base_url: ApiBaseUrl, timeout: Duration) -> Result<Self, CatalogueError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| CatalogueError::Configuration {
                message: format!("failed to configure catalogue HTTP client: {error}"),
            })?;

        Ok(Self { client, base_url })
    }

    /// Returns the API address this gateway targets.
    #[must_use]
    pub const fn base_url(&self) -> &ApiBaseUrl {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &str,
        path: &str,
    ) -> Result<T, CatalogueError> {
        let url = self.base_url.endpoint(path)?;
        tracing::debug!(%url, "{operation}");

        let raw_response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|error| map_transport_error(operation, &error))?;
        let response = ensure_success(operation, raw_response).await?;

        response.json::<T>().await.map_err(|error| CatalogueError::Decode {
            message: format!("{operation}: {error}"),
        })
    }
}

#[async_trait]
impl ProductGateway for HttpProductGateway {
    async fn list_products(&self, view: ReviewView) -> Result<Vec<Product>, CatalogueError> {
        let operation = format!("list {view} products");
        self.get_json(&operation, view.endpoint_path()).await
    }

    async fn submit_review(
        &self,
        decision: &ReviewDecision,
    ) -> Result<Option<ReviewReceipt>, CatalogueError> {
        let operation = format!("{} product {}", decision.action(), decision.product_id());
        let url = self.base_url.endpoint(&decision.endpoint_path())?;
        tracing::debug!(%url, "{operation}");

        let raw_response = self
            .client
            .post(url)
            .json(&decision.payload())
            .send()
            .await
            .map_err(|error| map_transport_error(&operation, &error))?;
        let response = ensure_success(&operation, raw_response).await?;

        // The acknowledgement body is informational; an unreadable body does
        // not turn an accepted decision into a failure.
        let body = response.text().await.unwrap_or_default();
        if body.trim().is_empty() {
            return Ok(None);
        }
        Ok(serde_json::from_str::<ReviewReceipt>(&body).ok())
    }

    async fn stats(&self) -> Result<CatalogueStats, CatalogueError> {
        self.get_json("load catalogue statistics", "products/stats")
            .await
    }

    async fn health(&self) -> Result<HealthStatus, CatalogueError> {
        self.get_json("check catalogue health", "health").await
    }
}

async fn ensure_success(operation: &str, response: Response) -> Result<Response, CatalogueError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.ok();
    let error = map_status_error(operation, status, body.as_deref());
    tracing::warn!(status = status.as_u16(), "{error}");
    Err(error)
}

#[cfg(test)]
mod tests;
