//! Connector service HTTP client
//!
//! Every service operation is a `POST {endpoint}/{Operation}` with a JSON
//! body. Responses are JSON, or empty for commands that return nothing.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use adclink_connector::client::ConnectorClient;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = ConnectorClient::with_base_url("http://127.0.0.1:7150/api");
//! client.call_empty("Discover", &serde_json::json!({})).await?;
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::ConnectError;

/// HTTP client bound to one connector service endpoint
#[derive(Debug, Clone)]
pub struct ConnectorClient {
    /// The underlying HTTP client
    client: Client,
    /// Endpoint without trailing slash
    base_url: String,
}

impl ConnectorClient {
    /// Creates a client for `endpoint`, rejecting anything but http(s) URLs
    pub fn new(endpoint: &str) -> std::result::Result<Self, ConnectError> {
        let invalid = |reason: String| ConnectError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason,
        };

        let url = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }

        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a client with a custom base URL without validating it (useful
    /// for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of a service operation
    pub fn operation_url(&self, operation: &str) -> String {
        format!("{}/{}", self.base_url, operation)
    }

    async fn post<B: Serialize + ?Sized>(&self, operation: &str, body: &B) -> Result<Response> {
        debug!(operation, "Calling connector service");
        self.client
            .post(self.operation_url(operation))
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to send {operation} request"))?
            .error_for_status()
            .with_context(|| format!("{operation} returned error status"))
    }

    /// Calls `operation` and parses its JSON response
    pub async fn call<B, R>(&self, operation: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.post(operation, body)
            .await?
            .json()
            .await
            .with_context(|| format!("Failed to parse {operation} response"))
    }

    /// Calls `operation`, ignoring any response body
    pub async fn call_empty<B: Serialize + ?Sized>(&self, operation: &str, body: &B) -> Result<()> {
        self.post(operation, body).await?;
        Ok(())
    }
}
