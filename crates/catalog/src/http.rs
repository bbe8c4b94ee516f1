//! HTTP client for the remote catalog service.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::service::{CatalogError, CatalogService};

/// Default request timeout for catalog fetches.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Catalog reached over HTTP: `GET {endpoint}/products?first={n}`.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpCatalogClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn browse_url(&self) -> String {
        format!("{}/products", self.endpoint)
    }
}

#[async_trait]
impl CatalogService for HttpCatalogClient {
    async fn browse_products(&self, first: usize) -> Result<JsonValue, CatalogError> {
        let url = self.browse_url();
        tracing::debug!(url = %url, first, "browsing catalog products");

        let resp = self
            .client
            .get(&url)
            .query(&[("first", first)])
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(CatalogError::Status(resp.status().as_u16()));
        }

        resp.json::<JsonValue>()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_trailing_slash_is_trimmed() {
        let client = HttpCatalogClient::new("http://catalog.local/api/", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(client.endpoint(), "http://catalog.local/api");
        assert_eq!(client.browse_url(), "http://catalog.local/api/products");
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_error() {
        // Reserve an ephemeral port, then free it so nothing is listening there.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = HttpCatalogClient::new(
            format!("http://127.0.0.1:{port}"),
            Duration::from_millis(500),
        )
        .unwrap();
        let err = client.browse_products(100).await.unwrap_err();
        assert!(matches!(err, CatalogError::Transport(_)));
    }
}
