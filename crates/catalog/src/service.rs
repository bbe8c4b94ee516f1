use async_trait::async_trait;
use serde_json::Value as JsonValue;
use thiserror::Error;

/// Errors from fetching products out of the remote catalog.
///
/// ## Error Categories
///
/// - **Transport**: the request never produced a response (DNS, connect, timeout)
/// - **Status**: the service answered with a non-success HTTP status
/// - **Decode**: the response body was not JSON
/// - **Unavailable**: no catalog is reachable (e.g. not configured)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog transport error: {0}")]
    Transport(String),

    #[error("catalog responded with status {0}")]
    Status(u16),

    #[error("catalog response could not be decoded: {0}")]
    Decode(String),

    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// The remote product catalog.
///
/// Exposes a single "browse the first N products" operation. The result is
/// returned as untyped JSON on purpose: callers must treat it as untrusted and
/// check its shape (it is nominally an array of product records, but nothing
/// guarantees that).
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn browse_products(&self, first: usize) -> Result<JsonValue, CatalogError>;
}

