//! Fixed-response catalog (dev/test).

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::service::{CatalogError, CatalogService};

/// Catalog that always answers with the same response.
///
/// Used by tests and by the host when no remote catalog is configured.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    response: Result<JsonValue, CatalogError>,
}

impl InMemoryCatalog {
    /// Catalog returning `records` (truncated to the requested size).
    pub fn with_records(records: Vec<JsonValue>) -> Self {
        Self {
            response: Ok(JsonValue::Array(records)),
        }
    }

    /// Catalog returning an arbitrary JSON payload, list or not.
    pub fn with_payload(payload: JsonValue) -> Self {
        Self {
            response: Ok(payload),
        }
    }

    /// Catalog whose every fetch fails with `err`.
    pub fn failing(err: CatalogError) -> Self {
        Self { response: Err(err) }
    }

    pub fn empty() -> Self {
        Self::with_records(Vec::new())
    }
}

#[async_trait]
impl CatalogService for InMemoryCatalog {
    async fn browse_products(&self, first: usize) -> Result<JsonValue, CatalogError> {
        match &self.response {
            Ok(JsonValue::Array(items)) => {
                Ok(JsonValue::Array(items.iter().take(first).cloned().collect()))
            }
            Ok(other) => Ok(other.clone()),
            Err(e) => Err(e.clone()),
        }
    }
}
