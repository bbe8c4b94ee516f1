//! Store configuration consumed by the pipeline.

use serde::Deserialize;
use serde_json::Value as JsonValue;

use storefront_core::{DomainError, DomainResult, Location};

/// Read-only snapshot of the store configuration.
///
/// Category records are kept as raw JSON: they are edited by hand and may be
/// missing a slug or carry one of the wrong type. The category source decides
/// which of them become entries.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    base_url: Location,
    categories: Vec<JsonValue>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStoreConfig {
    base_url: String,
    #[serde(default)]
    categories: Vec<JsonValue>,
}

impl StoreConfig {
    /// Build a config; trailing slashes on `base_url` are dropped so joined
    /// paths never contain `//`.
    pub fn new(base_url: &str, categories: Vec<JsonValue>) -> DomainResult<Self> {
        let base_url = Location::parse(base_url.trim_end_matches('/'))?;
        Ok(Self {
            base_url,
            categories,
        })
    }

    /// Parse `{ "baseUrl": "...", "categories": [ { "slug": "..." } ] }`.
    pub fn from_json_str(json: &str) -> DomainResult<Self> {
        let raw: RawStoreConfig = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("invalid store config: {e}")))?;
        Self::new(&raw.base_url, raw.categories)
    }

    pub fn base_url(&self) -> &Location {
        &self.base_url
    }

    pub fn categories(&self) -> &[JsonValue] {
        &self.categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let cfg = StoreConfig::new("https://shop.example//", vec![]).unwrap();
        assert_eq!(cfg.base_url().as_str(), "https://shop.example");
    }

    #[test]
    fn blank_base_url_is_rejected() {
        assert!(StoreConfig::new("", vec![]).is_err());
        assert!(StoreConfig::new("/", vec![]).is_err());
    }

    #[test]
    fn parses_json_document() {
        let cfg = StoreConfig::from_json_str(
            r#"{ "baseUrl": "https://shop.example", "categories": [{ "slug": "shoes" }, { "name": "no slug" }] }"#,
        )
        .unwrap();

        assert_eq!(cfg.base_url().as_str(), "https://shop.example");
        assert_eq!(cfg.categories().len(), 2);
        assert_eq!(cfg.categories()[0], json!({ "slug": "shoes" }));
    }

    #[test]
    fn categories_default_to_empty() {
        let cfg = StoreConfig::from_json_str(r#"{ "baseUrl": "https://shop.example" }"#).unwrap();
        assert!(cfg.categories().is_empty());
    }

    #[test]
    fn malformed_json_is_a_validation_error() {
        let err = StoreConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
