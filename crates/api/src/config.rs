//! Host configuration loaded from environment variables.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;

use storefront_sitemap::StoreConfig;

/// Host configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// Public base URL of the storefront; overrides `baseUrl` from the store
    /// config file when set.
    pub public_url: Option<String>,

    /// JSON store config file (`baseUrl` + `categories`).
    pub store_config_path: Option<PathBuf>,

    /// Remote catalog endpoint. Without one the sitemap has no products.
    pub catalog_url: Option<String>,

    /// Request timeout for catalog fetches.
    pub catalog_timeout: Duration,
}

const DEFAULT_PUBLIC_URL: &str = "http://localhost:8080";

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `BIND_ADDR`: Server bind address (default: "0.0.0.0:8080")
    /// - `PUBLIC_URL`: Base URL for sitemap links (default: "http://localhost:8080"
    ///   when no store config file provides one)
    /// - `STORE_CONFIG_PATH`: Path to the JSON store config
    /// - `CATALOG_URL`: Catalog service endpoint
    /// - `CATALOG_TIMEOUT_SECS`: Catalog request timeout (default: 10)
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let public_url = non_empty_var("PUBLIC_URL");
        let store_config_path = non_empty_var("STORE_CONFIG_PATH").map(PathBuf::from);
        let catalog_url = non_empty_var("CATALOG_URL");

        let catalog_timeout = match non_empty_var("CATALOG_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(
                raw.parse::<u64>()
                    .with_context(|| format!("CATALOG_TIMEOUT_SECS is not a number: {raw}"))?,
            ),
            None => storefront_catalog::http::DEFAULT_TIMEOUT,
        };

        tracing::info!(
            bind_addr = %bind_addr,
            public_url = ?public_url,
            store_config_path = ?store_config_path,
            catalog_url = ?catalog_url,
            catalog_timeout_secs = catalog_timeout.as_secs(),
            "sitemap host configuration loaded"
        );

        Ok(Self {
            bind_addr,
            public_url,
            store_config_path,
            catalog_url,
            catalog_timeout,
        })
    }

    /// Resolve the store configuration snapshot the pipeline runs against.
    pub fn load_store_config(&self) -> anyhow::Result<StoreConfig> {
        let file_config = match &self.store_config_path {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read store config {}", path.display()))?;
                Some(
                    StoreConfig::from_json_str(&json)
                        .with_context(|| format!("failed to parse store config {}", path.display()))?,
                )
            }
            None => None,
        };

        let config = match (file_config, &self.public_url) {
            (Some(file), Some(url)) => StoreConfig::new(url, file.categories().to_vec())?,
            (Some(file), None) => file,
            (None, url) => StoreConfig::new(url.as_deref().unwrap_or(DEFAULT_PUBLIC_URL), Vec::new())?,
        };

        Ok(config)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
