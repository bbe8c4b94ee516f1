//! HTTP application wiring (Axum router + state).
//!
//! - `routes/`: HTTP routes + handlers
//! - `xml.rs`: sitemap XML rendering
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use storefront_catalog::{CatalogError, CatalogService, HttpCatalogClient, InMemoryCatalog};

use crate::config::Config;
use crate::context::AppState;

pub mod errors;
pub mod routes;
pub mod xml;

/// Build the shared state from host configuration.
pub fn build_state(config: &Config) -> anyhow::Result<AppState> {
    let store = config.load_store_config()?;

    let catalog: Arc<dyn CatalogService> = match &config.catalog_url {
        Some(url) => Arc::new(HttpCatalogClient::new(url.clone(), config.catalog_timeout)?),
        None => {
            tracing::warn!("CATALOG_URL not set; sitemap will contain no products");
            Arc::new(InMemoryCatalog::failing(CatalogError::Unavailable(
                "CATALOG_URL not set".to_string(),
            )))
        }
    };

    Ok(AppState::new(store, catalog))
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(ServiceBuilder::new().layer(Extension(state)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config(catalog_url: Option<&str>) -> Config {
        Config {
            bind_addr: "127.0.0.1:0".to_string(),
            public_url: Some("https://shop.example".to_string()),
            store_config_path: None,
            catalog_url: catalog_url.map(str::to_string),
            catalog_timeout: Duration::from_secs(1),
        }
    }

    #[tokio::test]
    async fn missing_catalog_url_reports_catalog_unavailable() {
        let state = build_state(&config(None)).unwrap();

        let err = state.catalog().browse_products(100).await.unwrap_err();
        assert!(matches!(err, CatalogError::Unavailable(_)));
    }

    #[tokio::test]
    async fn missing_catalog_still_yields_root_entry() {
        let state = build_state(&config(None)).unwrap();

        let entries = storefront_sitemap::generate_sitemap(state.store(), state.catalog()).await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].url(), "https://shop.example");
    }
}
