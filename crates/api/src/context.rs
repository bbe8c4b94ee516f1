use std::sync::Arc;

use storefront_catalog::CatalogService;
use storefront_sitemap::StoreConfig;

/// Shared, read-only state handed to every request.
///
/// Each sitemap request runs the pipeline from scratch against this snapshot;
/// nothing is cached between requests.
#[derive(Clone)]
pub struct AppState {
    store: Arc<StoreConfig>,
    catalog: Arc<dyn CatalogService>,
}

impl AppState {
    pub fn new(store: StoreConfig, catalog: Arc<dyn CatalogService>) -> Self {
        Self {
            store: Arc::new(store),
            catalog,
        }
    }

    pub fn store(&self) -> &StoreConfig {
        &self.store
    }

    pub fn catalog(&self) -> &dyn CatalogService {
        self.catalog.as_ref()
    }
}
