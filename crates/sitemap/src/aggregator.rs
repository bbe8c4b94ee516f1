use chrono::{DateTime, Utc};

use storefront_catalog::CatalogService;
use storefront_core::SitemapEntry;

use crate::config::StoreConfig;
use crate::sources::catalog::product_entries;
use crate::sources::{category, root};

/// Build the full sitemap: root, then categories, then products.
///
/// Never fails: a catalog outage only shortens the list.
pub async fn generate_sitemap(config: &StoreConfig, catalog: &dyn CatalogService) -> Vec<SitemapEntry> {
    generate_sitemap_at(config, catalog, Utc::now()).await
}

/// Same as [`generate_sitemap`], with the clock reading passed in.
///
/// `now` stamps the root and category entries; product entries carry their own
/// catalog timestamps.
pub async fn generate_sitemap_at(
    config: &StoreConfig,
    catalog: &dyn CatalogService,
    now: DateTime<Utc>,
) -> Vec<SitemapEntry> {
    let base = config.base_url();

    let root = root::root_entry(base, now);
    let categories = category::category_entries(base, config.categories(), now);
    let products = product_entries(base, catalog).await;

    tracing::debug!(
        categories = categories.len(),
        products = products.len(),
        "sitemap assembled"
    );

    let mut entries = Vec::with_capacity(1 + categories.len() + products.len());
    entries.push(root);
    entries.extend(categories);
    entries.extend(products);
    entries
}
