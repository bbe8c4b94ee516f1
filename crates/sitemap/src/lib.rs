//! Sitemap aggregation pipeline.
//!
//! Three sources feed the sitemap, always in this order:
//! - `sources::root`: the site root
//! - `sources::category`: categories from the store configuration
//! - `sources::catalog`: products fetched from the remote catalog
//!
//! No source failure is fatal; malformed records are dropped and a failed
//! catalog fetch yields no product entries.

pub mod aggregator;
pub mod config;
pub mod sources;

pub use aggregator::{generate_sitemap, generate_sitemap_at};
pub use config::StoreConfig;
pub use sources::catalog::PRODUCT_FETCH_LIMIT;
