//! Catalog service collaborator.
//!
//! This crate talks to the remote product catalog and decides which raw product
//! records are trustworthy enough to become sitemap entries. It knows nothing
//! about URLs or the sitemap itself.

pub mod http;
pub mod memory;
pub mod product;
pub mod service;

pub use http::HttpCatalogClient;
pub use memory::InMemoryCatalog;
pub use product::{validate_product, ProductRejection, ValidProduct};
pub use service::{CatalogError, CatalogService};
