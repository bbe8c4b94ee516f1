use axum::{routing::get, Router};

pub mod sitemap;
pub mod system;

/// Router for the public sitemap endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/sitemap.xml", get(sitemap::sitemap_xml))
        .route("/sitemap.json", get(sitemap::sitemap_json))
}
