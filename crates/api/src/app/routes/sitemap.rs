use axum::{
    extract::Extension,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use storefront_sitemap::generate_sitemap;

use crate::app::{errors, xml};
use crate::context::AppState;

/// `GET /sitemap.xml`: the sitemap in sitemaps.org format.
pub async fn sitemap_xml(Extension(state): Extension<AppState>) -> axum::response::Response {
    let entries = generate_sitemap(state.store(), state.catalog()).await;

    match xml::render_sitemap(&entries) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to render sitemap xml");
            errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, "render_error", e.to_string())
        }
    }
}

/// `GET /sitemap.json`: the same entries as JSON, for debugging.
pub async fn sitemap_json(Extension(state): Extension<AppState>) -> axum::response::Response {
    let entries = generate_sitemap(state.store(), state.catalog()).await;
    (StatusCode::OK, Json(serde_json::json!({ "items": entries }))).into_response()
}
