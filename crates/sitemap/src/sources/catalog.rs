//! Product entries from the remote catalog.
//!
//! Two fault boundaries apply here:
//! - the fetch as a whole: a failed fetch, or a payload that is not a list,
//!   yields no product entries at all
//! - each record: a record that fails validation or cannot be turned into an
//!   entry is dropped on its own, the rest of the batch carries on
//!
//! Neither boundary ever surfaces an error to the caller; both are logged.

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use thiserror::Error;

use storefront_catalog::{validate_product, CatalogService, ProductRejection, ValidProduct};
use storefront_core::{ChangeFrequency, Location, Priority, SitemapEntry};

/// Number of products requested from the catalog. There is no pagination.
pub const PRODUCT_FETCH_LIMIT: usize = 100;

/// Why a validated product could not be turned into an entry.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransformError {
    #[error("updated timestamp {0} is not representable")]
    TimestampOutOfRange(f64),
}

/// Why a single record produced no entry.
#[derive(Debug, Error, Clone, PartialEq)]
enum RecordFailure {
    #[error("invalid product record: {0}")]
    Invalid(#[from] ProductRejection),

    #[error("product could not be mapped: {0}")]
    Transform(#[from] TransformError),
}

/// Fetch the first [`PRODUCT_FETCH_LIMIT`] products and map the usable ones.
pub async fn product_entries(base: &Location, catalog: &dyn CatalogService) -> Vec<SitemapEntry> {
    let payload = match catalog.browse_products(PRODUCT_FETCH_LIMIT).await {
        Ok(payload) => payload,
        Err(e) => {
            tracing::error!(error = %e, "failed to fetch products for sitemap");
            return Vec::new();
        }
    };

    let entries = match payload.as_array() {
        Some(records) => map_records(base, records),
        None => {
            tracing::error!(
                kind = json_kind(&payload),
                "catalog returned a non-list payload; skipping products"
            );
            Vec::new()
        }
    };

    tracing::info!(count = entries.len(), "processed products for sitemap");
    entries
}

/// Validate and map each record independently, keeping fetch order.
pub fn map_records(base: &Location, records: &[JsonValue]) -> Vec<SitemapEntry> {
    records
        .iter()
        .enumerate()
        .filter_map(|(index, raw)| match map_record(base, raw) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(index, error = %e, "dropping product from sitemap");
                None
            }
        })
        .collect()
}

fn map_record(base: &Location, raw: &JsonValue) -> Result<SitemapEntry, RecordFailure> {
    let product = validate_product(raw)?;
    Ok(product_entry(base, &product)?)
}

/// Build the entry for a validated product.
pub fn product_entry(base: &Location, product: &ValidProduct) -> Result<SitemapEntry, TransformError> {
    let last_modified = unix_seconds_to_datetime(product.updated_secs())?;
    Ok(SitemapEntry::new(
        base.join("product", product.slug()),
        last_modified,
        ChangeFrequency::Daily,
        Priority::HIGH,
    ))
}

/// Seconds (possibly fractional) to a UTC instant, truncated to whole milliseconds.
///
/// chrono stops at year 262143 (about 8.2e15 ms), short of the ±8.64e15 ms a
/// JavaScript `Date` accepts, so timestamps between the two are rejected.
fn unix_seconds_to_datetime(secs: f64) -> Result<DateTime<Utc>, TransformError> {
    let millis = (secs * 1000.0).trunc();
    if !millis.is_finite() || millis < i64::MIN as f64 || millis > i64::MAX as f64 {
        return Err(TransformError::TimestampOutOfRange(secs));
    }

    DateTime::from_timestamp_millis(millis as i64).ok_or(TransformError::TimestampOutOfRange(secs))
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
