use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;

use storefront_core::{ChangeFrequency, Location, Priority, SitemapEntry};

/// Entries for the configured categories, in configured order.
///
/// A record counts only if its `slug` is a non-empty string; anything else is
/// skipped without error.
pub fn category_entries(
    base: &Location,
    records: &[JsonValue],
    now: DateTime<Utc>,
) -> Vec<SitemapEntry> {
    records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| match category_slug(record) {
            Some(slug) => Some(SitemapEntry::new(
                base.join("category", slug),
                now,
                ChangeFrequency::Daily,
                Priority::MEDIUM,
            )),
            None => {
                tracing::debug!(index, "skipping category without a usable slug");
                None
            }
        })
        .collect()
}

fn category_slug(record: &JsonValue) -> Option<&str> {
    record
        .get("slug")
        .and_then(JsonValue::as_str)
        .filter(|slug| !slug.is_empty())
}
