use chrono::{DateTime, Utc};

use storefront_core::{ChangeFrequency, Location, Priority, SitemapEntry};

/// The site root: always present, always first.
pub fn root_entry(base: &Location, now: DateTime<Utc>) -> SitemapEntry {
    SitemapEntry::new(base.clone(), now, ChangeFrequency::Always, Priority::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_points_at_base_url() {
        let base = Location::parse("https://shop.example").unwrap();
        let now = Utc::now();

        let entry = root_entry(&base, now);
        assert_eq!(entry.url(), "https://shop.example");
        assert_eq!(entry.last_modified(), now);
        assert_eq!(entry.change_frequency(), ChangeFrequency::Always);
        assert_eq!(entry.priority(), Priority::MAX);
    }
}
