//! Validation of raw catalog product records.
//!
//! Records come straight off the wire and are only *nominally* shaped like
//! `{ "metadata": { "slug": "..." }, "updated": 1700000000 }`. Validation never
//! panics: every shape problem is reported as a [`ProductRejection`].

use serde_json::Value as JsonValue;
use thiserror::Error;

/// Why a raw product record was not accepted.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ProductRejection {
    #[error("record is not an object")]
    NotAnObject,

    #[error("record has no metadata object")]
    MissingMetadata,

    #[error("metadata.slug is missing or not a string")]
    MissingSlug,

    #[error("metadata.slug is blank")]
    BlankSlug,

    #[error("updated is missing or not a number")]
    MissingUpdated,
}

/// A product record that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidProduct {
    slug: String,
    updated: f64,
}

impl ValidProduct {
    /// The slug exactly as received (validated to be non-blank once trimmed).
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Last update, in Unix seconds (may be fractional).
    pub fn updated_secs(&self) -> f64 {
        self.updated
    }
}

/// Check a raw product record and extract the fields the sitemap needs.
///
/// A record is valid iff it is an object, carries a `metadata` object whose
/// `slug` is a string that is non-empty after trimming, and has a numeric
/// `updated` field.
pub fn validate_product(raw: &JsonValue) -> Result<ValidProduct, ProductRejection> {
    let record = raw.as_object().ok_or(ProductRejection::NotAnObject)?;

    let metadata = record
        .get("metadata")
        .and_then(JsonValue::as_object)
        .ok_or(ProductRejection::MissingMetadata)?;

    let slug = metadata
        .get("slug")
        .and_then(JsonValue::as_str)
        .ok_or(ProductRejection::MissingSlug)?;
    if slug.trim().is_empty() {
        return Err(ProductRejection::BlankSlug);
    }

    let updated = record
        .get("updated")
        .and_then(JsonValue::as_f64)
        .ok_or(ProductRejection::MissingUpdated)?;

    Ok(ValidProduct {
        slug: slug.to_string(),
        updated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn well_formed_record_is_accepted() {
        let raw = json!({ "metadata": { "slug": "blue-mug" }, "updated": 1700000000 });
        let product = validate_product(&raw).unwrap();
        assert_eq!(product.slug(), "blue-mug");
        assert_eq!(product.updated_secs(), 1_700_000_000.0);
    }

    #[test]
    fn extra_fields_are_ignored() {
        let raw = json!({
            "id": "prod_1",
            "name": "Mug",
            "metadata": { "slug": "mug", "color": "blue" },
            "updated": 1.5,
        });
        assert!(validate_product(&raw).is_ok());
    }

    #[test]
    fn null_and_scalars_are_not_objects() {
        assert_eq!(validate_product(&JsonValue::Null), Err(ProductRejection::NotAnObject));
        assert_eq!(validate_product(&json!(42)), Err(ProductRejection::NotAnObject));
        assert_eq!(validate_product(&json!([1, 2])), Err(ProductRejection::NotAnObject));
    }

    #[test]
    fn metadata_must_be_an_object() {
        let missing = json!({ "updated": 1 });
        let wrong = json!({ "metadata": "mug", "updated": 1 });
        let null = json!({ "metadata": null, "updated": 1 });
        for raw in [missing, wrong, null] {
            assert_eq!(validate_product(&raw), Err(ProductRejection::MissingMetadata));
        }
    }

    #[test]
    fn slug_must_be_a_string() {
        let missing = json!({ "metadata": {}, "updated": 1 });
        let number = json!({ "metadata": { "slug": 7 }, "updated": 1 });
        for raw in [missing, number] {
            assert_eq!(validate_product(&raw), Err(ProductRejection::MissingSlug));
        }
    }

    #[test]
    fn whitespace_slug_is_blank() {
        let raw = json!({ "metadata": { "slug": "  \t" }, "updated": 1 });
        assert_eq!(validate_product(&raw), Err(ProductRejection::BlankSlug));
    }

    #[test]
    fn slug_is_kept_untrimmed() {
        let raw = json!({ "metadata": { "slug": " mug " }, "updated": 1 });
        assert_eq!(validate_product(&raw).unwrap().slug(), " mug ");
    }

    #[test]
    fn updated_must_be_numeric() {
        let missing = json!({ "metadata": { "slug": "mug" } });
        let string = json!({ "metadata": { "slug": "mug" }, "updated": "1700000000" });
        for raw in [missing, string] {
            assert_eq!(validate_product(&raw), Err(ProductRejection::MissingUpdated));
        }
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: validation never panics, whatever the record shape.
            #[test]
            fn validation_is_total(
                slug in proptest::option::of(".{0,12}"),
                updated in proptest::option::of(any::<i64>()),
                metadata_is_object in any::<bool>(),
            ) {
                let metadata = if metadata_is_object {
                    match &slug {
                        Some(s) => json!({ "slug": s }),
                        None => json!({}),
                    }
                } else {
                    json!(slug.clone())
                };
                let raw = json!({ "metadata": metadata, "updated": updated });

                let result = validate_product(&raw);
                let expect_ok = metadata_is_object
                    && slug.as_deref().is_some_and(|s| !s.trim().is_empty())
                    && updated.is_some();
                prop_assert_eq!(result.is_ok(), expect_ok);
            }
        }
    }
}
