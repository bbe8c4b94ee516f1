//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Sitemap entries and their attributes have no identity: two entries with the
/// same URL, timestamp, frequency and priority are the same entry. They are
/// built once per pipeline run and never modified afterwards; to "change" one,
/// build a new one.
///
/// The trait requires:
/// - **Clone**: values are copied into the output list
/// - **PartialEq**: values are compared by their attributes
/// - **Debug**: values show up in logs and test failures
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
