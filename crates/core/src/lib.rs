//! `storefront-core` — sitemap data model building blocks.
//!
//! This crate contains **pure** primitives (no IO, no HTTP, no clock access).

pub mod entry;
pub mod error;
pub mod value_object;

pub use entry::{ChangeFrequency, Location, Priority, SitemapEntry};
pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
