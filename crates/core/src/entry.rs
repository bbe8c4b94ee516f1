use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// How frequently the page at a URL is likely to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    /// Lowercase token used by the sitemap wire format.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

impl core::fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeFrequency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "always" => Ok(ChangeFrequency::Always),
            "hourly" => Ok(ChangeFrequency::Hourly),
            "daily" => Ok(ChangeFrequency::Daily),
            "weekly" => Ok(ChangeFrequency::Weekly),
            "monthly" => Ok(ChangeFrequency::Monthly),
            "yearly" => Ok(ChangeFrequency::Yearly),
            "never" => Ok(ChangeFrequency::Never),
            other => Err(DomainError::validation(format!(
                "unknown change frequency: {other}"
            ))),
        }
    }
}

impl ValueObject for ChangeFrequency {}

/// Relative importance of a URL within the site, in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Priority(f32);

impl Priority {
    pub const MEDIUM: Priority = Priority(0.5);
    pub const HIGH: Priority = Priority(0.8);
    pub const MAX: Priority = Priority(1.0);

    pub fn new(value: f32) -> DomainResult<Self> {
        if !(0.0..=1.0).contains(&value) {
            // NaN fails `contains` too.
            return Err(DomainError::validation(format!(
                "priority must be within [0.0, 1.0], got {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

impl TryFrom<f32> for Priority {
    type Error = DomainError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Priority::new(value)
    }
}

impl From<Priority> for f32 {
    fn from(p: Priority) -> Self {
        p.0
    }
}

impl core::fmt::Display for Priority {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl ValueObject for Priority {}

/// Absolute URL of a page; never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Location(String);

impl Location {
    pub fn parse(url: impl Into<String>) -> DomainResult<Self> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(DomainError::validation("url cannot be empty"));
        }
        Ok(Self(url))
    }

    /// `{self}/{section}/{slug}`, e.g. `https://shop.example/category/shoes`.
    pub fn join(&self, section: &str, slug: &str) -> Location {
        Location(format!("{}/{}/{}", self.0, section, slug))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Location {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Location::parse(value)
    }
}

impl From<Location> for String {
    fn from(loc: Location) -> Self {
        loc.0
    }
}

impl core::fmt::Display for Location {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl ValueObject for Location {}

/// One URL in the sitemap.
///
/// Entries are built fresh on every pipeline run and are immutable once
/// constructed: fields are private and only exposed through getters.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    url: Location,
    last_modified: DateTime<Utc>,
    change_frequency: ChangeFrequency,
    priority: Priority,
}

impl SitemapEntry {
    pub fn new(
        url: Location,
        last_modified: DateTime<Utc>,
        change_frequency: ChangeFrequency,
        priority: Priority,
    ) -> Self {
        Self {
            url,
            last_modified,
            change_frequency,
            priority,
        }
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    pub fn last_modified(&self) -> DateTime<Utc> {
        self.last_modified
    }

    pub fn change_frequency(&self) -> ChangeFrequency {
        self.change_frequency
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }
}

impl ValueObject for SitemapEntry {}
