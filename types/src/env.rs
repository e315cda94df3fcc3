//! Environment identity and the archived-listing filter.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reserved slug of an organization's production environment.
pub const PRODUCTION_SLUG: &str = "production";

/// Opaque slug identifying the environment a page is rendered for.
///
/// Slugs are path segments, so they are restricted to ASCII alphanumerics,
/// `-` and `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EnvSlug(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlugError {
    #[error("environment slug must not be empty")]
    Empty,
    #[error("environment slug {slug:?} contains invalid character {ch:?}")]
    InvalidChar { slug: String, ch: char },
}

impl EnvSlug {
    pub fn new(value: impl Into<String>) -> Result<Self, SlugError> {
        let value = value.into();
        if value.is_empty() {
            return Err(SlugError::Empty);
        }
        if let Some(ch) = value
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_')))
        {
            return Err(SlugError::InvalidChar { slug: value, ch });
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn production() -> Self {
        Self(PRODUCTION_SLUG.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_production(&self) -> bool {
        self.0 == PRODUCTION_SLUG
    }
}

impl TryFrom<String> for EnvSlug {
    type Error = SlugError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for EnvSlug {
    type Error = SlugError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EnvSlug> for String {
    fn from(value: EnvSlug) -> Self {
        value.0
    }
}

impl AsRef<str> for EnvSlug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EnvSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether the page lists archived apps instead of active ones.
///
/// Always derived from the raw `archived` query value; never stored apart
/// from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArchivedFilter(bool);

impl ArchivedFilter {
    pub const ACTIVE: Self = Self(false);
    pub const ARCHIVED: Self = Self(true);

    /// Only the exact literal `"true"` selects the archived view.
    #[must_use]
    pub fn from_query(raw: Option<&str>) -> Self {
        Self(raw == Some("true"))
    }

    #[must_use]
    pub const fn is_archived(self) -> bool {
        self.0
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        Self(!self.0)
    }

    /// Query value that round-trips through [`ArchivedFilter::from_query`].
    #[must_use]
    pub const fn as_query(self) -> Option<&'static str> {
        if self.0 { Some("true") } else { None }
    }
}

impl From<bool> for ArchivedFilter {
    fn from(value: bool) -> Self {
        Self(value)
    }
}
