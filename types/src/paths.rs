//! Dashboard link construction.

use thiserror::Error;
use url::Url;

use crate::{ArchivedFilter, EnvSlug};

pub const DEFAULT_DOCS_URL: &str = "https://www.inngest.com/docs/apps";

#[derive(Debug, Error)]
#[error("invalid dashboard base URL {url:?}: {source}")]
pub struct BaseUrlError {
    url: String,
    #[source]
    source: url::ParseError,
}

/// Builds hrefs for dashboard pages.
///
/// Without a base URL the hrefs are root-relative paths; with one they are
/// resolved against its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathCreator {
    base: Option<Url>,
    docs_url: String,
}

impl Default for PathCreator {
    fn default() -> Self {
        Self {
            base: None,
            docs_url: DEFAULT_DOCS_URL.to_string(),
        }
    }
}

impl PathCreator {
    pub fn with_base(mut self, base: &str) -> Result<Self, BaseUrlError> {
        let url = Url::parse(base).map_err(|source| BaseUrlError {
            url: base.to_string(),
            source,
        })?;
        self.base = Some(url);
        Ok(self)
    }

    pub fn with_docs_url(mut self, docs_url: impl Into<String>) -> Self {
        self.docs_url = docs_url.into();
        self
    }

    #[must_use]
    pub fn apps(&self, env: &EnvSlug, archived: ArchivedFilter) -> String {
        let mut path = format!("/env/{env}/apps");
        if let Some(value) = archived.as_query() {
            path.push_str("?archived=");
            path.push_str(value);
        }
        self.href(&path)
    }

    #[must_use]
    pub fn create_app(&self, env: &EnvSlug) -> String {
        self.href(&format!("/env/{env}/apps/sync-new"))
    }

    #[must_use]
    pub fn apps_docs(&self) -> &str {
        &self.docs_url
    }

    fn href(&self, path: &str) -> String {
        match &self.base {
            Some(base) => base
                .join(path)
                .map(String::from)
                .unwrap_or_else(|_| path.to_string()),
            None => path.to_string(),
        }
    }
}
