//! Activation parameters parsed from a dashboard route.

use thiserror::Error;
use url::Url;

use crate::{ArchivedFilter, EnvSlug, SlugError};

// Only used to resolve root-relative routes; never dereferenced.
const ROUTE_BASE: &str = "http://dashboard.invalid/";

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("malformed route {route:?}: {source}")]
    Malformed {
        route: String,
        #[source]
        source: url::ParseError,
    },
    #[error("{route:?} is not an apps route (expected /env/<slug>/apps)")]
    NotAppsRoute { route: String },
    #[error(transparent)]
    Slug(#[from] SlugError),
}

/// Environment slug plus the raw `archived` query value.
///
/// The raw value is kept as-is; [`PageRoute::archived_filter`] re-derives the
/// filter on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRoute {
    pub env: EnvSlug,
    pub archived: Option<String>,
}

impl PageRoute {
    #[must_use]
    pub fn new(env: EnvSlug, archived: Option<String>) -> Self {
        Self { env, archived }
    }

    /// Parse `/env/{slug}/apps[?archived=...]`. Absolute URLs are accepted too.
    pub fn parse(route: &str) -> Result<Self, RouteError> {
        let url = Url::parse(ROUTE_BASE)
            .and_then(|base| base.join(route.trim()))
            .map_err(|source| RouteError::Malformed {
                route: route.to_string(),
                source,
            })?;

        let segments: Vec<&str> = url
            .path_segments()
            .map(|segments| segments.filter(|s| !s.is_empty()).collect())
            .unwrap_or_default();
        let slug = match segments.as_slice() {
            ["env", slug, "apps"] => *slug,
            _ => {
                return Err(RouteError::NotAppsRoute {
                    route: route.to_string(),
                });
            }
        };

        let archived = url
            .query_pairs()
            .find(|(key, _)| key == "archived")
            .map(|(_, value)| value.into_owned());

        Ok(Self {
            env: EnvSlug::new(slug)?,
            archived,
        })
    }

    #[must_use]
    pub fn archived_filter(&self) -> ArchivedFilter {
        ArchivedFilter::from_query(self.archived.as_deref())
    }

    pub fn set_archived(&mut self, filter: ArchivedFilter) {
        self.archived = filter.as_query().map(str::to_string);
    }
}
