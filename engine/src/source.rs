//! Data-access seam for the Apps page.
//!
//! The page never talks to a transport directly; it asks an [`AppsSource`].
//! [`SnapshotSource`] serves a JSON dashboard snapshot from disk.

use std::collections::HashMap;
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use appview_types::{AppSummary, EnvSlug, PRODUCTION_SLUG, ProdApps};

/// Source query future type alias.
pub type SourceFut<'a, T> = Pin<Box<dyn Future<Output = Result<T, SourceError>> + Send + 'a>>;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read snapshot {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode snapshot {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("source unavailable: {0}")]
    Unavailable(String),
}

pub trait AppsSource: Send + Sync {
    /// Existence query for the active organization's production environment.
    ///
    /// `Ok(None)` means the query completed but produced no usable data.
    fn fetch_prod_apps(&self) -> SourceFut<'_, Option<ProdApps>>;

    /// Apps of one environment, for the listing.
    fn fetch_env_apps<'a>(&'a self, env: &'a EnvSlug) -> SourceFut<'a, Vec<AppSummary>>;
}

/// On-disk dashboard snapshot.
///
/// ```json
/// { "environments": { "production": { "apps": [], "unattachedSyncs": [] } } }
/// ```
#[derive(Debug, Default, Deserialize)]
struct DashboardSnapshot {
    #[serde(default)]
    environments: HashMap<String, Option<ProdApps>>,
}

/// Reads the snapshot file on every query, so edits show up on the next
/// page activation.
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    path: PathBuf,
    delay: Duration,
}

impl SnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delay: Duration::ZERO,
        }
    }

    /// Artificial latency applied before every query.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A top-level `null` decodes to `None`.
    async fn load(&self) -> Result<Option<DashboardSnapshot>, SourceError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })?;
        serde_json::from_slice(&bytes).map_err(|source| SourceError::Decode {
            path: self.path.clone(),
            source,
        })
    }
}

impl AppsSource for SnapshotSource {
    fn fetch_prod_apps(&self) -> SourceFut<'_, Option<ProdApps>> {
        Box::pin(async move {
            let snapshot = self.load().await?;
            Ok(snapshot
                .and_then(|mut snapshot| snapshot.environments.remove(PRODUCTION_SLUG).flatten()))
        })
    }

    fn fetch_env_apps<'a>(&'a self, env: &'a EnvSlug) -> SourceFut<'a, Vec<AppSummary>> {
        Box::pin(async move {
            let snapshot = self.load().await?;
            Ok(snapshot
                .and_then(|mut snapshot| snapshot.environments.remove(env.as_str()).flatten())
                .map(|env| env.apps)
                .unwrap_or_default())
        })
    }
}
