//! Records returned by the dashboard data-access layer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub function_count: u32,
    #[serde(default)]
    pub last_synced_at: Option<String>,
}

/// A sync that has been recorded but not yet associated with an app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnattachedSync {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub last_synced_at: Option<String>,
}

/// Production-environment apps and orphaned syncs of the active organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProdApps {
    #[serde(default)]
    pub apps: Vec<AppSummary>,
    #[serde(default)]
    pub unattached_syncs: Vec<UnattachedSync>,
}

impl ProdApps {
    /// Unattached syncs count: an organization that has synced anything is
    /// past onboarding.
    #[must_use]
    pub fn has_apps_or_unattached_syncs(&self) -> bool {
        !self.apps.is_empty() || !self.unattached_syncs.is_empty()
    }
}
