//! Production-apps existence check.

use std::panic::AssertUnwindSafe;

use futures_util::FutureExt;

use appview_types::ViewState;

use crate::source::AppsSource;

/// Run the existence query once and fold every outcome into a resolved
/// [`ViewState`]. Never fails and never leaves the state loading.
///
/// - usable result: apps exist iff there is at least one app or unattached sync
/// - absent result: assume apps exist
/// - query failure (error or panic): assume no apps
pub async fn check_production_apps(source: &dyn AppsSource) -> ViewState {
    let outcome = AssertUnwindSafe(async { source.fetch_prod_apps().await })
        .catch_unwind()
        .await;

    match outcome {
        Ok(Ok(Some(result))) => {
            let has_apps = result.has_apps_or_unattached_syncs();
            tracing::debug!(
                apps = result.apps.len(),
                unattached_syncs = result.unattached_syncs.len(),
                "Production apps check resolved"
            );
            ViewState::resolved(has_apps)
        }
        Ok(Ok(None)) => {
            tracing::warn!("Production apps query returned no data; assuming apps exist");
            ViewState::resolved(true)
        }
        Ok(Err(err)) => {
            tracing::error!(error = %err, "Error fetching production apps");
            ViewState::resolved(false)
        }
        Err(_) => {
            tracing::error!("Production apps query panicked");
            ViewState::resolved(false)
        }
    }
}
