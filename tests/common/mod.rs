//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use appview_engine::{
    App, EnvSlug, ListingState, PageRoute, PathCreator, RenderMode, SnapshotSource, UiOptions,
};
use serde_json::{Value, json};
use tempfile::TempDir;

/// Write `snapshot` to `snapshot.json` inside a fresh temp dir.
pub fn write_snapshot(snapshot: &Value) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("snapshot.json");
    std::fs::write(&path, serde_json::to_vec_pretty(snapshot).expect("encode"))
        .expect("write snapshot");
    (dir, path)
}

pub fn app_json(id: &str, name: &str, archived: bool) -> Value {
    json!({
        "id": id,
        "name": name,
        "url": format!("https://{name}.example.com/api/inngest"),
        "archived": archived,
        "functionCount": 2,
        "lastSyncedAt": "2026-10-01T12:00:00Z",
    })
}

/// Snapshot with the given production entry and a two-app staging env.
pub fn dashboard(production: Value) -> Value {
    json!({
        "environments": {
            "production": production,
            "staging": {
                "apps": [app_json("s1", "checkout", false), app_json("s2", "legacy", true)],
            },
        }
    })
}

pub fn snapshot_app(path: PathBuf) -> App {
    App::new(
        Arc::new(SnapshotSource::new(path)),
        PathCreator::default(),
        UiOptions::default(),
    )
}

pub fn route(slug: &str, archived: Option<&str>) -> PageRoute {
    PageRoute::new(
        EnvSlug::new(slug).expect("valid slug"),
        archived.map(str::to_string),
    )
}

/// Tick `app` until both the existence check and the listing have landed, recording
/// every distinct render mode seen along the way.
pub async fn settle(app: &mut App) -> Vec<RenderMode> {
    let mut modes = Vec::new();
    for _ in 0..400 {
        app.tick();
        let page = app.page().expect("page is mounted");
        if modes.last() != Some(&page.mode()) {
            modes.push(page.mode());
        }
        if !page.view_state().is_loading && !matches!(page.listing(), ListingState::Loading) {
            return modes;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("page did not settle");
}
