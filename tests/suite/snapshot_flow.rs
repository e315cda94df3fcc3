//! End-to-end page activations against on-disk dashboard snapshots.

use std::sync::Arc;
use std::time::Duration;

use appview_engine::{
    App, ArchivedFilter, BodyPlan, ListingState, PathCreator, RenderMode, SnapshotSource,
    UiOptions, ViewState,
};
use insta::assert_debug_snapshot;
use serde_json::json;

use crate::common::{app_json, dashboard, route, settle, snapshot_app, write_snapshot};

#[tokio::test]
async fn production_with_apps_goes_straight_to_listing() {
    let (_dir, path) = write_snapshot(&dashboard(json!({
        "apps": [app_json("p1", "shop", false)],
        "unattachedSyncs": [],
    })));
    let mut app = snapshot_app(path);
    app.navigate(route("production", None));

    let modes = settle(&mut app).await;
    assert_debug_snapshot!(modes, @r"
    [
        Loading,
        Listing,
    ]
    ");
}

#[tokio::test]
async fn empty_production_shows_onboarding() {
    let (_dir, path) = write_snapshot(&dashboard(json!({ "apps": [], "unattachedSyncs": [] })));
    let mut app = snapshot_app(path);
    app.navigate(route("production", None));

    let modes = settle(&mut app).await;
    assert_debug_snapshot!(modes, @r"
    [
        Loading,
        Onboarding,
    ]
    ");
    assert_eq!(app.plan().unwrap().body, BodyPlan::Onboarding);
}

#[tokio::test]
async fn unattached_syncs_alone_skip_onboarding() {
    let (_dir, path) = write_snapshot(&dashboard(json!({
        "apps": [],
        "unattachedSyncs": [{ "id": "sync-1", "url": "https://x.example.com/api/inngest" }],
    })));
    let mut app = snapshot_app(path);
    app.navigate(route("production", None));
    settle(&mut app).await;
    assert_eq!(app.page().unwrap().mode(), RenderMode::Listing);
}

#[tokio::test]
async fn null_production_entry_assumes_apps_exist() {
    let (_dir, path) = write_snapshot(&dashboard(json!(null)));
    let mut app = snapshot_app(path);
    app.navigate(route("production", None));
    settle(&mut app).await;
    assert_eq!(app.page().unwrap().view_state(), ViewState::resolved(true));
}

#[tokio::test]
async fn missing_production_entry_assumes_apps_exist() {
    let (_dir, path) = write_snapshot(&json!({ "environments": {} }));
    let mut app = snapshot_app(path);
    app.navigate(route("production", None));
    settle(&mut app).await;
    assert_eq!(app.page().unwrap().mode(), RenderMode::Listing);
}

#[tokio::test]
async fn unreadable_snapshot_falls_back_to_onboarding() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = snapshot_app(dir.path().join("does-not-exist.json"));
    app.navigate(route("production", None));

    let modes = settle(&mut app).await;
    assert_debug_snapshot!(modes, @r"
    [
        Loading,
        Onboarding,
    ]
    ");
    assert_eq!(app.page().unwrap().view_state(), ViewState::resolved(false));
}

#[tokio::test]
async fn malformed_snapshot_falls_back_to_onboarding() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    std::fs::write(&path, "{ \"environments\": ").unwrap();
    let mut app = snapshot_app(path);
    app.navigate(route("production", None));
    settle(&mut app).await;
    assert_eq!(app.page().unwrap().mode(), RenderMode::Onboarding);
    assert!(matches!(
        app.page().unwrap().listing(),
        ListingState::Failed(_)
    ));
}

#[tokio::test]
async fn non_production_env_lists_even_without_production_apps() {
    let (_dir, path) = write_snapshot(&dashboard(json!({ "apps": [] })));
    let mut app = snapshot_app(path);
    app.navigate(route("staging", None));
    settle(&mut app).await;

    let page = app.page().unwrap();
    assert_eq!(page.mode(), RenderMode::Listing);
    let active: Vec<&str> = page
        .listing()
        .matching(false)
        .unwrap()
        .iter()
        .map(|app| app.name.as_str())
        .collect();
    assert_eq!(active, ["checkout"]);
}

#[tokio::test]
async fn archived_toggle_switches_listing_without_requery() {
    let production = dashboard(json!({ "apps": [app_json("p", "shop", false)] }));
    let (_dir, path) = write_snapshot(&production);
    let mut app = snapshot_app(path.clone());
    app.navigate(route("staging", None));
    settle(&mut app).await;

    // Removing the snapshot proves the toggle does not hit the source again.
    std::fs::remove_file(&path).unwrap();
    app.toggle_archived();
    app.tick();

    let page = app.page().unwrap();
    assert_eq!(page.archived_filter(), ArchivedFilter::ARCHIVED);
    assert_eq!(page.mode(), RenderMode::Listing);
    let archived = page.listing().matching(true).unwrap();
    assert_eq!(archived.len(), 1);
    assert_eq!(archived[0].name, "legacy");
}

#[tokio::test]
async fn reload_picks_up_snapshot_edits() {
    let (_dir, path) = write_snapshot(&dashboard(json!({ "apps": [] })));
    let mut app = snapshot_app(path.clone());
    app.navigate(route("production", None));
    settle(&mut app).await;
    assert_eq!(app.page().unwrap().mode(), RenderMode::Onboarding);

    let with_apps = dashboard(json!({ "apps": [app_json("p", "shop", false)] }));
    std::fs::write(&path, serde_json::to_vec(&with_apps).unwrap()).unwrap();
    app.reload();
    let modes = settle(&mut app).await;
    assert_debug_snapshot!(modes, @r"
    [
        Loading,
        Listing,
    ]
    ");
}

#[tokio::test]
async fn slow_source_stays_loading_until_it_answers() {
    let (_dir, path) = write_snapshot(&dashboard(json!({ "apps": [] })));
    let source = SnapshotSource::new(path).with_delay(Duration::from_millis(60));
    let mut app = App::new(
        Arc::new(source),
        PathCreator::default(),
        UiOptions::default(),
    );
    app.navigate(route("production", Some("true")));

    tokio::time::sleep(Duration::from_millis(10)).await;
    app.tick();
    assert_eq!(app.page().unwrap().mode(), RenderMode::Loading);
    assert_eq!(app.plan().unwrap().body, BodyPlan::Skeleton);

    settle(&mut app).await;
    assert_eq!(app.page().unwrap().mode(), RenderMode::Onboarding);
}

#[tokio::test]
async fn navigating_away_drops_pending_results() {
    let (_dir, path) = write_snapshot(&dashboard(json!({ "apps": [] })));
    let source = SnapshotSource::new(path).with_delay(Duration::from_millis(30));
    let mut app = App::new(
        Arc::new(source),
        PathCreator::default(),
        UiOptions::default(),
    );

    let first = app.navigate(route("production", None));
    let second = app.navigate(route("staging", None));
    assert!(second > first);

    settle(&mut app).await;
    let page = app.page().unwrap();
    assert_eq!(page.activation(), second);
    assert_eq!(page.env().as_str(), "staging");
    assert_eq!(page.mode(), RenderMode::Listing);
}
