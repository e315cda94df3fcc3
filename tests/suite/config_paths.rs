//! Config file -> link construction -> composed plan.

use std::sync::Arc;

use appview_engine::{App, AppViewConfig, SnapshotSource};
use serde_json::json;

use crate::common::{dashboard, route, settle, write_snapshot};

fn write_config(contents: &str) -> (tempfile::TempDir, AppViewConfig) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, contents).unwrap();
    let config = AppViewConfig::load_from(&path).unwrap().unwrap();
    (dir, config)
}

#[tokio::test]
async fn configured_base_url_makes_links_absolute() {
    let (_cfg_dir, config) = write_config(
        r#"
[dashboard]
base_url = "https://app.example.com"
docs_url = "https://docs.example.com/apps"
"#,
    );
    let (_dir, path) = write_snapshot(&dashboard(json!({ "apps": [] })));
    let mut app = App::new(
        Arc::new(SnapshotSource::new(path)),
        config.path_creator().unwrap(),
        config.ui_options(),
    );
    app.navigate(route("production", None));
    settle(&mut app).await;

    let plan = app.plan().unwrap();
    let action = plan.header.action.unwrap();
    assert_eq!(
        action.href,
        "https://app.example.com/env/production/apps/sync-new"
    );
    assert_eq!(plan.header.info.link_href, "https://docs.example.com/apps");
}

#[test]
fn snapshot_path_from_config_expands_env_vars() {
    unsafe {
        std::env::set_var("APPVIEW_IT_SNAPSHOT_DIR", "/srv/dashboards");
    }
    let (_dir, config) = write_config(
        r#"
[source]
snapshot = "${APPVIEW_IT_SNAPSHOT_DIR}/acme.json"
delay_ms = 40
"#,
    );
    assert_eq!(
        config.snapshot_path().unwrap(),
        std::path::PathBuf::from("/srv/dashboards/acme.json")
    );
    assert_eq!(config.query_delay().as_millis(), 40);
}

#[test]
fn ui_flags_round_through_config() {
    let (_dir, config) = write_config("[app]\nhigh_contrast = true\n");
    let options = config.ui_options();
    assert!(options.high_contrast);
    assert!(!options.ascii_only);
    assert!(!options.reduced_motion);
}
