//! The full decision table: environment x archived filter x view state.

use appview_types::{
    ArchivedFilter, BodyPlan, EnvSlug, PageRoute, PathCreator, ViewState, compose, select_mode,
};
use insta::assert_debug_snapshot;

fn view_label(view: ViewState) -> &'static str {
    match (view.is_loading, view.has_production_apps) {
        (true, _) => "loading",
        (false, true) => "has-apps",
        (false, false) => "no-apps",
    }
}

#[test]
fn decision_table() {
    let envs = [EnvSlug::production(), EnvSlug::new("staging").unwrap()];
    let filters = [ArchivedFilter::ACTIVE, ArchivedFilter::ARCHIVED];
    let views = [
        ViewState::LOADING,
        ViewState::resolved(true),
        ViewState::resolved(false),
    ];
    let paths = PathCreator::default();

    let mut rows = Vec::new();
    for env in &envs {
        for filter in filters {
            for view in views {
                let mode = select_mode(env, filter, view);
                let plan = compose(mode, filter, env, &paths);
                let kind = if filter.is_archived() {
                    "archived"
                } else {
                    "active"
                };
                let sync = if plan.header.action.is_some() {
                    " +sync"
                } else {
                    ""
                };
                rows.push(format!(
                    "{env} {kind} {} -> {mode:?}{sync}",
                    view_label(view)
                ));
            }
        }
    }

    assert_debug_snapshot!(rows, @r#"
    [
        "production active loading -> Loading +sync",
        "production active has-apps -> Listing +sync",
        "production active no-apps -> Onboarding +sync",
        "production archived loading -> Loading",
        "production archived has-apps -> Listing",
        "production archived no-apps -> Onboarding +sync",
        "staging active loading -> Loading +sync",
        "staging active has-apps -> Listing +sync",
        "staging active no-apps -> Listing +sync",
        "staging archived loading -> Loading",
        "staging archived has-apps -> Listing",
        "staging archived no-apps -> Listing",
    ]
    "#);
}

#[test]
fn loading_ignores_the_existence_flag() {
    let env = EnvSlug::production();
    for has_production_apps in [true, false] {
        let view = ViewState {
            has_production_apps,
            is_loading: true,
        };
        let mode = select_mode(&env, ArchivedFilter::ACTIVE, view);
        let plan = compose(mode, ArchivedFilter::ACTIVE, &env, &PathCreator::default());
        assert_eq!(plan.body, BodyPlan::Skeleton);
    }
}

#[test]
fn routed_query_drives_the_listing_props() {
    let paths = PathCreator::default();
    for (raw, archived) in [
        ("/env/staging/apps", false),
        ("/env/staging/apps?archived=true", true),
        ("/env/staging/apps?archived=false", false),
        ("/env/staging/apps?archived=1", false),
        ("/env/staging/apps?archived=True", false),
    ] {
        let route = PageRoute::parse(raw).unwrap();
        let filter = route.archived_filter();
        let mode = select_mode(&route.env, filter, ViewState::resolved(true));
        let plan = compose(mode, filter, &route.env, &paths);

        let BodyPlan::Listing { status_menu, apps } = plan.body else {
            panic!("{raw}: expected listing");
        };
        assert_eq!(status_menu.archived, archived, "{raw}");
        assert_eq!(apps.is_archived, archived, "{raw}");
        assert_eq!(status_menu.active_href, "/env/staging/apps");
        assert_eq!(status_menu.archived_href, "/env/staging/apps?archived=true");
    }
}
