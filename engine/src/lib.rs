//! Core engine for the Apps view - page state machine and orchestration.
//!
//! This crate contains the [`App`] host without TUI dependencies. The host
//! owns at most one [`AppsPage`] activation at a time, runs the background
//! queries for it on the tokio runtime, and routes their results back.
//!
//! ```text
//! navigate(route) -> new ActivationId -> spawn existence + listing tasks
//!                                             |
//!                       PageEvent { activation, kind } over mpsc
//!                                             v
//! tick() -> process_page_events() -> page.apply(event) iff ids match
//! ```

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt;
use tokio::sync::mpsc;

pub use appview_types::{
    ActivationId, AppSummary, ArchivedFilter, BodyPlan, EnvSlug, PagePlan, PageRoute, PathCreator,
    RenderMode, ViewState, ui::UiOptions,
};

mod config;
mod page;
mod existence;
mod source;

pub use config::{
    AppConfig, AppViewConfig, ConfigError, DashboardConfig, SourceConfig, config_dir, config_path,
    default_snapshot_path, expand_env_vars,
};
pub use page::{AppsPage, Commit, ListingState, PageEvent, PageEventKind, ViewStateCell};
pub use existence::check_production_apps;
pub use source::{AppsSource, SnapshotSource, SourceError, SourceFut};

pub struct App {
    source: Arc<dyn AppsSource>,
    paths: PathCreator,
    ui_options: UiOptions,
    /// The live activation, if the page is mounted.
    page: Option<AppsPage>,
    last_activation: ActivationId,
    events_tx: mpsc::UnboundedSender<PageEvent>,
    events_rx: mpsc::UnboundedReceiver<PageEvent>,
    status_message: Option<String>,
    should_quit: bool,
    tick: usize,
}

impl App {
    pub fn new(source: Arc<dyn AppsSource>, paths: PathCreator, ui_options: UiOptions) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            source,
            paths,
            ui_options,
            page: None,
            last_activation: ActivationId::new(0),
            events_tx,
            events_rx,
            status_message: None,
            should_quit: false,
            tick: 0,
        }
    }

    /// Mount the page for `route`.
    ///
    /// Any previous activation is discarded first. The new activation starts
    /// loading and spawns exactly one existence check; must be called inside a
    /// tokio runtime.
    pub fn navigate(&mut self, route: PageRoute) -> ActivationId {
        self.deactivate();

        let activation = self.last_activation.next();
        self.last_activation = activation;
        tracing::info!(
            %activation,
            env = %route.env,
            archived = ?route.archived,
            "Activating apps page"
        );

        self.spawn_existence_check(activation);
        self.spawn_listing(activation, route.env.clone());
        self.page = Some(AppsPage::new(activation, route));
        self.clear_status();
        activation
    }

    /// Remount the current route with a fresh activation.
    pub fn reload(&mut self) -> Option<ActivationId> {
        let route = self.page.as_ref()?.route().clone();
        Some(self.navigate(route))
    }

    /// Unmount the page. In-flight results for it become no-ops.
    pub fn deactivate(&mut self) {
        if let Some(page) = self.page.take() {
            tracing::debug!(activation = %page.activation(), "Deactivating apps page");
        }
    }

    fn spawn_existence_check(&self, activation: ActivationId) {
        let source = Arc::clone(&self.source);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let state = check_production_apps(source.as_ref()).await;
            let _ = tx.send(PageEvent {
                activation,
                kind: PageEventKind::ExistenceSettled(state),
            });
        });
    }

    fn spawn_listing(&self, activation: ActivationId, env: EnvSlug) {
        let source = Arc::clone(&self.source);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let fetched = AssertUnwindSafe(async { source.fetch_env_apps(&env).await })
                .catch_unwind()
                .await;
            let result = match fetched {
                Ok(Ok(apps)) => Ok(apps),
                Ok(Err(err)) => {
                    tracing::warn!(error = %err, %env, "Failed to load apps listing");
                    Err(err.to_string())
                }
                Err(_) => {
                    tracing::error!(%env, "Apps listing query panicked");
                    Err("apps listing query panicked".to_string())
                }
            };
            let _ = tx.send(PageEvent {
                activation,
                kind: PageEventKind::ListingLoaded(result),
            });
        });
    }

    /// Apply results that arrived since the last call. Non-blocking.
    pub fn process_page_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            let Some(page) = self
                .page
                .as_mut()
                .filter(|page| page.activation() == event.activation)
            else {
                tracing::debug!(
                    activation = %event.activation,
                    "Discarding result for inactive page"
                );
                continue;
            };

            let settled = matches!(event.kind, PageEventKind::ExistenceSettled(_));
            if page.apply(event) == Commit::Applied && settled {
                tracing::info!(
                    activation = %page.activation(),
                    view = ?page.view_state(),
                    mode = ?page.mode(),
                    "Apps page resolved"
                );
            }
        }
    }

    /// Increment animation tick and poll background tasks.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.process_page_events();
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.tick
    }

    #[must_use]
    pub fn page(&self) -> Option<&AppsPage> {
        self.page.as_ref()
    }

    #[must_use]
    pub fn plan(&self) -> Option<PagePlan> {
        self.page.as_ref().map(|page| page.plan(&self.paths))
    }

    /// Change the archived filter. Never re-runs the existence check.
    pub fn set_archived(&mut self, filter: ArchivedFilter) {
        if let Some(page) = self.page.as_mut() {
            page.set_archived(filter);
            tracing::debug!(archived = filter.is_archived(), "Archived filter changed");
        }
    }

    pub fn toggle_archived(&mut self) {
        if let Some(filter) = self.page.as_ref().map(AppsPage::archived_filter) {
            self.set_archived(filter.toggled());
        }
    }

    /// Surface the sync-new-app link, if the header currently offers it.
    pub fn request_sync_new_app(&mut self) {
        let Some(plan) = self.plan() else {
            self.set_status("No page is open");
            return;
        };
        match plan.header.action {
            Some(action) => self.set_status(format!("{}: {}", action.label, action.href)),
            None => self.set_status("Syncing is not available from the archived view"),
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    #[must_use]
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
