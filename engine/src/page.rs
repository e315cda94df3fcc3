//! Per-activation state of the Apps page.
//!
//! An [`AppsPage`] lives exactly as long as one activation. Background tasks
//! report back with [`PageEvent`]s tagged by [`ActivationId`]; a page only
//! accepts events carrying its own id, so a late result from a discarded
//! activation can never touch a fresh one.

use appview_types::{
    ActivationId, AppSummary, ArchivedFilter, EnvSlug, PagePlan, PageRoute, PathCreator,
    RenderMode, ViewState, compose, select_mode,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEvent {
    pub activation: ActivationId,
    pub kind: PageEventKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEventKind {
    ExistenceSettled(ViewState),
    ListingLoaded(Result<Vec<AppSummary>, String>),
}

/// Whether an update took effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    Applied,
    Ignored,
}

/// Owned view-state cell of one activation.
///
/// Created loading; accepts exactly one resolved state.
#[derive(Debug, Default)]
pub struct ViewStateCell {
    state: ViewState,
}

impl ViewStateCell {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ViewState::LOADING,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> ViewState {
        self.state
    }

    pub fn resolve(&mut self, next: ViewState) -> Commit {
        if !self.state.is_loading || next.is_loading {
            return Commit::Ignored;
        }
        self.state = next;
        Commit::Applied
    }
}

/// Data behind the apps listing collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingState {
    Loading,
    Ready(Vec<AppSummary>),
    Failed(String),
}

impl ListingState {
    /// Apps matching the archived flag, or `None` while not ready.
    #[must_use]
    pub fn matching(&self, is_archived: bool) -> Option<Vec<&AppSummary>> {
        match self {
            ListingState::Ready(apps) => Some(
                apps.iter()
                    .filter(|app| app.archived == is_archived)
                    .collect(),
            ),
            ListingState::Loading | ListingState::Failed(_) => None,
        }
    }
}

#[derive(Debug)]
pub struct AppsPage {
    activation: ActivationId,
    route: PageRoute,
    view: ViewStateCell,
    listing: ListingState,
}

impl AppsPage {
    #[must_use]
    pub fn new(activation: ActivationId, route: PageRoute) -> Self {
        Self {
            activation,
            route,
            view: ViewStateCell::new(),
            listing: ListingState::Loading,
        }
    }

    #[must_use]
    pub fn activation(&self) -> ActivationId {
        self.activation
    }

    #[must_use]
    pub fn route(&self) -> &PageRoute {
        &self.route
    }

    #[must_use]
    pub fn env(&self) -> &EnvSlug {
        &self.route.env
    }

    /// Re-derived from the raw query value on every call.
    #[must_use]
    pub fn archived_filter(&self) -> ArchivedFilter {
        self.route.archived_filter()
    }

    pub fn set_archived(&mut self, filter: ArchivedFilter) {
        self.route.set_archived(filter);
    }

    #[must_use]
    pub fn view_state(&self) -> ViewState {
        self.view.snapshot()
    }

    #[must_use]
    pub fn listing(&self) -> &ListingState {
        &self.listing
    }

    #[must_use]
    pub fn mode(&self) -> RenderMode {
        select_mode(
            &self.route.env,
            self.archived_filter(),
            self.view.snapshot(),
        )
    }

    #[must_use]
    pub fn plan(&self, paths: &PathCreator) -> PagePlan {
        let archived = self.archived_filter();
        let mode = select_mode(&self.route.env, archived, self.view.snapshot());
        compose(mode, archived, &self.route.env, paths)
    }

    pub fn apply(&mut self, event: PageEvent) -> Commit {
        if event.activation != self.activation {
            return Commit::Ignored;
        }
        match event.kind {
            PageEventKind::ExistenceSettled(state) => self.view.resolve(state),
            PageEventKind::ListingLoaded(result) => {
                if !matches!(self.listing, ListingState::Loading) {
                    return Commit::Ignored;
                }
                self.listing = match result {
                    Ok(apps) => ListingState::Ready(apps),
                    Err(message) => ListingState::Failed(message),
                };
                Commit::Applied
            }
        }
    }
}
