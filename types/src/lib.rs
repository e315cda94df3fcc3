//! Core domain types for the Apps view.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! The engine, the TUI and the tests all build on it.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod apps;
mod env;
mod ids;
mod paths;
mod plan;
mod route;
pub mod ui;
mod view;

pub use apps::{AppSummary, ProdApps, UnattachedSync};
pub use env::{ArchivedFilter, EnvSlug, PRODUCTION_SLUG, SlugError};
pub use ids::ActivationId;
pub use paths::{BaseUrlError, DEFAULT_DOCS_URL, PathCreator};
pub use plan::{
    APPS_BREADCRUMB, APPS_INFO_LINK_LABEL, APPS_INFO_TEXT, AppsProps, BodyPlan, HeaderPlan,
    InfoPlan, PagePlan, SYNC_NEW_APP_LABEL, StatusMenuProps, SyncAction, compose,
    shows_sync_action,
};
pub use route::{PageRoute, RouteError};
pub use view::{RenderMode, ViewState, select_mode};
