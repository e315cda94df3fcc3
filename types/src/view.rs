//! View state and render-mode selection.

use crate::{ArchivedFilter, EnvSlug};

/// Result of the production-apps check as seen by the renderer.
///
/// Starts as [`ViewState::LOADING`] and transitions exactly once to a
/// resolved state per page activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub has_production_apps: bool,
    pub is_loading: bool,
}

impl ViewState {
    /// Optimistic initial state: onboarding is never shown while the check
    /// is still undetermined.
    pub const LOADING: Self = Self {
        has_production_apps: true,
        is_loading: true,
    };

    #[must_use]
    pub const fn resolved(has_production_apps: bool) -> Self {
        Self {
            has_production_apps,
            is_loading: false,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::LOADING
    }
}

/// What the page body shows. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Loading,
    Onboarding,
    Listing,
}

/// Map the page inputs to exactly one render mode.
///
/// Onboarding is production-only: any other environment lists apps even
/// when it has none. The archived filter never changes the mode, it only
/// affects the header action.
#[must_use]
pub fn select_mode(env: &EnvSlug, _archived: ArchivedFilter, view: ViewState) -> RenderMode {
    if view.is_loading {
        RenderMode::Loading
    } else if env.is_production() && !view.has_production_apps {
        RenderMode::Onboarding
    } else {
        RenderMode::Listing
    }
}
