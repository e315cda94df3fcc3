//! Page composition: which collaborators the Apps page shows, and with what
//! props, for a given render mode.
//!
//! [`compose`] is a pure function of its inputs. The renderer draws the
//! resulting [`PagePlan`] and owns no state of its own.

use crate::{ArchivedFilter, EnvSlug, PathCreator, RenderMode};

pub const APPS_BREADCRUMB: &str = "Apps";
pub const APPS_INFO_TEXT: &str = "Apps map directly to your products or services.";
pub const APPS_INFO_LINK_LABEL: &str = "Learn how apps work";
pub const SYNC_NEW_APP_LABEL: &str = "Sync new app";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagePlan {
    pub mode: RenderMode,
    pub header: HeaderPlan,
    pub body: BodyPlan,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderPlan {
    pub breadcrumb: &'static str,
    pub info: InfoPlan,
    pub action: Option<SyncAction>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoPlan {
    pub text: &'static str,
    pub link_label: &'static str,
    pub link_href: String,
}

/// The primary "sync new app" header button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncAction {
    pub label: &'static str,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyPlan {
    /// Placeholder skeleton; nothing interactive.
    Skeleton,
    /// Empty-state onboarding card followed by the FAQ.
    Onboarding,
    Listing {
        status_menu: StatusMenuProps,
        apps: AppsProps,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMenuProps {
    pub archived: bool,
    pub env: EnvSlug,
    pub active_href: String,
    pub archived_href: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppsProps {
    pub is_archived: bool,
}

/// The sync action is hidden on the archived view, except when onboarding
/// still has to surface it.
#[must_use]
pub fn shows_sync_action(mode: RenderMode, archived: ArchivedFilter) -> bool {
    !archived.is_archived() || mode == RenderMode::Onboarding
}

#[must_use]
pub fn compose(
    mode: RenderMode,
    archived: ArchivedFilter,
    env: &EnvSlug,
    paths: &PathCreator,
) -> PagePlan {
    let action = shows_sync_action(mode, archived).then(|| SyncAction {
        label: SYNC_NEW_APP_LABEL,
        href: paths.create_app(env),
    });

    let header = HeaderPlan {
        breadcrumb: APPS_BREADCRUMB,
        info: InfoPlan {
            text: APPS_INFO_TEXT,
            link_label: APPS_INFO_LINK_LABEL,
            link_href: paths.apps_docs().to_string(),
        },
        action,
    };

    let body = match mode {
        RenderMode::Loading => BodyPlan::Skeleton,
        RenderMode::Onboarding => BodyPlan::Onboarding,
        RenderMode::Listing => BodyPlan::Listing {
            status_menu: StatusMenuProps {
                archived: archived.is_archived(),
                env: env.clone(),
                active_href: paths.apps(env, ArchivedFilter::ACTIVE),
                archived_href: paths.apps(env, ArchivedFilter::ARCHIVED),
            },
            apps: AppsProps {
                is_archived: archived.is_archived(),
            },
        },
    };

    PagePlan { mode, header, body }
}
