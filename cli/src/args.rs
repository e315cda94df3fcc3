use std::path::PathBuf;

use clap::Parser;

use appview_types::{EnvSlug, PRODUCTION_SLUG, PageRoute, RouteError};

#[derive(Debug, Parser)]
#[command(
    name = "appview",
    version,
    about = "Browse a dashboard's Apps page in the terminal"
)]
pub struct Cli {
    /// Apps route (`/env/<slug>/apps?archived=true`) or a bare environment slug.
    #[arg(default_value = PRODUCTION_SLUG)]
    pub target: String,

    /// Raw `archived` query value. Overrides the one in TARGET.
    #[arg(long, value_name = "VALUE")]
    pub archived: Option<String>,

    /// Dashboard snapshot JSON to read apps from.
    #[arg(long, value_name = "PATH")]
    pub snapshot: Option<PathBuf>,

    /// Config file to use instead of `~/.appview/config.toml`.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn route(&self) -> Result<PageRoute, RouteError> {
        let target = self.target.trim();
        let mut route = if target.contains('/') {
            PageRoute::parse(target)?
        } else {
            PageRoute::new(EnvSlug::new(target)?, None)
        };
        if let Some(raw) = &self.archived {
            route.archived = Some(raw.clone());
        }
        Ok(route)
    }
}
