use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{env, fs, io};

use serde::Deserialize;
use thiserror::Error;

use appview_types::ui::UiOptions;
use appview_types::{BaseUrlError, PathCreator};

/// Configuration loaded from `~/.appview/config.toml`.
///
/// ```toml
/// [app]
/// ascii_only = false
///
/// [dashboard]
/// base_url = "https://dashboard.example.com"
///
/// [source]
/// snapshot = "${HOME}/.appview/snapshot.json"
/// delay_ms = 250
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct AppViewConfig {
    pub app: Option<AppConfig>,
    pub dashboard: Option<DashboardConfig>,
    pub source: Option<SourceConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for icons and the skeleton shimmer.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable the loading shimmer.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct DashboardConfig {
    /// Origin that page links are resolved against. Links stay relative when unset.
    pub base_url: Option<String>,
    pub docs_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SourceConfig {
    /// Dashboard snapshot file. Supports `${VAR}` expansion.
    pub snapshot: Option<String>,
    /// Artificial latency for every query, in milliseconds.
    #[serde(default)]
    pub delay_ms: u64,
}

pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let var = &after[..end];
                if var.is_empty() {
                    out.push_str("${}");
                } else {
                    out.push_str(&env::var(var).unwrap_or_default());
                }
                rest = &after[end + 1..];
            }
            None => {
                // Unclosed reference stays literal.
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);

    out
}

impl AppViewConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    /// `Ok(None)` when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.app
            .as_ref()
            .map(|app| UiOptions {
                ascii_only: app.ascii_only,
                high_contrast: app.high_contrast,
                reduced_motion: app.reduced_motion,
            })
            .unwrap_or_default()
    }

    pub fn path_creator(&self) -> Result<PathCreator, BaseUrlError> {
        let mut paths = PathCreator::default();
        let Some(dashboard) = self.dashboard.as_ref() else {
            return Ok(paths);
        };
        if let Some(base) = dashboard.base_url.as_deref() {
            paths = paths.with_base(base)?;
        }
        if let Some(docs) = dashboard.docs_url.as_deref() {
            paths = paths.with_docs_url(docs);
        }
        Ok(paths)
    }

    /// Configured snapshot path, or `~/.appview/snapshot.json`.
    #[must_use]
    pub fn snapshot_path(&self) -> Option<PathBuf> {
        self.source
            .as_ref()
            .and_then(|source| source.snapshot.as_deref())
            .map(|raw| PathBuf::from(expand_env_vars(raw)))
            .or_else(default_snapshot_path)
    }

    #[must_use]
    pub fn query_delay(&self) -> Duration {
        Duration::from_millis(self.source.as_ref().map_or(0, |source| source.delay_ms))
    }
}

#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".appview"))
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

#[must_use]
pub fn default_snapshot_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("snapshot.json"))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::Duration;

    use super::{AppViewConfig, ConfigError, expand_env_vars};

    // expand_env_vars tests

    #[test]
    fn expand_env_vars_no_vars() {
        assert_eq!(expand_env_vars("hello world"), "hello world");
    }

    #[test]
    fn expand_env_vars_single_var() {
        unsafe {
            std::env::set_var("APPVIEW_TEST_SINGLE", "replaced");
        }
        assert_eq!(
            expand_env_vars("${APPVIEW_TEST_SINGLE}/snapshot.json"),
            "replaced/snapshot.json"
        );
    }

    #[test]
    fn expand_env_vars_missing_var_becomes_empty() {
        assert_eq!(expand_env_vars("a${APPVIEW_TEST_DEFINITELY_UNSET}b"), "ab");
    }

    #[test]
    fn expand_env_vars_unclosed_brace_preserved() {
        assert_eq!(expand_env_vars("path/${UNCLOSED"), "path/${UNCLOSED");
    }

    #[test]
    fn expand_env_vars_empty_var_name_preserved() {
        assert_eq!(expand_env_vars("x${}y"), "x${}y");
    }

    #[test]
    fn expand_env_vars_unicode_content() {
        unsafe {
            std::env::set_var("APPVIEW_TEST_UNICODE", "日本");
        }
        assert_eq!(expand_env_vars("→${APPVIEW_TEST_UNICODE}←"), "→日本←");
    }

    // loading tests

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = AppViewConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn full_config_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[app]
ascii_only = true
reduced_motion = true

[dashboard]
base_url = "https://dashboard.example.com"
docs_url = "https://docs.example.com/apps"

[source]
snapshot = "/tmp/snapshot.json"
delay_ms = 250
"#,
        )
        .unwrap();

        let config = AppViewConfig::load_from(&path).unwrap().unwrap();
        let ui = config.ui_options();
        assert!(ui.ascii_only);
        assert!(!ui.high_contrast);
        assert!(ui.reduced_motion);
        assert_eq!(config.query_delay(), Duration::from_millis(250));
        assert_eq!(
            config.snapshot_path(),
            Some(PathBuf::from("/tmp/snapshot.json"))
        );

        let paths = config.path_creator().unwrap();
        assert_eq!(paths.apps_docs(), "https://docs.example.com/apps");
        assert_eq!(
            paths.create_app(&appview_types::EnvSlug::production()),
            "https://dashboard.example.com/env/production/apps/sync-new"
        );
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: AppViewConfig = toml::from_str("").unwrap();
        assert_eq!(config.ui_options(), Default::default());
        assert_eq!(config.query_delay(), Duration::ZERO);
        assert_eq!(
            config.path_creator().unwrap(),
            appview_types::PathCreator::default()
        );
    }

    #[test]
    fn invalid_base_url_is_reported() {
        let config: AppViewConfig = toml::from_str("[dashboard]\nbase_url = \"::nope\"").unwrap();
        assert!(config.path_creator().is_err());
    }

    #[test]
    fn parse_error_carries_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "invalid toml [").unwrap();
        let err = AppViewConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(err.path(), path.as_path());
    }
}
