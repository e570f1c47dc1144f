//! Configuration management
//!
//! Settings are merged from several sources, lowest priority first:
//!
//! 1. Hardcoded defaults
//! 2. `~/.config/parkour/config.toml` (user config, XDG)
//! 3. `{project root}/parkour.toml` (project config)
//! 4. Environment variables (`PARKOUR_` prefix, `__` for nesting)
//!
//! # Example Configuration
//!
//! ```toml
//! # parkour.toml
//! theme = "herdpress"
//! templates_dir = "./parkour-templates"
//! ```

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ParkourResult;

/// Project config file name, looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = "parkour.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "PARKOUR_";

/// parkour settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParkourConfig {
    /// Project root; the current directory when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_root: Option<PathBuf>,

    /// Project slug; the project root's directory name when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    /// Directory with template overrides (`block.json.hbs`, `callback.hbs`, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates_dir: Option<PathBuf>,
}

impl ParkourConfig {
    /// Settings that decide where the project root is: defaults, user config
    /// and environment. The project file cannot be read before the root is
    /// known.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file cannot be parsed or a value has the
    /// wrong type.
    pub fn load_global() -> ParkourResult<Self> {
        Ok(Self::figment(None).extract()?)
    }

    /// Full configuration for a project root.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file cannot be parsed or a value has the
    /// wrong type.
    pub fn load_for_project(project_root: &Path) -> ParkourResult<Self> {
        let mut config: Self = Self::figment(Some(project_root)).extract()?;

        // Relative override directories are relative to the project root
        if let Some(dir) = config.templates_dir.take() {
            config.templates_dir = Some(if dir.is_relative() {
                project_root.join(dir)
            } else {
                dir
            });
        }

        Ok(config)
    }

    /// Get the recommended XDG config path
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("parkour").join("config.toml"))
    }

    fn figment(project_root: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(user_config) = Self::user_config_path().filter(|p| p.exists()) {
            tracing::debug!(path = %user_config.display(), "loading user config");
            figment = figment.merge(Toml::file(user_config));
        }

        if let Some(root) = project_root {
            let project_config = root.join(PROJECT_CONFIG_FILE);
            if project_config.exists() {
                tracing::debug!(path = %project_config.display(), "loading project config");
                figment = figment.merge(Toml::file(project_config));
            }
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true))
    }
}
