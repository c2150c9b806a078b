pub mod defaults;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LarderError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LarderConfig {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub paths: PathsSection,
    #[serde(default)]
    pub server: ServerSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSection {
    /// Appended to every page `<title>` as ` - {name}`.
    #[serde(default = "defaults::site_name")]
    pub name: String,
    #[serde(default)]
    pub author: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            name: defaults::site_name(),
            author: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsSection {
    #[serde(default = "defaults::recipes_dir")]
    pub recipes_dir: String,
    #[serde(default = "defaults::index_file")]
    pub index_file: String,
}

impl Default for PathsSection {
    fn default() -> Self {
        Self {
            recipes_dir: defaults::recipes_dir(),
            index_file: defaults::index_file(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    #[serde(default = "defaults::port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            port: defaults::port(),
        }
    }
}

/// Resolved absolute paths for the recipe directory and index file.
#[derive(Debug, Clone)]
pub struct ResolvedPaths {
    pub root: PathBuf,
    pub recipes: PathBuf,
    pub index: PathBuf,
}

impl LarderConfig {
    /// Load config from a `larder.toml` file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LarderError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = std::fs::read_to_string(path)?;
        let config: LarderConfig =
            toml::from_str(&contents).map_err(|e| LarderError::ConfigInvalid {
                message: e.to_string(),
            })?;
        Ok(config)
    }

    /// Load an explicitly requested config file, or fall back to `larder.toml`
    /// in `root` when present, or to built-in defaults when it is not.
    pub fn discover(explicit: Option<&Path>, root: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let conventional = root.join(defaults::CONFIG_FILE);
        if conventional.exists() {
            Self::load(&conventional)
        } else {
            tracing::debug!("no {} found, using defaults", defaults::CONFIG_FILE);
            Ok(Self::default())
        }
    }

    /// Resolve the recipe directory and index file relative to the project root.
    pub fn resolve_paths(&self, project_root: &Path) -> ResolvedPaths {
        ResolvedPaths {
            root: project_root.to_path_buf(),
            recipes: project_root.join(&self.paths.recipes_dir),
            index: project_root.join(&self.paths.index_file),
        }
    }
}
