//! # Site Configuration
//!
//! Optional `strata.yaml` at the site root. Absence means defaults;
//! a malformed file is a load-time error, never a silent fallback.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Name of the site configuration file.
pub const CONFIG_FILE: &str = "strata.yaml";

/// Site-level configuration for the CLI.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory holding one subdirectory per collection.
    pub content_dir: PathBuf,

    /// Directory holding image assets. When set, image references are
    /// checked against files under it; when absent, any non-empty
    /// reference is accepted.
    pub assets_dir: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            assets_dir: None,
        }
    }
}

impl SiteConfig {
    /// Load configuration from `strata.yaml` under the site root.
    ///
    /// Returns defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(site_root: &Path) -> Result<Self> {
        let path = site_root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("invalid site configuration in {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded site configuration");
        Ok(config)
    }
}
