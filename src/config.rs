// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Global configuration for the application, stored as TOML.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::constant::{CONFIG_DIR, CONFIG_FILE, MEDIA_AUTHORITY};

/// Global configuration for the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application used for "edit with". `None` = desktop default handler.
    pub external_editor: Option<String>,
    /// Content authority -> directory that backs `content://<authority>/...`.
    pub content_authorities: BTreeMap<String, PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let mut content_authorities = BTreeMap::new();
        if let Some(dir) = dirs::picture_dir().or_else(dirs::home_dir) {
            content_authorities.insert(MEDIA_AUTHORITY.to_string(), dir);
        }

        Self {
            external_editor: None,
            content_authorities,
        }
    }
}

impl AppConfig {
    /// Default location of the config file.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Parse a config file.
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }

    /// Load the config, falling back to defaults when the file is missing or broken.
    #[must_use]
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path.map(Path::to_path_buf).or_else(Self::default_path) else {
            return Self::default();
        };

        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::read(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring config: {e:#}");
                Self::default()
            }
        }
    }
}
