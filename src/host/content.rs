// SPDX-License-Identifier: GPL-3.0-or-later
// src/host/content.rs
//
// Content URI resolution through configured authority roots.

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

use super::PathResolver;
use crate::config::AppConfig;
use crate::domain::uri::{Scheme, Uri};

/// Resolves `content://<authority>/<rel>` to `<root>/<rel>`.
#[derive(Debug, Clone, Default)]
pub struct AuthorityResolver {
    roots: BTreeMap<String, PathBuf>,
}

impl AuthorityResolver {
    pub fn new(roots: BTreeMap<String, PathBuf>) -> Self {
        Self { roots }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.content_authorities.clone())
    }

    pub fn with_root(mut self, authority: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        self.roots.insert(authority.into(), root.into());
        self
    }
}

impl PathResolver for AuthorityResolver {
    fn real_path(&self, uri: &Uri) -> Option<PathBuf> {
        if uri.scheme() != &Scheme::Content {
            return None;
        }

        let Some(root) = self.roots.get(uri.authority()) else {
            log::debug!("No root for content authority {:?}", uri.authority());
            return None;
        };

        let relative = Path::new(uri.path().trim_start_matches('/'));
        if relative.as_os_str().is_empty() {
            return None;
        }
        if !relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
        {
            log::warn!("Refusing to resolve {uri}: path leaves the content root");
            return None;
        }

        Some(root.join(relative))
    }
}
