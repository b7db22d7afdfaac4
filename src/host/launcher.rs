// SPDX-License-Identifier: GPL-3.0-or-later
// src/host/launcher.rs
//
// Hand an image to another application.

use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;

use super::{EditorLauncher, PathResolver};
use crate::domain::uri::Uri;

/// Opens images with a configured application or the desktop default.
pub struct OpenLauncher {
    editor: Option<String>,
    resolver: Arc<dyn PathResolver>,
}

impl OpenLauncher {
    pub fn new(editor: Option<String>, resolver: Arc<dyn PathResolver>) -> Self {
        Self { editor, resolver }
    }

    /// Local path when there is one, the URI text otherwise.
    fn target(&self, uri: &Uri) -> OsString {
        self.resolver
            .local_path(uri)
            .map_or_else(|| uri.to_string().into(), PathBuf::into_os_string)
    }
}

impl EditorLauncher for OpenLauncher {
    fn open_editor(&mut self, uri: &Uri) -> anyhow::Result<()> {
        let target = self.target(uri);
        match &self.editor {
            Some(app) => {
                log::info!("Opening {uri} with {app}");
                open::with(&target, app).with_context(|| format!("launching {app}"))
            }
            None => {
                log::info!("Opening {uri} with the default application");
                open::that(&target).context("launching default application")
            }
        }
    }
}
