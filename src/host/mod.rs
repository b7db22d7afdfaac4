// SPDX-License-Identifier: GPL-3.0-or-later
// src/host/mod.rs
//
// Services the editor screen borrows from its host: dialogs, content
// resolution, media rescans, external editors and user notifications.

pub mod content;
pub mod launcher;
pub mod scanner;

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;

use crate::app::Toast;
use crate::domain::session::Size;
use crate::domain::uri::{Scheme, Uri};

pub use content::AuthorityResolver;
pub use launcher::OpenLauncher;
pub use scanner::LogScanner;

/// Modal dialogs. `None` means the user cancelled.
pub trait Dialogs: Send {
    /// Ask for a new output size, seeded with the current crop size.
    fn resize(&mut self, current: Size) -> Option<Size>;

    /// Ask where to save, seeded with the destination path.
    fn save_as(&mut self, suggested: &Path) -> Option<PathBuf>;
}

/// Maps locations to filesystem paths.
pub trait PathResolver: Send + Sync {
    /// Filesystem path behind a `content://` URI, if any.
    fn real_path(&self, uri: &Uri) -> Option<PathBuf>;

    /// Filesystem path for any supported location.
    fn local_path(&self, uri: &Uri) -> Option<PathBuf> {
        match uri.scheme() {
            Scheme::File => uri.file_path(),
            Scheme::Content => self.real_path(uri),
            Scheme::Other(_) => None,
        }
    }

    /// Writable stream for a location. Truncates existing files.
    fn open_output_stream(&self, uri: &Uri) -> anyhow::Result<Box<dyn Write + Send>> {
        let path = self
            .local_path(uri)
            .with_context(|| format!("no writable path for {uri}"))?;
        let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
        Ok(Box::new(file))
    }
}

/// Media index refresh after a file is written.
pub trait MediaScanner: Send {
    fn scan_path(&mut self, path: &Path) -> anyhow::Result<()>;
}

/// Third-party editor hand-off.
pub trait EditorLauncher: Send {
    fn open_editor(&mut self, uri: &Uri) -> anyhow::Result<()>;
}

/// Short user-facing messages.
pub trait Notifier: Send {
    fn toast(&self, toast: &Toast);
}

/// Everything the editor needs from outside.
pub struct Host {
    pub dialogs: Box<dyn Dialogs>,
    pub resolver: Arc<dyn PathResolver>,
    pub scanner: Box<dyn MediaScanner>,
    pub launcher: Box<dyn EditorLauncher>,
    pub notifier: Box<dyn Notifier>,
}

impl Host {
    pub fn toast(&self, toast: Toast) {
        log::debug!("toast: {toast}");
        self.notifier.toast(&toast);
    }
}
