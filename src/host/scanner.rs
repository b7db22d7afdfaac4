// SPDX-License-Identifier: GPL-3.0-or-later
// src/host/scanner.rs

use std::path::Path;

use anyhow::Context;

use super::MediaScanner;

/// Records written files in the log; there is no gallery index to refresh.
#[derive(Debug, Default)]
pub struct LogScanner;

impl MediaScanner for LogScanner {
    fn scan_path(&mut self, path: &Path) -> anyhow::Result<()> {
        let meta = std::fs::metadata(path).with_context(|| format!("scanning {}", path.display()))?;
        log::info!("Scanned {} ({} bytes)", path.display(), meta.len());
        Ok(())
    }
}
