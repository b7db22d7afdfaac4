// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/notifier.rs

use crate::app::Toast;
use crate::host::Notifier;

/// Prints toasts on stderr, where a terminal user sees them.
#[derive(Debug, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn toast(&self, toast: &Toast) {
        eprintln!("{toast}");
    }
}
