// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/handoff.rs
//
// Third-party editor hand-off and the lifecycle that closes the screen after it.

use super::{Editor, Toast};

impl Editor {
    pub(super) fn edit_with(&mut self) {
        let source = self.model.session.source.clone();
        match self.host.launcher.open_editor(&source) {
            Ok(()) => self.model.session.is_editing_with_third_party = true,
            Err(e) => {
                log::error!("Failed to hand off {source}: {e:#}");
                self.toast(Toast::NoEditorFound);
            }
        }
    }

    pub(super) fn on_resume(&mut self) {
        self.model.session.is_editing_with_third_party = false;
    }

    /// The user left for the other editor; this screen has nothing left to do.
    pub(super) fn on_stop(&mut self) {
        if self.model.session.is_editing_with_third_party {
            self.model.finish();
        }
    }
}
