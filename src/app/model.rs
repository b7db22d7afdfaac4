// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/model.rs
//
// Application state.

use crate::app::menu::{self, MenuAction};
use crate::domain::session::EditSession;

// =============================================================================
// Enums
// =============================================================================

/// Result reported to whoever launched the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultCode {
    Ok,
    #[default]
    Canceled,
}

// =============================================================================
// Model
// =============================================================================

#[derive(Debug)]
pub struct EditorModel {
    // Session.
    pub session: EditSession,

    // Outcome.
    pub result: ResultCode,
    pub finished: bool,

    // Background work in flight.
    pub loading: bool,
    pub cropping: bool,
    pub saving: bool,
}

impl EditorModel {
    pub fn new(session: EditSession) -> Self {
        Self {
            session,
            result: ResultCode::default(),
            finished: false,
            loading: false,
            cropping: false,
            saving: false,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.loading || self.cropping || self.saving
    }

    pub fn set_result(&mut self, result: ResultCode) {
        self.result = result;
    }

    pub fn finish(&mut self) {
        log::info!("Closing editor ({:?})", self.result);
        self.finished = true;
    }

    pub fn menu_items(&self) -> Vec<MenuAction> {
        menu::visible_items(self.session.is_crop_intent)
    }
}
