// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/dialogs.rs
//
// Dialog answers given up front on the command line.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use crate::domain::session::Size;
use crate::host::Dialogs;

/// How the save-as dialog is answered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SaveAsAnswer {
    /// Confirm the suggested path.
    #[default]
    AcceptSuggested,
    /// Replace the suggestion with this path.
    Path(PathBuf),
    Cancel,
}

/// Answers each resize dialog with the next queued size.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDialogs {
    resize_answers: VecDeque<Size>,
    save_as: SaveAsAnswer,
}

impl ScriptedDialogs {
    pub fn new(resize_answers: impl IntoIterator<Item = Size>, save_as: SaveAsAnswer) -> Self {
        Self {
            resize_answers: resize_answers.into_iter().collect(),
            save_as,
        }
    }
}

impl Dialogs for ScriptedDialogs {
    fn resize(&mut self, current: Size) -> Option<Size> {
        let answer = self.resize_answers.pop_front();
        match answer {
            Some(size) => log::info!("Resize dialog ({current}): {size}"),
            None => log::info!("Resize dialog ({current}): no answer, cancelled"),
        }
        answer
    }

    fn save_as(&mut self, suggested: &Path) -> Option<PathBuf> {
        let answer = match &self.save_as {
            SaveAsAnswer::AcceptSuggested => Some(suggested.to_path_buf()),
            SaveAsAnswer::Path(path) => Some(path.clone()),
            SaveAsAnswer::Cancel => None,
        };
        log::info!("Save-as dialog ({}): {answer:?}", suggested.display());
        answer
    }
}
